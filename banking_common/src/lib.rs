pub mod accounts;
pub mod auth;
pub mod banking_app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod tx;
pub mod validation;

pub use accounts::{Account, AccountType, Statement, StatementEntry};
pub use banking_app::BankingApplication;
pub use config::{AmountPolicy, BankConfig};
pub use errors::BankingError;
pub use tx::{Transaction, TxType};

#[cfg(test)]
mod balance_props;
