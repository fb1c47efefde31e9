use crate::errors::BankingError;
use crate::ledger::IdGenerator;
use crate::tx::{Transaction, TxType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix of every transaction ID
pub const TX_ID_PREFIX: &str = "TXN";

/// **The type of an account**
///
/// Only [`AccountType::Savings`] accounts earn interest.
/// Anything that isn't recognized is kept verbatim as [`AccountType::Other`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AccountType {
    Savings,
    Checking,
    Other(String),
}

impl FromStr for AccountType {
    type Err = std::convert::Infallible;

    /// Recognizes "Savings" and "Checking" regardless of case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let account_type = if s.eq_ignore_ascii_case("savings") {
            AccountType::Savings
        } else if s.eq_ignore_ascii_case("checking") {
            AccountType::Checking
        } else {
            AccountType::Other(s.to_string())
        };
        Ok(account_type)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountType::Savings => write!(f, "Savings"),
            AccountType::Checking => write!(f, "Checking"),
            AccountType::Other(name) => write!(f, "{}", name),
        }
    }
}

/// **A bank account and its complete transaction history**
///
/// The balance always equals the initial deposit plus the signed sum
/// of all recorded transactions. The initial deposit itself isn't
/// recorded as a transaction.
#[derive(Debug)]
pub struct Account {
    account_number: String,
    holder_name: String,
    account_type: AccountType,
    initial_deposit: f64,
    balance: f64,
    transactions: Vec<Transaction>,
    tx_ids: IdGenerator,
}

impl Account {
    pub(crate) fn new(
        account_number: String,
        holder_name: &str,
        account_type: AccountType,
        initial_deposit: f64,
        first_tx_id: u64,
    ) -> Self {
        Account {
            account_number,
            holder_name: holder_name.to_string(),
            account_type,
            initial_deposit,
            balance: initial_deposit,
            transactions: vec![],
            tx_ids: IdGenerator::new(TX_ID_PREFIX, first_tx_id),
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> &AccountType {
        &self.account_type
    }

    pub fn initial_deposit(&self) -> f64 {
        self.initial_deposit
    }

    /// **Checks the current balance**
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// All transactions, oldest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn record(&mut self, tx_type: TxType, amount: f64) -> Transaction {
        let tx = Transaction::new(self.tx_ids.next_id(), tx_type, amount);
        self.transactions.push(tx.clone());
        tx
    }

    /// **Deposit funds**
    ///
    /// The amount isn't validated here: zero and negative amounts
    /// are recorded like any other deposit.
    pub fn deposit(&mut self, amount: f64) -> Transaction {
        self.balance += amount;
        let tx = self.record(TxType::Deposit, amount);
        log::info!(
            "deposit; account = {}, amount = {}, balance = {}",
            self.account_number,
            amount,
            self.balance
        );
        tx
    }

    /// **Withdraw funds**
    ///
    /// Only the upper bound is checked, so a negative amount
    /// goes through and increases the balance.
    ///
    /// # Errors
    /// - Amount larger than the balance, `BankingError::InsufficientFunds`
    pub fn withdraw(&mut self, amount: f64) -> Result<Transaction, BankingError> {
        if amount > self.balance {
            log::warn!(
                "withdraw; insufficient funds; account = {}, requested = {}, available = {}",
                self.account_number,
                amount,
                self.balance
            );
            return Err(BankingError::InsufficientFunds {
                account: self.account_number.clone(),
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        let tx = self.record(TxType::Withdrawal, amount);
        log::info!(
            "withdraw; account = {}, amount = {}, balance = {}",
            self.account_number,
            amount,
            self.balance
        );
        Ok(tx)
    }

    /// **Adds one month of interest to a Savings account**
    ///
    /// The interest is `balance * rate`; the rate isn't bounded here.
    ///
    /// # Errors
    /// - Not a Savings account, `BankingError::UnsupportedAccountTypeForInterest`
    pub fn add_monthly_interest(&mut self, rate: f64) -> Result<Transaction, BankingError> {
        if self.account_type != AccountType::Savings {
            log::warn!(
                "add_monthly_interest; not a Savings account; account = {}, type = {}",
                self.account_number,
                self.account_type
            );
            return Err(BankingError::UnsupportedAccountTypeForInterest(
                self.account_number.clone(),
            ));
        }

        let interest = self.balance * rate;
        self.balance += interest;
        let tx = self.record(TxType::Interest, interest);
        log::info!(
            "add_monthly_interest; account = {}, rate = {}, interest = {}, balance = {}",
            self.account_number,
            rate,
            interest,
            self.balance
        );
        Ok(tx)
    }

    /// **Generates the account statement**
    ///
    /// Entries are in chronological order.
    pub fn statement(&self) -> Statement {
        Statement {
            account_number: self.account_number.clone(),
            holder_name: self.holder_name.clone(),
            account_type: self.account_type.clone(),
            balance: self.balance,
            entries: self
                .transactions
                .iter()
                .map(|tx| StatementEntry {
                    date: tx.timestamp().date_naive(),
                    tx_type: tx.tx_type(),
                    amount: tx.amount(),
                })
                .collect(),
        }
    }
}

/// A single line of a [`Statement`]
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StatementEntry {
    pub date: NaiveDate,
    pub tx_type: TxType,
    pub amount: f64,
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.date.format("%m/%d/%Y"),
            self.tx_type,
            self.amount
        )
    }
}

/// **A chronological listing of an account's transactions**
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Statement {
    pub account_number: String,
    pub holder_name: String,
    pub account_type: AccountType,
    pub balance: f64,
    pub entries: Vec<StatementEntry>,
}

impl fmt::Display for Statement {
    /// The header line followed by one line per transaction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transaction history for account: {}", self.account_number)?;
        for entry in &self.entries {
            write!(f, "\n{}", entry)?;
        }
        Ok(())
    }
}
