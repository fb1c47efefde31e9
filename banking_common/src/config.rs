//! Runtime configuration
//!
//! Every setting has a default, and can be overridden through the environment.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

pub const AMOUNT_POLICY_VAR: &str = "BANKING_AMOUNT_POLICY";
pub const FIRST_ACCOUNT_NUMBER_VAR: &str = "BANKING_FIRST_ACCOUNT_NUMBER";
pub const FIRST_TX_ID_VAR: &str = "BANKING_FIRST_TRANSACTION_ID";

/// The lowest sequence number handed out for account numbers and transaction IDs
pub const DEFAULT_FIRST_ID: u64 = 10000;

/// **How amounts, rates and names coming from users are treated**
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Anything goes: negative deposits and withdrawals, any interest rate, blank names.
    #[default]
    Permissive,

    /// Amounts must be positive, initial deposits non-negative,
    /// rates within `[0, 1]`, names non-blank.
    Strict,
}

impl FromStr for AmountPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" => Ok(AmountPolicy::Permissive),
            "strict" => Ok(AmountPolicy::Strict),
            other => Err(format!("unknown amount policy '{}'", other)),
        }
    }
}

impl fmt::Display for AmountPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountPolicy::Permissive => write!(f, "permissive"),
            AmountPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// **Banking application configuration**
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BankConfig {
    #[serde(default)]
    pub amount_policy: AmountPolicy,

    /// Sequence number of the first account number, e.g., `ACCT10000`
    #[serde(default = "default_first_id")]
    pub first_account_number: u64,

    /// Sequence number of each account's first transaction ID, e.g., `TXN10000`
    #[serde(default = "default_first_id")]
    pub first_transaction_id: u64,
}

fn default_first_id() -> u64 {
    DEFAULT_FIRST_ID
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            amount_policy: AmountPolicy::default(),
            first_account_number: DEFAULT_FIRST_ID,
            first_transaction_id: DEFAULT_FIRST_ID,
        }
    }
}

impl BankConfig {
    /// **Loads configuration from environment variables**
    ///
    /// A missing variable keeps its default; an unparsable one is
    /// reported as a warning and also keeps its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BankConfig::from_env`], with variables provided by `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BankConfig::default();

        BankConfig {
            amount_policy: parse_or(&lookup, AMOUNT_POLICY_VAR, defaults.amount_policy),
            first_account_number: parse_or(
                &lookup,
                FIRST_ACCOUNT_NUMBER_VAR,
                defaults.first_account_number,
            ),
            first_transaction_id: parse_or(&lookup, FIRST_TX_ID_VAR, defaults.first_transaction_id),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|_| {
            log::warn!("{} = '{}' could not be parsed; using {}", key, raw, default);
            default
        }),
        None => default,
    }
}
