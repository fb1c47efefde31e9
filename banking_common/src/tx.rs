use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// **The kind of balance change a transaction records**
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TxType {
    Deposit,
    Withdrawal,
    Interest,
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TxType::Deposit => "Deposit",
            TxType::Withdrawal => "Withdrawal",
            TxType::Interest => "Interest",
        };
        write!(f, "{}", name)
    }
}

/// **A transaction record**
///
/// An immutable fact about a balance change of a single account.
/// The amount is stored as given; the [`TxType`] decides its sign.
///
/// Transactions should be able to rebuild an account's balance
/// when they are applied in the same sequence to the initial deposit.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Transaction {
    id: String,
    timestamp: DateTime<Local>,
    tx_type: TxType,
    amount: f64,
}

impl Transaction {
    /// Records a new transaction happening now.
    pub fn new(id: String, tx_type: TxType, amount: f64) -> Self {
        Transaction {
            id,
            timestamp: Local::now(),
            tx_type,
            amount,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn tx_type(&self) -> TxType {
        self.tx_type
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// **The amount with the sign it has on the balance**
    ///
    /// Deposits and interest add to the balance, withdrawals take from it.
    pub fn signed_amount(&self) -> f64 {
        match self.tx_type {
            TxType::Deposit | TxType::Interest => self.amount,
            TxType::Withdrawal => -self.amount,
        }
    }
}
