use thiserror::Error;

/// **An application-specific error type**
///
/// Every variant is recoverable: the operation that produced it
/// left the accounts, the users and the session exactly as they were.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BankingError {
    #[error("Invalid credentials.")]
    InvalidCredentials(String),

    #[error("You must be logged in to perform this action.")]
    NotLoggedIn,

    #[error("Account not found.")]
    AccountNotFound(String),

    #[error("Insufficient funds.")]
    InsufficientFunds {
        account: String,
        requested: f64,
        available: f64,
    },

    #[error("Interest calculation is only applicable to Savings accounts.")]
    UnsupportedAccountTypeForInterest(String),

    /// Only the presentation layer produces this one.
    #[error("Invalid input. Please enter a valid number; you provided '{0}'.")]
    InvalidNumericInput(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid name: \"{0}\". Name cannot be empty.")]
    InvalidName(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_users_see() {
        assert_eq!(
            "Invalid credentials.",
            BankingError::InvalidCredentials("alice".to_string()).to_string()
        );
        assert_eq!(
            "You must be logged in to perform this action.",
            BankingError::NotLoggedIn.to_string()
        );
        assert_eq!(
            "Account not found.",
            BankingError::AccountNotFound("ACCT10000".to_string()).to_string()
        );
        assert_eq!(
            "Insufficient funds.",
            BankingError::InsufficientFunds {
                account: "ACCT10000".to_string(),
                requested: 1000.0,
                available: 120.0,
            }
            .to_string()
        );
        assert_eq!(
            "Interest calculation is only applicable to Savings accounts.",
            BankingError::UnsupportedAccountTypeForInterest("ACCT10000".to_string()).to_string()
        );
    }

    #[test]
    fn invalid_input_messages_carry_the_input() {
        assert!(BankingError::InvalidNumericInput("abc".to_string())
            .to_string()
            .contains("'abc'"));
        assert_eq!(
            "Invalid name: \"  \". Name cannot be empty.",
            BankingError::InvalidName("  ".to_string()).to_string()
        );
    }
}
