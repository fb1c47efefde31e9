//! Input checks applied under the strict amount policy
//!
//! Each check returns `Some` message describing the problem, or `None` if the input is fine.

/// **Basic input validation for a user's or an account holder's name**
///
/// Checks for:
/// - An empty string.
pub fn is_valid_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        Some("Name cannot be empty.".to_string())
    } else {
        None
    }
}

/// **Validation of a deposit or withdrawal amount**
///
/// Checks for:
/// - NaN and infinities;
/// - Zero and negative amounts.
pub fn is_valid_amount(amount: f64) -> Option<String> {
    if !amount.is_finite() {
        Some(format!("{} is not a finite number.", amount))
    } else if amount <= 0.0 {
        Some(format!("{} must be greater than zero.", amount))
    } else {
        None
    }
}

/// **Validation of an initial deposit**
///
/// Like [`is_valid_amount`], but an account may be opened with nothing in it.
pub fn is_valid_initial_deposit(amount: f64) -> Option<String> {
    if !amount.is_finite() {
        Some(format!("{} is not a finite number.", amount))
    } else if amount < 0.0 {
        Some(format!("{} cannot be negative.", amount))
    } else {
        None
    }
}

/// **Validation of a monthly interest rate**
///
/// The rate must be a finite number in `[0, 1]`.
pub fn is_valid_rate(rate: f64) -> Option<String> {
    if !(0.0..=1.0).contains(&rate) {
        Some(format!("The interest rate {} is outside of [0, 1].", rate))
    } else {
        None
    }
}
