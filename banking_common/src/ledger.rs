use crate::accounts::{Account, AccountType};
use crate::errors::BankingError;
use std::collections::BTreeMap;

/// Prefix of every account number
pub const ACCOUNT_NUMBER_PREFIX: &str = "ACCT";

/// **A monotonic identifier source**
///
/// Produces `prefix` followed by a sequence number, e.g., `ACCT10000`, `ACCT10001`, ...
#[derive(Clone, Debug)]
pub struct IdGenerator {
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str, first: u64) -> Self {
        IdGenerator {
            prefix,
            next: first,
        }
    }

    /// Hands out the next identifier and advances the sequence.
    pub fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// **The account directory**
///
/// Maps an account number to its [`Account`].
/// Accounts are never removed.
#[derive(Debug)]
pub struct Ledger {
    accounts: BTreeMap<String, Account>,
    account_numbers: IdGenerator,
    first_tx_id: u64,
}

impl Ledger {
    /// Returns an empty instance of the [`Ledger`] type
    ///
    /// Account numbers start from `first_account_number`,
    /// and every account's transaction IDs start from `first_tx_id`.
    pub fn new(first_account_number: u64, first_tx_id: u64) -> Self {
        Ledger {
            accounts: BTreeMap::new(),
            account_numbers: IdGenerator::new(ACCOUNT_NUMBER_PREFIX, first_account_number),
            first_tx_id,
        }
    }

    /// Draws account numbers until one that isn't taken comes up.
    fn fresh_account_number(&mut self) -> String {
        loop {
            let number = self.account_numbers.next_id();
            if !self.accounts.contains_key(&number) {
                return number;
            }
            log::warn!("account number {} already taken; drawing another one", number);
        }
    }

    /// **Opens a new account**
    ///
    /// The initial deposit becomes the opening balance; it isn't validated here.
    ///
    /// Returns the new account number.
    pub fn open_account(
        &mut self,
        holder_name: &str,
        account_type: AccountType,
        initial_deposit: f64,
    ) -> String {
        let number = self.fresh_account_number();
        let account = Account::new(
            number.clone(),
            holder_name,
            account_type,
            initial_deposit,
            self.first_tx_id,
        );
        log::info!(
            "open_account; account = {}, holder = {}, type = {}, initial deposit = {}",
            number,
            holder_name,
            account.account_type(),
            initial_deposit
        );
        self.accounts.insert(number.clone(), account);
        number
    }

    /// Retrieves an account
    ///
    /// # Errors
    /// - Account doesn't exist, `BankingError::AccountNotFound`
    pub fn get_account(&self, account_number: &str) -> Result<&Account, BankingError> {
        self.accounts
            .get(account_number)
            .ok_or_else(|| BankingError::AccountNotFound(account_number.to_string()))
    }

    /// Retrieves an account for modification
    ///
    /// # Errors
    /// - Account doesn't exist, `BankingError::AccountNotFound`
    pub fn get_account_mut(&mut self, account_number: &str) -> Result<&mut Account, BankingError> {
        self.accounts
            .get_mut(account_number)
            .ok_or_else(|| BankingError::AccountNotFound(account_number.to_string()))
    }

    /// All accounts, ordered by account number
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
