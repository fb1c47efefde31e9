use crate::accounts::{Account, AccountType, Statement};
use crate::auth::{Session, UserDirectory};
use crate::config::{AmountPolicy, BankConfig};
use crate::errors::BankingError;
use crate::ledger::Ledger;
use crate::tx::Transaction;
use crate::validation;

/// **Owns users, the session and the ledger, and gates every account operation behind a login.**
///
/// Operations that fail leave everything as it was.
#[derive(Debug)]
pub struct BankingApplication {
    config: BankConfig,
    users: UserDirectory,
    session: Session,
    ledger: Ledger,
}

impl Default for BankingApplication {
    fn default() -> Self {
        Self::new(BankConfig::default())
    }
}

impl BankingApplication {
    /// **Creates a new instance without any data.**
    pub fn new(config: BankConfig) -> Self {
        BankingApplication {
            ledger: Ledger::new(config.first_account_number, config.first_transaction_id),
            users: UserDirectory::new(),
            session: Session::new(),
            config,
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn users(&self) -> &UserDirectory {
        &self.users
    }

    fn is_strict(&self) -> bool {
        self.config.amount_policy == AmountPolicy::Strict
    }

    fn check_name(&self, name: &str) -> Result<(), BankingError> {
        if self.is_strict() {
            if let Some(msg) = validation::is_valid_name(name) {
                log::warn!("{}: \"{}\"", msg, name);
                return Err(BankingError::InvalidName(name.to_string()));
            }
        }
        Ok(())
    }

    fn check(&self, problem: Option<String>) -> Result<(), BankingError> {
        match problem {
            Some(msg) if self.is_strict() => {
                log::warn!("{}", msg);
                Err(BankingError::InvalidAmount(msg))
            }
            _ => Ok(()),
        }
    }

    /// **Registers a new user**
    ///
    /// Duplicate usernames are allowed.
    ///
    /// # Errors
    /// - Blank username under the strict policy, `BankingError::InvalidName`
    pub fn register(&mut self, username: &str, password: &str) -> Result<(), BankingError> {
        log::debug!("register; username = {}", username);
        self.check_name(username)?;
        self.users.register(username, password);
        log::info!("register; username = {}, users = {}", username, self.users.len());
        Ok(())
    }

    /// **Logs a user in**
    ///
    /// A failed attempt doesn't log out whoever is logged in.
    ///
    /// # Errors
    /// - No exact match, `BankingError::InvalidCredentials`
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), BankingError> {
        log::debug!("login; username = {}", username);
        match self.session.login(&self.users, username, password) {
            Ok(()) => {
                log::info!("login; username = {}", username);
                Ok(())
            }
            Err(err) => {
                log::warn!("login; invalid credentials; username = {}", username);
                Err(err)
            }
        }
    }

    /// Logs out unconditionally.
    pub fn logout(&mut self) {
        log::info!("logout; username = {:?}", self.current_user());
        self.session.logout();
    }

    pub fn is_user_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    /// The logged-in user's name
    pub fn current_user(&self) -> Option<&str> {
        self.session
            .user(&self.users)
            .map(|user| user.username.as_str())
    }

    /// **The login gate**
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`
    pub fn require_login(&self) -> Result<(), BankingError> {
        if self.is_user_logged_in() {
            Ok(())
        } else {
            log::warn!("{}", BankingError::NotLoggedIn);
            Err(BankingError::NotLoggedIn)
        }
    }

    /// **Opens an account for the logged-in user**
    ///
    /// Returns the new account number.
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`;
    /// - Blank holder name under the strict policy, `BankingError::InvalidName`;
    /// - Negative or non-finite initial deposit under the strict policy, `BankingError::InvalidAmount`.
    pub fn open_account(
        &mut self,
        holder_name: &str,
        account_type: AccountType,
        initial_deposit: f64,
    ) -> Result<String, BankingError> {
        log::debug!(
            "open_account; holder = {}, type = {}, initial deposit = {}",
            holder_name,
            account_type,
            initial_deposit
        );
        self.require_login()?;
        self.check_name(holder_name)?;
        self.check(validation::is_valid_initial_deposit(initial_deposit))?;

        Ok(self
            .ledger
            .open_account(holder_name, account_type, initial_deposit))
    }

    /// **Retrieves an account**
    ///
    /// Never creates one.
    ///
    /// # Errors
    /// - Account doesn't exist, `BankingError::AccountNotFound`
    pub fn get_account(&self, account_number: &str) -> Result<&Account, BankingError> {
        self.ledger.get_account(account_number).map_err(|err| {
            log::warn!("get_account; not found; account = {}", account_number);
            err
        })
    }

    /// **Deposit funds**
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`;
    /// - Account doesn't exist, `BankingError::AccountNotFound`;
    /// - Non-positive amount under the strict policy, `BankingError::InvalidAmount`.
    pub fn deposit(&mut self, account_number: &str, amount: f64) -> Result<Transaction, BankingError> {
        log::debug!("deposit; account = {}, amount = {}", account_number, amount);
        self.require_login()?;
        self.get_account(account_number)?;
        self.check(validation::is_valid_amount(amount))?;

        Ok(self.ledger.get_account_mut(account_number)?.deposit(amount))
    }

    /// **Withdraw funds**
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`;
    /// - Account doesn't exist, `BankingError::AccountNotFound`;
    /// - Non-positive amount under the strict policy, `BankingError::InvalidAmount`;
    /// - Amount larger than the balance, `BankingError::InsufficientFunds`.
    pub fn withdraw(
        &mut self,
        account_number: &str,
        amount: f64,
    ) -> Result<Transaction, BankingError> {
        log::debug!("withdraw; account = {}, amount = {}", account_number, amount);
        self.require_login()?;
        self.get_account(account_number)?;
        self.check(validation::is_valid_amount(amount))?;

        self.ledger.get_account_mut(account_number)?.withdraw(amount)
    }

    /// **Adds one month of interest to a Savings account**
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`;
    /// - Account doesn't exist, `BankingError::AccountNotFound`;
    /// - Not a Savings account, `BankingError::UnsupportedAccountTypeForInterest`;
    /// - Rate outside of `[0, 1]` under the strict policy, `BankingError::InvalidAmount`.
    pub fn add_monthly_interest(
        &mut self,
        account_number: &str,
        rate: f64,
    ) -> Result<Transaction, BankingError> {
        log::debug!(
            "add_monthly_interest; account = {}, rate = {}",
            account_number,
            rate
        );
        self.require_login()?;
        self.get_account(account_number)?;
        self.check(validation::is_valid_rate(rate))?;

        self.ledger
            .get_account_mut(account_number)?
            .add_monthly_interest(rate)
    }

    /// **Retrieves the balance of an account**
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`;
    /// - Account doesn't exist, `BankingError::AccountNotFound`.
    pub fn check_balance(&self, account_number: &str) -> Result<f64, BankingError> {
        log::debug!("check_balance; account = {}", account_number);
        self.require_login()?;
        Ok(self.get_account(account_number)?.balance())
    }

    /// **Generates an account statement**
    ///
    /// # Errors
    /// - Nobody is logged in, `BankingError::NotLoggedIn`;
    /// - Account doesn't exist, `BankingError::AccountNotFound`.
    pub fn generate_statement(&self, account_number: &str) -> Result<Statement, BankingError> {
        log::debug!("generate_statement; account = {}", account_number);
        self.require_login()?;
        Ok(self.get_account(account_number)?.statement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tx::TxType;

    fn logged_in(config: BankConfig) -> BankingApplication {
        let mut app = BankingApplication::new(config);
        app.register("alice", "secret").unwrap();
        app.login("alice", "secret").unwrap();
        app
    }

    fn strict() -> BankConfig {
        BankConfig {
            amount_policy: AmountPolicy::Strict,
            ..BankConfig::default()
        }
    }

    #[test]
    fn savings_deposit_withdraw_interest() {
        let mut app = logged_in(BankConfig::default());
        let number = app
            .open_account("Alice", AccountType::Savings, 100.0)
            .unwrap();

        let tx = app.deposit(&number, 50.0).unwrap();
        assert_eq!(TxType::Deposit, tx.tx_type());
        assert_eq!(Ok(150.0), app.check_balance(&number));

        assert!(app.withdraw(&number, 30.0).is_ok());
        assert_eq!(Ok(120.0), app.check_balance(&number));

        assert_eq!(
            Err(BankingError::InsufficientFunds {
                account: number.clone(),
                requested: 1000.0,
                available: 120.0,
            }),
            app.withdraw(&number, 1000.0)
        );
        assert_eq!(Ok(120.0), app.check_balance(&number));

        let tx = app.add_monthly_interest(&number, 0.05).unwrap();
        assert_eq!(TxType::Interest, tx.tx_type());
        assert_eq!(6.0, tx.amount());
        assert_eq!(Ok(126.0), app.check_balance(&number));

        let statement = app.generate_statement(&number).unwrap();
        assert_eq!(
            vec![
                (TxType::Deposit, 50.0),
                (TxType::Withdrawal, 30.0),
                (TxType::Interest, 6.0)
            ],
            statement
                .entries
                .iter()
                .map(|e| (e.tx_type, e.amount))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn account_operations_require_login() {
        let mut app = logged_in(BankConfig::default());
        let number = app
            .open_account("Alice", AccountType::Savings, 100.0)
            .unwrap();
        app.logout();

        assert!(!app.is_user_logged_in());
        assert_eq!(Err(BankingError::NotLoggedIn), app.require_login());
        assert_eq!(
            Err(BankingError::NotLoggedIn),
            app.open_account("Alice", AccountType::Savings, 1.0)
        );
        assert_eq!(Err(BankingError::NotLoggedIn), app.deposit(&number, 1.0));
        assert_eq!(Err(BankingError::NotLoggedIn), app.withdraw(&number, 1.0));
        assert_eq!(
            Err(BankingError::NotLoggedIn),
            app.add_monthly_interest(&number, 0.1)
        );
        assert_eq!(Err(BankingError::NotLoggedIn), app.check_balance(&number));
        assert_eq!(
            Err(BankingError::NotLoggedIn),
            app.generate_statement(&number)
        );

        assert_eq!(1, app.ledger().len());
        assert_eq!(100.0, app.get_account(&number).unwrap().balance());
        assert!(app
            .get_account(&number)
            .unwrap()
            .transactions()
            .is_empty());
    }

    #[test]
    fn unknown_account_is_not_created() {
        let mut app = logged_in(BankConfig::default());

        assert_eq!(
            Err(BankingError::AccountNotFound("ACCT12345".to_string())),
            app.deposit("ACCT12345", 10.0)
        );
        assert_eq!(
            BankingError::AccountNotFound("ACCT12345".to_string()),
            app.get_account("ACCT12345").unwrap_err()
        );
        assert!(app.ledger().is_empty());
    }

    #[test]
    fn login_failure_keeps_session() {
        let mut app = logged_in(BankConfig::default());
        app.register("bob", "pw").unwrap();

        assert_eq!(
            Err(BankingError::InvalidCredentials("bob".to_string())),
            app.login("bob", "PW")
        );
        assert_eq!(Some("alice"), app.current_user());

        assert!(app.login("bob", "pw").is_ok());
        assert_eq!(Some("bob"), app.current_user());
    }

    #[test]
    fn login_without_users_fails() {
        let mut app = BankingApplication::default();

        assert!(app.login("", "").is_err());
        assert!(!app.is_user_logged_in());
        assert_eq!(None, app.current_user());
    }

    #[test]
    fn interest_on_checking_is_rejected() {
        let mut app = logged_in(BankConfig::default());
        let number = app
            .open_account("Alice", AccountType::Checking, 100.0)
            .unwrap();

        assert_eq!(
            Err(BankingError::UnsupportedAccountTypeForInterest(
                number.clone()
            )),
            app.add_monthly_interest(&number, 0.05)
        );
        assert_eq!(Ok(100.0), app.check_balance(&number));
    }

    #[test]
    fn permissive_policy_accepts_odd_amounts() {
        let mut app = logged_in(BankConfig::default());
        let number = app
            .open_account("Alice", AccountType::Savings, -10.0)
            .unwrap();

        assert!(app.deposit(&number, -5.0).is_ok());
        assert!(app.withdraw(&number, -20.0).is_ok());
        assert!(app.add_monthly_interest(&number, 2.0).is_ok());

        // -10 - 5 + 20 = 5, then 5 * 2 of interest
        assert_eq!(Ok(15.0), app.check_balance(&number));
    }

    #[test]
    fn strict_policy_rejects_odd_amounts() {
        let mut app = logged_in(strict());

        assert!(matches!(
            app.open_account("Alice", AccountType::Savings, -10.0),
            Err(BankingError::InvalidAmount(_))
        ));
        assert_eq!(
            Err(BankingError::InvalidName(" ".to_string())),
            app.open_account(" ", AccountType::Savings, 10.0)
        );
        assert!(app.ledger().is_empty());

        let number = app
            .open_account("Alice", AccountType::Savings, 0.0)
            .unwrap();

        assert!(matches!(
            app.deposit(&number, 0.0),
            Err(BankingError::InvalidAmount(_))
        ));
        assert!(matches!(
            app.withdraw(&number, -20.0),
            Err(BankingError::InvalidAmount(_))
        ));
        assert!(matches!(
            app.add_monthly_interest(&number, 1.5),
            Err(BankingError::InvalidAmount(_))
        ));

        assert_eq!(Ok(0.0), app.check_balance(&number));
        assert!(app.get_account(&number).unwrap().transactions().is_empty());
    }

    #[test]
    fn strict_policy_rejects_blank_usernames() {
        let mut app = BankingApplication::new(strict());

        assert_eq!(
            Err(BankingError::InvalidName("".to_string())),
            app.register("", "pw")
        );
        assert!(app.users().is_empty());
    }

    #[test]
    fn account_numbers_follow_config() {
        let mut app = logged_in(BankConfig {
            first_account_number: 500,
            first_transaction_id: 7,
            ..BankConfig::default()
        });

        let number = app.open_account("Alice", AccountType::Savings, 0.0).unwrap();
        assert_eq!("ACCT500", number);
        assert_eq!("TXN7", app.deposit(&number, 1.0).unwrap().id());
    }
}
