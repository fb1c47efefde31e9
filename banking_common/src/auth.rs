//! Registered users and the session of the one who is logged in
//!
//! Credentials are kept and compared as plain text.

use crate::errors::BankingError;

/// **A registered user**
#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// **All registered users, in registration order**
///
/// Usernames aren't required to be unique.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        UserDirectory { users: vec![] }
    }

    /// Registers a new user unconditionally.
    pub fn register(&mut self, username: &str, password: &str) {
        self.users.push(User {
            username: username.to_string(),
            password: password.to_string(),
        });
    }

    /// **Finds the first user whose credentials match exactly**
    ///
    /// Returns the user's position in the directory.
    pub fn find(&self, username: &str, password: &str) -> Option<usize> {
        self.users
            .iter()
            .position(|u| u.username == username && u.password == password)
    }

    pub fn get(&self, index: usize) -> Option<&User> {
        self.users.get(index)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// **Who, if anyone, is logged in**
///
/// Points at a user in a [`UserDirectory`] by position.
/// Users are never removed, so the position stays valid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Session {
    user: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Session { user: None }
    }

    /// **Logs in**
    ///
    /// On a mismatch the current session, if any, is kept.
    ///
    /// # Errors
    /// - No user with exactly these credentials, `BankingError::InvalidCredentials`
    pub fn login(
        &mut self,
        users: &UserDirectory,
        username: &str,
        password: &str,
    ) -> Result<(), BankingError> {
        match users.find(username, password) {
            Some(index) => {
                self.user = Some(index);
                Ok(())
            }
            None => Err(BankingError::InvalidCredentials(username.to_string())),
        }
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// The logged-in user
    pub fn user<'a>(&self, users: &'a UserDirectory) -> Option<&'a User> {
        self.user.and_then(|index| users.get(index))
    }
}
