//! Accounts allowed to log in.
//!
//! The table is fixed in memory for the life of the kernel. Passwords are
//! kept only as SHA-256 digests.

use sha2::{Digest, Sha256};
use thiserror::Error;

/// Login failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid login")]
    InvalidLogin,

    /// A login attempt outside the authenticating state.
    #[error("already logged in")]
    NotExpected,
}

/// Login name, password and privilege for one account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSpec {
    pub login: String,
    pub password: String,
    pub superuser: bool,
}

impl UserSpec {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
            superuser: false,
        }
    }

    pub fn superuser(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            superuser: true,
            ..Self::new(login, password)
        }
    }
}

/// A user that can log in.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    login: String,
    password_digest: [u8; 32],
    superuser: bool,
}

impl User {
    pub fn from_spec(spec: &UserSpec) -> Self {
        Self {
            login: spec.login.clone(),
            password_digest: digest(&spec.password),
            superuser: spec.superuser,
        }
    }

    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn is_superuser(&self) -> bool {
        self.superuser
    }

    fn check_password(&self, password: &str) -> bool {
        self.password_digest == digest(password)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("login", &self.login)
            .field("superuser", &self.superuser)
            .finish_non_exhaustive()
    }
}

fn digest(password: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(password.as_bytes()));
    out
}

/// The accounts the login prompt accepts.
#[derive(Debug, Clone, Default)]
pub struct UserTable {
    users: Vec<User>,
}

impl UserTable {
    pub fn new(specs: &[UserSpec]) -> Self {
        Self {
            users: specs.iter().map(User::from_spec).collect(),
        }
    }

    /// `root` (superuser) and `user`, both with password `12345678`.
    pub fn default_specs() -> Vec<UserSpec> {
        vec![
            UserSpec::superuser("root", "12345678"),
            UserSpec::new("user", "12345678"),
        ]
    }

    /// Find the account matching both login and password.
    pub fn authenticate(&self, login: &str, password: &str) -> Result<&User, AuthError> {
        self.users
            .iter()
            .find(|u| u.login == login && u.check_password(password))
            .ok_or(AuthError::InvalidLogin)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
