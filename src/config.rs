//! Compiled-in settings of the lending desk.

/// Default number of login attempts before the gate locks
pub const DEFAULT_MAX_LOGIN_ATTEMPTS: u8 = 3;

/// Default number of transitions kept in the session history
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// The single username/password pair the gate accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Expected username
    username: String,
    /// Expected password
    password: String,
}

impl Credentials {
    /// Create a credential pair
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self { username: username.to_string(), password: password.to_string() }
    }

    /// Check an entered pair against the expected one
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("Andrea.Benitez", "1234")
    }
}

/// Settings shared by the gate and the desk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeskConfig {
    /// Accepted credential pair
    pub credentials: Credentials,
    /// Failed attempts allowed before lockout
    pub max_login_attempts: u8,
    /// Maximum number of transitions kept in history
    pub history_limit: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            max_login_attempts: DEFAULT_MAX_LOGIN_ATTEMPTS,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}
