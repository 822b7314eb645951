use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Root of the persistence API, without the `/api` prefix.
    pub api_url: String,
    pub georef_url: String,
    pub nominatim_url: String,
    /// Sent on every outbound request; Nominatim rejects anonymous clients.
    pub user_agent: String,
    /// `None` means persistence calls wait indefinitely.
    pub api_timeout_secs: Option<u64>,
    pub session_path: PathBuf,
}
