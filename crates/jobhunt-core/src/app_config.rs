use std::net::SocketAddr;
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

#[derive(Clone)]
pub struct AppConfig {
    /// Connection string for the document store. May embed credentials.
    pub mongodb_uri: String,
    pub database_name: String,
    pub collection_name: String,
    pub app_name: String,
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub static_dir: PathBuf,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("mongodb_uri", &"[redacted]")
            .field("database_name", &self.database_name)
            .field("collection_name", &self.collection_name)
            .field("app_name", &self.app_name)
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}
