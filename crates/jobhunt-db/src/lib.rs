use jobhunt_core::AppConfig;
use mongodb::{bson::doc, options::ClientOptions, Client};
use thiserror::Error;

mod connection;
mod documents;
mod store;

pub use connection::{ConnectionCell, ConnectionState};
pub use documents::{decode_companies, decode_company, DecodeError};
pub use store::{CompanyStore, StoreHandle};

const DEFAULT_DATABASE: &str = "JobHuntPipeline";
const DEFAULT_COLLECTION: &str = "data";
const DEFAULT_APP_NAME: &str = "jobhunt-directory";

/// Where the company collection lives.
#[derive(Clone)]
pub struct StoreConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
    pub app_name: String,
}

impl StoreConfig {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            uri: config.mongodb_uri.clone(),
            database: config.database_name.clone(),
            collection: config.collection_name.clone(),
            app_name: config.app_name.clone(),
        }
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("uri", &"[redacted]")
            .field("database", &self.database)
            .field("collection", &self.collection)
            .field("app_name", &self.app_name)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
}

/// Open a client and confirm the deployment answers a `ping`.
///
/// The driver connects lazily, so the ping is what turns "options parsed"
/// into "connection established".
///
/// # Errors
///
/// Returns [`DbError::Mongo`] if the URI is invalid or the ping fails.
pub async fn connect(config: &StoreConfig) -> Result<Client, DbError> {
    let mut options = ClientOptions::parse(config.uri.as_str()).await?;
    options.app_name = Some(config.app_name.clone());
    let client = Client::with_options(options)?;
    ping(&client, &config.database).await?;
    Ok(client)
}

/// Send a `ping` command to the given database.
///
/// # Errors
///
/// Returns [`DbError::Mongo`] if the command fails.
pub async fn ping(client: &Client, database: &str) -> Result<(), DbError> {
    client
        .database(database)
        .run_command(doc! { "ping": 1 })
        .await?;
    Ok(())
}
