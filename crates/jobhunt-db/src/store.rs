//! Read access to the company collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use jobhunt_core::Company;
use mongodb::{
    bson::{doc, Document},
    Client,
};

use crate::{connect, decode_companies, ping, ConnectionCell, ConnectionState, DbError, StoreConfig};

/// Source of company records for the listing endpoint.
#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Every company in the collection, in the store's natural order.
    async fn list_companies(&self) -> Result<Vec<Company>, DbError>;

    /// Confirm the store is reachable.
    async fn health_check(&self) -> Result<(), DbError>;
}

/// Process-wide handle to the document store.
///
/// Built once at startup and shared by every request. The client is
/// connected on first use and reused for the rest of the process; the
/// driver's internal pool handles reconnects underneath it.
#[derive(Debug)]
pub struct StoreHandle {
    config: StoreConfig,
    client: ConnectionCell<Client>,
}

impl StoreHandle {
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            client: ConnectionCell::new(),
        }
    }

    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        self.client.state()
    }

    async fn client(&self) -> Result<&Client, DbError> {
        self.client
            .get_or_connect(|| async {
                let client = connect(&self.config).await?;
                tracing::info!(
                    database = %self.config.database,
                    collection = %self.config.collection,
                    "document store connection established"
                );
                Ok(client)
            })
            .await
    }

    /// Close the cached client, if one was ever established.
    pub async fn shutdown(&self) {
        if let Some(client) = self.client.get() {
            client.clone().shutdown().await;
            tracing::info!("document store connection closed");
        }
    }
}

#[async_trait]
impl CompanyStore for StoreHandle {
    async fn list_companies(&self) -> Result<Vec<Company>, DbError> {
        let client = self.client().await?;
        let documents: Vec<Document> = client
            .database(&self.config.database)
            .collection::<Document>(&self.config.collection)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        tracing::debug!(count = documents.len(), "fetched company documents");
        Ok(decode_companies(documents))
    }

    async fn health_check(&self) -> Result<(), DbError> {
        let client = self.client().await?;
        ping(client, &self.config.database).await
    }
}
