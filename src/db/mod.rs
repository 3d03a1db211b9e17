//! MongoDB connection lifecycle.
//!
//! The caller owns the handle for the duration of its work: `connect` once,
//! hand the `Database` to stores, `disconnect` when done.

use log::info;
use mongodb::bson::doc;
use mongodb::{Client, Database};

use crate::config::Config;
use crate::errors::RepoError;

/// Open a client for `config.mongodb_uri` and verify the server answers.
pub async fn connect(config: &Config) -> Result<(Client, Database), RepoError> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&config.mongodb_uri).await?;
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB database {}", config.database_name);

    Ok((client, db))
}

/// Close the client once in-flight operations finish.
pub async fn disconnect(client: Client) {
    client.shutdown().await;
    info!("Disconnected from MongoDB");
}
