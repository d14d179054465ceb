//! Database and container provisioning.

use anyhow::Result;

use crate::client::CosmosClient;
use crate::config::Config;

/// Create the database and container if they do not exist. Idempotent:
/// the service answers 409 for resources that already exist, which is
/// treated as success.
pub async fn run_init(config: &Config) -> Result<()> {
    let client = CosmosClient::from_env(config)?;

    let db_created = client.create_database_if_absent().await?;
    println!(
        "database {}: {}",
        config.cosmos.database,
        if db_created { "created" } else { "already exists" }
    );

    let coll_created = client.create_container_if_absent().await?;
    println!(
        "container {}: {}",
        config.cosmos.container,
        if coll_created { "created" } else { "already exists" }
    );

    Ok(())
}
