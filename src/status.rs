//! Account and container health check.
//!
//! Prints the configured target and whether the endpoint, database, and
//! container are reachable. Useful for verifying credentials and
//! configuration before running a seed.

use anyhow::Result;

use crate::client::CosmosClient;
use crate::config::Config;

pub async fn run_status(config: &Config) -> Result<()> {
    let client = CosmosClient::from_env(config)?;

    println!("endpoint:  {}", client.endpoint());

    let db_ok = client.database_exists().await?;
    println!(
        "database:  {} ({})",
        config.cosmos.database,
        if db_ok { "OK" } else { "NOT FOUND" }
    );

    // Skip the container probe when the database itself is missing.
    let coll_ok = if db_ok {
        client.container_exists().await?
    } else {
        false
    };
    println!(
        "container: {} ({})",
        config.cosmos.container,
        if coll_ok { "OK" } else { "NOT FOUND" }
    );

    if !db_ok || !coll_ok {
        println!("run `cosq init` to create the missing resources");
    }

    Ok(())
}
