//! Container seeding.
//!
//! Derives the synthetic product records from the fixed catalogs and upserts
//! them one at a time. Writes are sequential and unbatched; if record `k`
//! fails, records `[0, k)` stay persisted and the rest are not attempted.
//! Re-running overwrites documents in place, so the container always holds
//! one document per index.

use anyhow::Result;

use crate::catalog;
use crate::client::CosmosClient;
use crate::config::Config;

pub async fn run_seed(config: &Config, count: Option<usize>) -> Result<()> {
    let client = CosmosClient::from_env(config)?;
    let count = count.unwrap_or(config.seed.count);
    let products = catalog::build_products(count);

    for product in &products {
        client.upsert_document(&product.id, product).await?;
    }

    println!("seed {}", config.cosmos.container);
    println!("  upserted products: {}", products.len());
    println!("ok");

    Ok(())
}
