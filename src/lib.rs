//! # cosmos-sampler
//!
//! Seed an Azure Cosmos DB container with synthetic product data and query
//! it back.
//!
//! The tool has two halves that share nothing but the target container:
//! a seeder that derives deterministic product records from fixed catalogs
//! and upserts them, and a query runner that executes a handful of fixed
//! SQL queries (filter, group-by count) and prints the rows.
//!
//! ```text
//! ┌──────────┐  upsert   ┌─────────────┐   query   ┌──────────┐
//! │  Seeder  │──────────▶│  Cosmos DB   │◀──────────│  Query   │
//! │ catalogs │           │  container   │           │  runner  │
//! └──────────┘           └─────────────┘           └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export AZURE_COSMOSDB_URL=https://myaccount.documents.azure.com
//! export AZURE_COSMOSDB_KEY=<base64 master key>
//!
//! cosq init               # create database + container
//! cosq seed               # upsert 100 product documents
//! cosq query products     # fresh fruit, one line per product
//! cosq query categories   # count per (main, sub) category pair
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Document and query-response types |
//! | [`catalog`] | Fixed catalogs and deterministic record derivation |
//! | [`client`] | Cosmos DB REST client (master-key auth) |
//! | [`init`] | Database/container provisioning |
//! | [`seed`] | Seeding loop |
//! | [`query`] | Fixed queries and row printing |
//! | [`status`] | Reachability check |

pub mod catalog;
pub mod client;
pub mod config;
pub mod init;
pub mod models;
pub mod query;
pub mod seed;
pub mod status;
