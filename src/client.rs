//! Azure Cosmos DB REST client.
//!
//! Talks to a Cosmos DB account directly over its REST API with master-key
//! authentication. Covers exactly what the sampler needs: create the database
//! and container, upsert documents, and run SQL queries with cross-partition
//! fan-out. Everything heavier (retry, partitioning strategy, query planning,
//! consistency levels) is the service's job, not this client's.
//!
//! Uses only pure-Rust dependencies (`hmac`, `sha2`, `base64`) for request
//! signing — no C library dependencies, making it compatible with all build
//! environments including Nix.
//!
//! # Environment Variables
//!
//! Credentials are read from environment variables:
//! - `AZURE_COSMOSDB_URL` — account endpoint, e.g. `https://myaccount.documents.azure.com`
//! - `AZURE_COSMOSDB_KEY` — base64-encoded master key
//!
//! # Authentication
//!
//! Every request carries a [master-key token](https://learn.microsoft.com/en-us/rest/api/cosmos-db/access-control-on-cosmosdb-resources):
//! HMAC-SHA256 over
//!
//! ```text
//! {verb-lowercase}\n{resource-type-lowercase}\n{resource-link}\n{date-lowercase}\n\n
//! ```
//!
//! keyed by the base64-decoded master key, with the base64 signature packed
//! into a percent-encoded `type=master&ver=1.0&sig=...` authorization header.
//!
//! # Pagination
//!
//! Query results are paged by the service. Pages are followed automatically
//! via the `x-ms-continuation` header until the full result set has been
//! materialized.

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Utc;
use hmac::{Hmac, Mac};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use sha2::Sha256;

use crate::config::Config;
use crate::models::QueryResponse;

type HmacSha256 = Hmac<Sha256>;

/// REST API version sent as `x-ms-version` on every request.
const API_VERSION: &str = "2018-12-31";

// ============ Credentials ============

/// Cosmos DB account credentials loaded from environment variables.
pub struct CosmosCredentials {
    endpoint: String,
    key: Vec<u8>,
}

impl CosmosCredentials {
    /// Load credentials from `AZURE_COSMOSDB_URL` and `AZURE_COSMOSDB_KEY`.
    ///
    /// The key is base64-decoded here; a malformed key fails locally instead
    /// of producing an inscrutable 401 from the service.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("AZURE_COSMOSDB_URL")
            .context("AZURE_COSMOSDB_URL environment variable not set")?;
        let key_b64 = std::env::var("AZURE_COSMOSDB_KEY")
            .context("AZURE_COSMOSDB_KEY environment variable not set")?;

        if !url.starts_with("https://") && !url.starts_with("http://") {
            bail!("AZURE_COSMOSDB_URL must be an http(s) URL, got '{}'", url);
        }

        let key = STANDARD
            .decode(key_b64.trim())
            .context("AZURE_COSMOSDB_KEY is not valid base64")?;

        Ok(Self {
            endpoint: url.trim_end_matches('/').to_string(),
            key,
        })
    }
}

// ============ Client ============

/// A client bound to one database/container pair.
pub struct CosmosClient {
    http: reqwest::Client,
    creds: CosmosCredentials,
    database: String,
    container: String,
}

impl CosmosClient {
    /// Build a client for the database/container named in `config`, with
    /// credentials from the environment.
    pub fn from_env(config: &Config) -> Result<Self> {
        Ok(Self {
            http: reqwest::Client::new(),
            creds: CosmosCredentials::from_env()?,
            database: config.cosmos.database.clone(),
            container: config.cosmos.container.clone(),
        })
    }

    /// The account endpoint this client talks to.
    pub fn endpoint(&self) -> &str {
        &self.creds.endpoint
    }

    fn database_link(&self) -> String {
        format!("dbs/{}", self.database)
    }

    fn container_link(&self) -> String {
        collection_link(&self.database, &self.container)
    }

    /// Build a request with the date, version, and authorization headers set.
    fn signed_request(
        &self,
        method: Method,
        url: &str,
        resource_type: &str,
        resource_link: &str,
    ) -> reqwest::RequestBuilder {
        let date = rfc1123_date();
        let token = auth_token(
            &self.creds.key,
            method.as_str(),
            resource_type,
            resource_link,
            &date,
        );

        self.http
            .request(method, url)
            .header("authorization", token)
            .header("x-ms-date", date)
            .header("x-ms-version", API_VERSION)
    }

    /// Create the database if it does not exist.
    ///
    /// Returns `true` if the database was created, `false` if it already
    /// existed (the service answers 409 Conflict).
    pub async fn create_database_if_absent(&self) -> Result<bool> {
        let url = format!("{}/dbs", self.creds.endpoint);
        let resp = self
            .signed_request(Method::POST, &url, "dbs", "")
            .json(&json!({ "id": self.database }))
            .send()
            .await
            .with_context(|| format!("Failed to create database '{}'", self.database))?;

        match resp.status() {
            StatusCode::CREATED => Ok(true),
            StatusCode::CONFLICT => Ok(false),
            status => {
                let body = resp.text().await.unwrap_or_default();
                bail!(
                    "Create database '{}' failed (HTTP {}): {}",
                    self.database,
                    status,
                    body.chars().take(500).collect::<String>()
                );
            }
        }
    }

    /// Create the container if it does not exist, partitioned by hash on
    /// `/id`.
    ///
    /// Returns `true` if the container was created, `false` if it already
    /// existed.
    pub async fn create_container_if_absent(&self) -> Result<bool> {
        let url = format!("{}/{}/colls", self.creds.endpoint, self.database_link());
        let body = json!({
            "id": self.container,
            "partitionKey": { "paths": ["/id"], "kind": "Hash" }
        });
        let resp = self
            .signed_request(Method::POST, &url, "colls", &self.database_link())
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Failed to create container '{}'", self.container))?;

        match resp.status() {
            StatusCode::CREATED => Ok(true),
            StatusCode::CONFLICT => Ok(false),
            status => {
                let body = resp.text().await.unwrap_or_default();
                bail!(
                    "Create container '{}' failed (HTTP {}): {}",
                    self.container,
                    status,
                    body.chars().take(500).collect::<String>()
                );
            }
        }
    }

    /// Check whether the database exists.
    pub async fn database_exists(&self) -> Result<bool> {
        let url = format!("{}/{}", self.creds.endpoint, self.database_link());
        let resp = self
            .signed_request(Method::GET, &url, "dbs", &self.database_link())
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.creds.endpoint))?;

        match resp.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let body = resp.text().await.unwrap_or_default();
                bail!(
                    "Get database '{}' failed (HTTP {}): {}",
                    self.database,
                    status,
                    body.chars().take(500).collect::<String>()
                );
            }
        }
    }

    /// Check whether the container exists.
    pub async fn container_exists(&self) -> Result<bool> {
        let url = format!("{}/{}", self.creds.endpoint, self.container_link());
        let resp = self
            .signed_request(Method::GET, &url, "colls", &self.container_link())
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.creds.endpoint))?;

        match resp.status() {
            StatusCode::OK => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                let body = resp.text().await.unwrap_or_default();
                bail!(
                    "Get container '{}' failed (HTTP {}): {}",
                    self.container,
                    status,
                    body.chars().take(500).collect::<String>()
                );
            }
        }
    }

    /// Upsert a single document: insert if absent, overwrite if a document
    /// with the same `id` exists in the partition.
    pub async fn upsert_document<T: Serialize>(&self, partition_key: &str, doc: &T) -> Result<()> {
        let url = format!("{}/{}/docs", self.creds.endpoint, self.container_link());
        let resp = self
            .signed_request(Method::POST, &url, "docs", &self.container_link())
            .header("x-ms-documentdb-is-upsert", "True")
            .header(
                "x-ms-documentdb-partitionkey",
                json!([partition_key]).to_string(),
            )
            .json(doc)
            .send()
            .await
            .with_context(|| format!("Failed to upsert document '{}'", partition_key))?;

        // 201 = inserted, 200 = replaced
        match resp.status() {
            StatusCode::CREATED | StatusCode::OK => Ok(()),
            status => {
                let body = resp.text().await.unwrap_or_default();
                bail!(
                    "Upsert of '{}' failed (HTTP {}): {}",
                    partition_key,
                    status,
                    body.chars().take(500).collect::<String>()
                );
            }
        }
    }

    /// Run a SQL query against the container and materialize every result
    /// row, following continuation tokens across pages.
    ///
    /// Cross-partition execution is enabled; how the query fans out across
    /// partitions is entirely the service's concern.
    pub async fn query_documents<T: DeserializeOwned>(&self, sql: &str) -> Result<Vec<T>> {
        let url = format!("{}/{}/docs", self.creds.endpoint, self.container_link());
        let body = json!({ "query": sql, "parameters": [] }).to_string();

        let mut documents = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let mut req = self
                .signed_request(Method::POST, &url, "docs", &self.container_link())
                .header("content-type", "application/query+json")
                .header("x-ms-documentdb-isquery", "True")
                .header("x-ms-documentdb-query-enablecrosspartition", "True");

            if let Some(ref token) = continuation {
                req = req.header("x-ms-continuation", token);
            }

            let resp = req
                .body(body.clone())
                .send()
                .await
                .with_context(|| format!("Query failed against {}", self.creds.endpoint))?;

            if !resp.status().is_success() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                bail!(
                    "Query failed (HTTP {}): {}",
                    status,
                    text.chars().take(500).collect::<String>()
                );
            }

            let next = resp
                .headers()
                .get("x-ms-continuation")
                .and_then(|v| v.to_str().ok())
                .map(String::from);

            let page: QueryResponse<T> = resp
                .json()
                .await
                .context("Failed to decode query response")?;
            documents.extend(page.documents);

            match next {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        Ok(documents)
    }
}

// ============ Master-Key Auth Helpers ============

/// Current time formatted per RFC 1123, as required by `x-ms-date`.
fn rfc1123_date() -> String {
    Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// The resource link of a container: `dbs/{database}/colls/{container}`.
///
/// Resource links are case-sensitive and appear verbatim in both the request
/// path and the string-to-sign.
fn collection_link(database: &str, container: &str) -> String {
    format!("dbs/{}/colls/{}", database, container)
}

/// Build the percent-encoded `authorization` header value for one request.
fn auth_token(
    key: &[u8],
    verb: &str,
    resource_type: &str,
    resource_link: &str,
    date: &str,
) -> String {
    let string_to_sign = format!(
        "{}\n{}\n{}\n{}\n\n",
        verb.to_lowercase(),
        resource_type.to_lowercase(),
        resource_link,
        date.to_lowercase()
    );

    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(string_to_sign.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());

    percent_encode(&format!("type=master&ver=1.0&sig={}", signature))
}

/// Percent-encode a string per RFC 3986.
///
/// Encodes all characters except unreserved characters:
/// `A-Z a-z 0-9 - _ . ~`. Base64 signatures contain `+ / =`, all of which
/// must be escaped in the authorization header.
fn percent_encode(s: &str) -> String {
    let mut result = String::new();
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                result.push(byte as char);
            }
            _ => {
                result.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // 32 ASCII bytes, base64 "MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=".
    const TEST_KEY: &[u8] = b"0123456789abcdef0123456789abcdef";

    #[test]
    fn test_auth_token_post_docs() {
        let token = auth_token(
            TEST_KEY,
            "POST",
            "docs",
            "dbs/DemoDatabase/colls/DemoContainer",
            "Thu, 27 Aug 2026 09:00:00 GMT",
        );
        assert_eq!(
            token,
            "type%3Dmaster%26ver%3D1.0%26sig%3DkICt7cXMOPjdtKJ6AO0RoP3G3FzdWz%2BiWcfrrnuYnnc%3D"
        );
    }

    #[test]
    fn test_auth_token_get_database() {
        let token = auth_token(
            TEST_KEY,
            "GET",
            "dbs",
            "dbs/DemoDatabase",
            "Thu, 27 Aug 2026 09:00:00 GMT",
        );
        assert!(token.contains("pk6oXwaBZxc0BKFALApAoAkZ%2F4ICx6G2CZjJAb1mOEY%3D"));
    }

    #[test]
    fn test_percent_encode() {
        assert_eq!(percent_encode("abc-_.~XYZ09"), "abc-_.~XYZ09");
        assert_eq!(percent_encode("a+b/c="), "a%2Bb%2Fc%3D");
        assert_eq!(percent_encode("type=master&ver=1.0"), "type%3Dmaster%26ver%3D1.0");
    }

    #[test]
    fn test_collection_link() {
        assert_eq!(
            collection_link("DemoDatabase", "DemoContainer"),
            "dbs/DemoDatabase/colls/DemoContainer"
        );
    }

    #[test]
    fn test_rfc1123_date_parses_back() {
        let date = rfc1123_date();
        assert!(date.ends_with("GMT"));
        assert!(chrono::DateTime::parse_from_rfc2822(&date).is_ok());
    }
}
