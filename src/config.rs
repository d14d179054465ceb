use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub cosmos: CosmosConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CosmosConfig {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_container")]
    pub container: String,
}

impl Default for CosmosConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            container: default_container(),
        }
    }
}

fn default_database() -> String {
    "DemoDatabase".to_string()
}
fn default_container() -> String {
    "DemoContainer".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "default_count")]
    pub count: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            count: default_count(),
        }
    }
}

fn default_count() -> usize {
    100
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error — every setting has a default, so the tool
/// works out of the box against `DemoDatabase`/`DemoContainer`.
pub fn load_config(path: &Path) -> Result<Config> {
    let config: Config = if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content).with_context(|| "Failed to parse config file")?
    } else {
        Config::default()
    };

    if config.cosmos.database.is_empty() {
        anyhow::bail!("cosmos.database must not be empty");
    }
    if config.cosmos.container.is_empty() {
        anyhow::bail!("cosmos.container must not be empty");
    }
    if config.seed.count == 0 {
        anyhow::bail!("seed.count must be >= 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let cfg = load_config(Path::new("/nonexistent/cosq.toml")).unwrap();
        assert_eq!(cfg.cosmos.database, "DemoDatabase");
        assert_eq!(cfg.cosmos.container, "DemoContainer");
        assert_eq!(cfg.seed.count, 100);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str("[cosmos]\ndatabase = \"Products\"\n").unwrap();
        assert_eq!(cfg.cosmos.database, "Products");
        assert_eq!(cfg.cosmos.container, "DemoContainer");
        assert_eq!(cfg.seed.count, 100);
    }

    #[test]
    fn test_zero_count_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cosq.toml");
        std::fs::write(&path, "[seed]\ncount = 0\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("seed.count"));
    }

    #[test]
    fn test_empty_container_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cosq.toml");
        std::fs::write(&path, "[cosmos]\ncontainer = \"\"\n").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("cosmos.container"));
    }
}
