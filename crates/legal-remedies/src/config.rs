use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Every setting is optional: without `REMEDY_CATALOG_PATH` the bundled catalog is served,
/// and without `MCP_TCP_LISTEN_ADDR` the server speaks MCP over stdio.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a catalog JSON file overriding the bundled catalog.
    pub catalog_path: Option<String>,
    /// Address to accept MCP clients on, e.g. "127.0.0.1:7410". `None` serves stdio.
    pub tcp_listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `REMEDY_CATALOG_PATH`: catalog JSON file (must exist when set)
    /// - `MCP_TCP_LISTEN_ADDR`: serve over TCP instead of stdio
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("REMEDY_CATALOG_PATH").ok(),
            std::env::var("MCP_TCP_LISTEN_ADDR").ok(),
        )
    }

    fn from_vars(
        catalog_path: Option<String>,
        tcp_listen_addr: Option<String>,
    ) -> Result<Self, AppError> {
        let catalog_path = catalog_path.filter(|p| !p.trim().is_empty());
        if let Some(path) = &catalog_path {
            if !Path::new(path).is_file() {
                return Err(AppError::Config(format!(
                    "REMEDY_CATALOG_PATH points to a missing file: {path}"
                )));
            }
        }

        Ok(Self {
            catalog_path,
            tcp_listen_addr: tcp_listen_addr.filter(|a| !a.trim().is_empty()),
        })
    }

    pub fn catalog_file(&self) -> Option<PathBuf> {
        self.catalog_path.as_ref().map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_uses_bundled_catalog_and_stdio() {
        let config = Config::from_vars(None, None).unwrap();
        assert!(config.catalog_file().is_none());
        assert!(config.tcp_listen_addr.is_none());
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = Config::from_vars(Some("  ".to_string()), Some(String::new())).unwrap();
        assert!(config.catalog_path.is_none());
        assert!(config.tcp_listen_addr.is_none());
    }

    #[test]
    fn missing_catalog_file_is_rejected() {
        let err = Config::from_vars(Some("/no/such/catalog.json".to_string()), None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("/no/such/catalog.json"));
    }

    #[test]
    fn existing_catalog_file_is_accepted() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalog.json");
        let config = Config::from_vars(Some(path.to_string()), Some("127.0.0.1:0".to_string())).unwrap();
        assert_eq!(config.catalog_file(), Some(PathBuf::from(path)));
        assert_eq!(config.tcp_listen_addr.as_deref(), Some("127.0.0.1:0"));
    }
}
