use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Overrides the built-in skill taxonomy when set.
    pub skill_taxonomy_path: Option<PathBuf>,
    /// Overrides the built-in skill → curriculum table when set.
    pub curriculum_path: Option<PathBuf>,
    /// Where the embedding model files are downloaded to and loaded from.
    pub embedding_cache_dir: Option<PathBuf>,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            skill_taxonomy_path: optional_path("SKILL_TAXONOMY_PATH"),
            curriculum_path: optional_path("CURRICULUM_PATH"),
            embedding_cache_dir: optional_path("EMBEDDING_CACHE_DIR"),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// Errors raised while loading the static data tables (taxonomy, curriculum).
#[derive(Debug, Error)]
pub enum ConfigDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {origin}: {reason}")]
    Invalid { origin: String, reason: String },
}

/// Parses a JSON data table from `path` if given, otherwise from the embedded default.
pub fn load_json_table<T: DeserializeOwned>(
    path: Option<&Path>,
    embedded: &str,
    origin: &str,
) -> Result<T, ConfigDataError> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigDataError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| ConfigDataError::Parse {
                origin: path.display().to_string(),
                source,
            })
        }
        None => serde_json::from_str(embedded).map_err(|source| ConfigDataError::Parse {
            origin: format!("built-in {origin}"),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_table_is_used_without_path() {
        let values: Vec<u32> = load_json_table(None, "[1, 2, 3]", "numbers").unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_path_overrides_embedded_table() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[7]").unwrap();

        let values: Vec<u32> = load_json_table(Some(file.path()), "[1]", "numbers").unwrap();
        assert_eq!(values, vec![7]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_json_table::<Vec<u32>>(
            Some(Path::new("/definitely/not/here.json")),
            "[]",
            "numbers",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigDataError::Io { .. }));
    }

    #[test]
    fn test_malformed_embedded_table_names_origin() {
        let err = load_json_table::<Vec<u32>>(None, "{not json", "numbers").unwrap_err();
        assert!(err.to_string().contains("built-in numbers"));
    }
}
