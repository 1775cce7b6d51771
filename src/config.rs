//! Configuration management for the PDF toolkit server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// The two shared directories every handler works against.
///
/// Both are created at startup. Outputs use derived names (`merged.pdf`,
/// `page_<n>.pdf`, `page_<n>.jpg`, `output.pdf`) and are overwritten on
/// repeated use; concurrent requests race on those names.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            storage: StorageConfig {
                upload_dir: PathBuf::from("uploads"),
                output_dir: PathBuf::from("output"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("uploads")),
                output_dir: env::var("OUTPUT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("output")),
            },
        }
    }
}
