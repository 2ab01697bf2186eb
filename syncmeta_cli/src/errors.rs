use std::io;
use std::path::PathBuf;
use thiserror::Error;
use syncmeta::config::ConfigError;
use syncmeta::resolve::ReconstructError;
use syncmeta::store::StoreError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration already exists at: {0}")]
    ConfigAlreadyExists(PathBuf),

    #[error("The database is encrypted. Provide --key or set SYNCMETA_DB_KEY.")]
    KeyRequired,

    #[error("Account name cannot be empty.")]
    EmptyAccount,

    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Metadata store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to reconstruct path: {0}")]
    Reconstruct(#[from] ReconstructError),
}
