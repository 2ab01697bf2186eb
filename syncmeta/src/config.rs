use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::common::constants::{DATABASE_FILE_NAME, MAX_TRAVERSAL_DEPTH};
use crate::resolve::PathReconstructor;

/// Defines errors that can occur while loading or saving the configuration file.
//
// // 定义在读写配置文件期间可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the file.
    //
    // // 读写文件时发生 I/O 错误。
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON or does not match the expected shape.
    //
    // // 文件不是合法的 JSON，或结构不符合预期。
    #[error("Failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// The top-level structure of the `syncmeta.json` configuration file.
//
// // 代表 `syncmeta.json` 配置文件的顶层结构。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    /// The current account (e.g. "alice@cloud.example.com").
    // // 当前账户名。
    pub account: String,
    /// The database file. Relative paths resolve against the config file's directory.
    // // 数据库文件的路径；相对路径以配置文件所在目录为基准。
    pub database: PathBuf,
    /// Whether the database is SQLCipher-encrypted.
    // // 数据库是否使用 SQLCipher 加密。
    #[serde(default)]
    pub encrypted: bool,
    /// The most levels a path reconstruction may visit.
    // // 重建路径时最多访问的层级数。
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

impl SyncConfig {
    /// Creates a config for `account` using the default database file name.
    // // 为 `account` 创建使用默认数据库文件名的配置。
    pub fn new(account: &str) -> Self {
        Self {
            account: account.to_string(),
            database: PathBuf::from(DATABASE_FILE_NAME),
            encrypted: false,
            max_depth: None,
        }
    }

    /// Reads and parses the config file at `path`.
    // // 读取并解析 `path` 处的配置文件。
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes the config as pretty-printed JSON to `path`.
    // // 以格式化 JSON 写入 `path`。
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolves `database` against the directory of `config_path`.
    // // 将 `database` 解析为相对于配置文件所在目录的路径。
    pub fn database_path(&self, config_path: &Path) -> PathBuf {
        if self.database.is_absolute() {
            return self.database.clone();
        }
        match config_path.parent() {
            Some(dir) => dir.join(&self.database),
            None => self.database.clone(),
        }
    }

    /// Builds a path reconstructor honoring `max_depth`.
    // // 按 `max_depth` 构建路径重建器。
    pub fn reconstructor(&self) -> PathReconstructor {
        PathReconstructor::with_max_depth(self.max_depth.unwrap_or(MAX_TRAVERSAL_DEPTH))
    }
}
