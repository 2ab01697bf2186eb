//!
//! # Test Common Utilities
//!
//! Shared helpers for the `syncmeta` CLI integration tests: an isolated
//! temporary workspace and a command builder pre-wired to its config file.
//!
//
// // # 测试通用工具
// //
// // 为 `syncmeta` CLI 集成测试提供隔离的临时目录和预先指向其配置文件的命令构建器。
// //
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

pub const ACCOUNT: &str = "alice@cloud.example.com";

/// Represents the context for a single test, including a temporary directory.
///
/// The temporary directory is cleaned up when the `TestContext` goes out of scope.
pub struct TestContext {
    /// Held for its Drop behavior to ensure cleanup.
    pub _temp_dir: TempDir,
    /// The config file created within the temporary directory.
    pub config_path: PathBuf,
}

impl TestContext {
    /// Creates an uninitialized context.
    pub fn empty() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let config_path = temp_dir.path().join("syncmeta.json");
        Ok(TestContext { _temp_dir: temp_dir, config_path })
    }

    /// Creates a context and runs `syncmeta init` for [`ACCOUNT`].
    pub fn new() -> anyhow::Result<Self> {
        let context = Self::empty()?;
        context.cmd().args(["init", "--account", ACCOUNT]).assert().success();
        Ok(context)
    }

    /// Returns a `syncmeta` command with `--config` pointing at this context.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_syncmeta"));
        cmd.arg("--config").arg(&self.config_path);
        cmd.env_remove("SYNCMETA_DB_KEY").env_remove("RUST_LOG");
        cmd
    }

    /// Runs `syncmeta add` and returns the printed id.
    pub fn add(&self, remote_path: &str, name: Option<&str>, parent: Option<&str>) -> anyhow::Result<String> {
        let mut cmd = self.cmd();
        cmd.args(["add", "--remote-path", remote_path]);
        if let Some(n) = name {
            cmd.args(["--name", n]);
        }
        if let Some(p) = parent {
            cmd.args(["--parent", p]);
        }
        let output = cmd.assert().success().get_output().stdout.clone();
        Ok(String::from_utf8(output)?.trim().to_string())
    }
}
