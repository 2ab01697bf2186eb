use tracing_subscriber::{EnvFilter, fmt};
use crate::errors::CliError;

/// 安装全局日志订阅者，输出到 stderr。
///
/// `RUST_LOG` 优先；否则按 `-v` 的次数选择级别 (0: warn, 1: debug, 2+: trace)。
pub fn init_logging(verbose: u8) -> Result<(), CliError> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
