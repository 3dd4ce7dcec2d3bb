//! 標準環境変数実装（std::env を委譲）

use crate::error::Error;
use crate::ports::outbound::EnvResolver;
use std::path::PathBuf;

/// 診断ログ (JSONL) の出力先を指定する環境変数
pub const DIAG_LOG_ENV: &str = "WORKLOG_DIAG_LOG";

/// 記録ファイルの既定パスを上書きする環境変数
pub const LOG_FILE_ENV: &str = "WORKLOG_LOG_FILE";

/// プロセスの環境変数を読む EnvResolver 実装
#[derive(Debug, Clone, Default)]
pub struct StdEnvResolver;

impl EnvResolver for StdEnvResolver {
    fn diag_log_path(&self) -> Result<PathBuf, Error> {
        std::env::var_os(DIAG_LOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| Error::io_msg(format!("{} is not set", DIAG_LOG_ENV)))
    }

    fn log_file_override(&self) -> Option<PathBuf> {
        std::env::var_os(LOG_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
