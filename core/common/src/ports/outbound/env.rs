//! 環境変数解決 Outbound ポート
//!
//! 出力先パスの解決はこの trait 経由で行い、usecase からは
//! `std::env` に直接触れない。

use crate::error::Error;
use std::path::PathBuf;

/// 環境変数からパスを解決する（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用の固定値など。
pub trait EnvResolver: Send + Sync {
    /// 診断ログ (JSONL) の出力先。未設定ならエラー
    ///（呼び出し側は NoopDiagLog にフォールバックする）。
    fn diag_log_path(&self) -> Result<PathBuf, Error>;

    /// 記録ファイルパスの環境変数による上書き。未設定なら None
    fn log_file_override(&self) -> Option<PathBuf>;
}
