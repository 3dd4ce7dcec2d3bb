//! Inbound ポート: ドライバ（CLI）がアプリを呼び出すインターフェース

use crate::cli::Config;
use common::error::Error;

/// worklog アプリケーションを実行する Inbound ポート
///
/// main はこの trait を実装した型（Runner）の run を呼び出し、
/// 終了コードへの変換だけを自分で行う。
pub trait RunWorklogApp: Send + Sync {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
