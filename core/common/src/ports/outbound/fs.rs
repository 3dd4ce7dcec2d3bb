//! ファイルシステム Outbound ポート
//!
//! Sink はこの trait 経由でのみファイル I/O を行う。操作は追記系に限定し、
//! 既存ファイルを truncate する手段は持たせない。

use crate::error::Error;
use std::path::Path;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdFileSystem` やテスト用の `MemFileSystem`。
pub trait FileSystem: Send + Sync {
    /// ディレクトリを親ごと作成する（既に在れば何もしない）
    fn create_dir_all(&self, path: &Path) -> Result<(), Error>;
    /// 追記用に開く（存在しなければ作成）。返した Writer を drop すると閉じる。
    fn open_append(&self, path: &Path) -> Result<Box<dyn std::io::Write + Send>, Error>;
}
