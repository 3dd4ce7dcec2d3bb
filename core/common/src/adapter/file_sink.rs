//! ファイルへ 1 行ずつ追記する LogSink 実装
//!
//! 記録先はプレーンテキスト 1 ファイル。書き込みは追記のみで、既存内容を
//! 消すことはない。親ディレクトリが無ければ初回記録時に作成する。

use crate::error::Error;
use crate::ports::outbound::{FileSystem, LogSink};
use std::path::Path;
use std::sync::Arc;

/// ファイルへメッセージを追記する LogSink 実装
pub struct FileLogSink {
    fs: Arc<dyn FileSystem>,
    path: std::path::PathBuf,
}

impl FileLogSink {
    /// 記録先パスへ追記する sink を生成する。ここでは I/O を行わず、
    /// ディレクトリ作成もファイル作成も初回の record まで遅延する。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LogSink for FileLogSink {
    fn record(&self, message: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            // 相対パス直下（"worklog.log" 等）では parent が空文字になる
            if !parent.as_os_str().is_empty() {
                self.fs.create_dir_all(parent)?;
            }
        }
        let mut w = self.fs.open_append(&self.path)?;
        use std::io::Write;
        w.write_all(message.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// 何も出力しない LogSink 実装（テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    fn record(&self, _message: &str) -> Result<(), Error> {
        Ok(())
    }
}
