//! ファイルへ JSONL で追記する DiagLog 実装
//!
//! 診断の出力先はファイルのみ。利用者向けの記録（LogSink）とは別。

use crate::error::Error;
use crate::ports::outbound::{DiagLog, DiagRecord, FileSystem};
use std::path::Path;
use std::sync::Arc;

/// ファイルへ JSONL を追記する DiagLog 実装
pub struct JsonlDiagLog {
    fs: Arc<dyn FileSystem>,
    path: std::path::PathBuf,
}

impl JsonlDiagLog {
    /// 診断ログパスへ追記する logger を生成する。
    /// 親ディレクトリが無ければ作成する（初回書き込み時）。
    pub fn new(fs: Arc<dyn FileSystem>, path: impl AsRef<Path>) -> Self {
        Self {
            fs,
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DiagLog for JsonlDiagLog {
    fn write(&self, record: &DiagRecord) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                self.fs.create_dir_all(parent)?;
            }
        }
        let line = serde_json::to_string(record).map_err(|e| Error::Json(e.to_string()))?;
        let mut w = self.fs.open_append(&self.path)?;
        use std::io::Write;
        w.write_all(line.as_bytes())?;
        w.write_all(b"\n")?;
        w.flush()?;
        Ok(())
    }
}

/// 何も出力しない DiagLog 実装（出力先未設定時のフォールバック）
#[derive(Debug, Clone, Default)]
pub struct NoopDiagLog;

impl DiagLog for NoopDiagLog {
    fn write(&self, _record: &DiagRecord) -> Result<(), Error> {
        Ok(())
    }
}
