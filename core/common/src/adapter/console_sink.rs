//! コンソール LogSink 実装（stdout へ 1 行表示）
//!
//! 状態を持たず、ファイルシステムには一切触れない。既存のロガー
//!（tracing / log）には接続せず、メッセージをそのまま 1 行で出す。

use crate::error::Error;
use crate::ports::outbound::LogSink;

/// stdout へメッセージを 1 行ずつ書き出す LogSink 実装
#[derive(Debug, Clone, Default)]
pub struct ConsoleLogSink;

impl ConsoleLogSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleLogSink {
    fn record(&self, message: &str) -> Result<(), Error> {
        use std::io::Write;
        let mut out = std::io::stdout().lock();
        out.write_all(message.as_bytes())
            .and_then(|_| out.write_all(b"\n"))
            .and_then(|_| out.flush())
            .map_err(|e| Error::io_msg(format!("Failed to write to stdout: {}", e)))
    }
}
