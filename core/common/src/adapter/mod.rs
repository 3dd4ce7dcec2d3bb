//! アダプター（外界の I/O を trait で抽象化した実装）
//!
//! Sink と作業ユニットはこのモジュールの trait 経由でのみファイル・環境変数に
//! 触れる。実装は標準実装（Std*）やテスト用のモックを注入する。

pub mod console_sink;
pub mod file_sink;
pub mod jsonl_diag;
pub mod mem_fs;
pub mod std_env;
pub mod std_fs;

pub use console_sink::ConsoleLogSink;
pub use file_sink::{FileLogSink, NoopSink};
pub use jsonl_diag::{JsonlDiagLog, NoopDiagLog};
pub use mem_fs::MemFileSystem;
pub use std_env::StdEnvResolver;
pub use std_fs::StdFileSystem;
