//! Outbound ポート: アプリが外界（Sink・FS・環境変数・診断ログ）を使うための trait

pub mod diag;
pub mod env;
pub mod fs;
pub mod sink;

pub use diag::{now_iso8601, DiagLevel, DiagLog, DiagRecord};
pub use env::EnvResolver;
pub use fs::FileSystem;
pub use sink::LogSink;
