//! 配線: 標準アダプタでポート群を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{
    ConsoleLogSink, FileLogSink, JsonlDiagLog, NoopDiagLog, StdEnvResolver, StdFileSystem,
};
use common::ports::outbound::{DiagLog, EnvResolver, FileSystem, LogSink};

use crate::cli::{Config, SinkChoice};

/// 記録ファイルの既定パス（--log-file / WORKLOG_LOG_FILE 未指定時）
pub const DEFAULT_LOG_FILE: &str = "logs/worklog.log";

/// 配線で組み立てたポート群（main の Runner で利用）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub env_resolver: Arc<dyn EnvResolver>,
    /// 実行診断ログ（ファイルへ JSONL）。WORKLOG_DIAG_LOG 未設定時は Noop。
    pub diag: Arc<dyn DiagLog>,
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_worklog() -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let diag: Arc<dyn DiagLog> = env_resolver
        .diag_log_path()
        .map(|path| Arc::new(JsonlDiagLog::new(Arc::clone(&fs), path)) as Arc<dyn DiagLog>)
        .unwrap_or_else(|_| Arc::new(NoopDiagLog));
    App {
        fs,
        env_resolver,
        diag,
    }
}

/// Config から Sink を組み立てる。
/// file の記録先は --log-file > WORKLOG_LOG_FILE > 既定パス の順で決める。
pub fn make_sink(app: &App, config: &Config) -> Arc<dyn LogSink> {
    match config.sink {
        SinkChoice::Console => Arc::new(ConsoleLogSink::new()),
        SinkChoice::File => {
            let path = config
                .log_file
                .clone()
                .or_else(|| app.env_resolver.log_file_override())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
            Arc::new(FileLogSink::new(Arc::clone(&app.fs), path))
        }
    }
}
