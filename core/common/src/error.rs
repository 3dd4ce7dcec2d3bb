//! エラーハンドリング

/// 共通エラー型
///
/// I/O・JSON 変換・引数不正・依存未設定の 4 区分。呼び出し側には常に
/// `Result` で返し、プロセスを止めるかどうかは main レイヤーが決める。
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// ファイル・ディレクトリ・標準出力への書き込み失敗
    #[error("{0}")]
    Io(String),
    /// JSON シリアライズの失敗
    #[error("{0}")]
    Json(String),
    /// CLI 引数の不正
    #[error("{0}")]
    InvalidArgument(String),
    /// 使用前に依存が注入されていない（2 段階構築の bind 忘れ）
    #[error("dependency '{0}' is not configured")]
    NotConfigured(&'static str),
}

impl Error {
    /// I/O エラーをメッセージから作る
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// プロセス終了コード（sysexits 準拠: 64=usage, 70=software, 74=ioerr）
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidArgument(_) => 64,
            Error::Json(_) | Error::NotConfigured(_) => 70,
            Error::Io(_) => 74,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
