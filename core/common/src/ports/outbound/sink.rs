//! ログ Sink Outbound ポート
//!
//! 「テキストを 1 件記録する」だけの契約。出力先（ファイル追記・コンソール表示）は
//! アダプター側で差し替え、利用側は構築時に受け取った trait オブジェクト経由で
//! のみ書き出す。どの実装が刺さっているかを利用側は知らない。

use crate::error::Error;

/// メッセージを記録する Sink（Outbound ポート）
///
/// 実装は common::adapter::FileLogSink（ファイルへ追記）、
/// ConsoleLogSink（stdout へ 1 行表示）、NoopSink（テスト用）など。
pub trait LogSink: Send + Sync {
    /// 1 メッセージを記録する（1 行 = 1 メッセージ、末尾に改行を補う）
    fn record(&self, message: &str) -> Result<(), Error>;
}
