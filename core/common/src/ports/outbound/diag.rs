//! 実行診断ログ Outbound ポート
//!
//! worklog コマンド自身の動作記録（lifecycle / error）を JSONL でファイルに
//! 書き出すための trait。利用者向けの記録（LogSink）とは別チャネルで、
//! 診断の失敗が本体の実行を止めることはない。

use crate::error::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// 現在時刻を ISO8601 (RFC3339) で返す。DiagRecord の `ts` に使う。
pub fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// 診断ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagLevel {
    Error,
    Warn,
    Info,
    Debug,
}

/// 1 行分の診断レコード（JSONL の 1 行に対応）
#[derive(Debug, Clone, Serialize)]
pub struct DiagRecord {
    /// ISO8601 形式のタイムスタンプ
    pub ts: String,
    pub level: DiagLevel,
    pub message: String,
    /// 例: lifecycle, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// 追加のキー・値（オブジェクトとして出力）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
}

impl DiagRecord {
    /// 現在時刻つきでレコードを作る
    pub fn new(level: DiagLevel, message: impl Into<String>) -> Self {
        Self {
            ts: now_iso8601(),
            level,
            message: message.into(),
            kind: None,
            fields: None,
        }
    }

    /// kind を設定する
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// フィールドを 1 件追加する
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// 診断レコードを書き出す Outbound ポート
///
/// 実装は common::adapter::JsonlDiagLog（ファイルへ JSONL 追記）や
/// NoopDiagLog（出力先未設定時のフォールバック）など。
pub trait DiagLog: Send + Sync {
    /// 1 レコードを書き出す（ファイルへ JSONL 1 行として追記）
    fn write(&self, record: &DiagRecord) -> Result<(), Error>;
}
