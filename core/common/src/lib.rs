//! worklog 共通ライブラリ
//!
//! `worklog` コマンドから利用されるポート・アダプター・作業ユニットを提供します。

/// エラーハンドリング
pub mod error;

/// Ports & Adapters のポート定義
pub mod ports;

/// アダプター（外界の I/O の標準実装とテスト用実装）
pub mod adapter;

/// 作業ユニット（Sink に開始・完了の 2 レコードを書き出す消費者）
pub mod work;
