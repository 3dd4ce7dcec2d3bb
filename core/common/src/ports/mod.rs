//! Ports & Adapters のポート定義
//!
//! - inbound: なし（common はライブラリのためアプリの入り口を持たない）
//! - outbound: アプリが外界（Sink・FS・環境変数・診断ログ）に依頼するための trait

pub mod outbound;
