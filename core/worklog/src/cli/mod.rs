//! CLI（引数解析と補完スクリプト生成）

pub mod args;

pub use args::{parse_args, print_completion, Config, ParseOutcome, SinkChoice};
