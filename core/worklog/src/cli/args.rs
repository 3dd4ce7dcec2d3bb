//! CLI 引数解析
//!
//! clap でフラグを解析し、Config（通常実行）または補完スクリプト生成に振り分ける。
//! help の本文は main レイヤーで出すため、clap 組み込みの help は無効化する。

use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

/// 記録の出力先バックエンド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkChoice {
    /// ファイルへ追記（既定）
    #[default]
    File,
    /// stdout へ表示
    Console,
}

/// CLI から受け取った設定
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    pub sink: SinkChoice,
    /// file バックエンドの記録先（未指定なら環境変数 → 既定パス）
    pub log_file: Option<PathBuf>,
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_command() -> clap::Command {
    clap::Command::new("worklog")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("sink")
                .long("sink")
                .value_name("backend")
                .help("Select the record backend (file or console)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("path")
                .help("Write records to this file (file backend only)")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn parse_sink(name: &str) -> Result<SinkChoice, Error> {
    match name {
        "file" => Ok(SinkChoice::File),
        "console" => Ok(SinkChoice::Console),
        other => Err(Error::invalid_argument(format!(
            "unknown sink backend '{}' (expected 'file' or 'console')",
            other
        ))),
    }
}

/// 引数列を解析する（先頭要素はプログラム名）
pub fn parse_args(argv: &[String]) -> Result<ParseOutcome, Error> {
    let matches = build_command()
        .try_get_matches_from(argv)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }

    let sink = match matches.get_one::<String>("sink") {
        Some(name) => parse_sink(name)?,
        None => SinkChoice::File,
    };

    Ok(ParseOutcome::Config(Config {
        help: matches.get_flag("help"),
        sink,
        log_file: matches.get_one::<String>("log-file").map(PathBuf::from),
    }))
}

/// 補完スクリプトを stdout へ出力する
pub fn print_completion(shell: Shell) {
    clap_complete::generate(
        shell,
        &mut build_command(),
        "worklog",
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("worklog")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    fn parse_config(args: &[&str]) -> Config {
        match parse_args(&argv(args)).unwrap() {
            ParseOutcome::Config(config) => config,
            other => panic!("expected Config, got {:?}", other),
        }
    }

    #[test]
    fn test_default_backend_is_file() {
        let config = parse_config(&[]);
        assert_eq!(config.sink, SinkChoice::File);
        assert_eq!(config.log_file, None);
        assert!(!config.help);
    }

    #[test]
    fn test_sink_console() {
        let config = parse_config(&["--sink", "console"]);
        assert_eq!(config.sink, SinkChoice::Console);
    }

    #[test]
    fn test_unknown_backend_is_usage_error() {
        let err = parse_args(&argv(&["--sink", "syslog"])).unwrap_err();
        assert_eq!(err.exit_code(), 64);
        assert!(err.to_string().contains("syslog"));
    }

    #[test]
    fn test_log_file_flag() {
        let config = parse_config(&["--log-file", "/tmp/x.log"]);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/x.log")));
    }

    #[test]
    fn test_help_flag() {
        let config = parse_config(&["-h"]);
        assert!(config.help);
    }

    #[test]
    fn test_generate_completion() {
        match parse_args(&argv(&["--generate", "bash"])).unwrap() {
            ParseOutcome::GenerateCompletion(shell) => assert_eq!(shell, Shell::Bash),
            other => panic!("expected GenerateCompletion, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let err = parse_args(&argv(&["--frobnicate"])).unwrap_err();
        assert_eq!(err.exit_code(), 64);
    }
}
