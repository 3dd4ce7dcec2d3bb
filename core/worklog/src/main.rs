mod cli;
mod ports;
#[cfg(test)]
mod tests;
mod wiring;

use std::process;

use common::error::Error;
use common::ports::outbound::{DiagLevel, DiagLog, DiagRecord};
use common::work::WorkUnit;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use ports::inbound::RunWorklogApp;
use wiring::{make_sink, wire_worklog, App};

/// 作業 1 件を実行する Runner（終了コードへの変換は main に集約）
struct Runner {
    app: App,
}

impl RunWorklogApp for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        // 診断ログの書き込み失敗で本体は止めない
        let _ = self.app.diag.write(
            &DiagRecord::new(DiagLevel::Info, "run started").with_kind("lifecycle"),
        );

        let sink = make_sink(&self.app, &config);
        let result = WorkUnit::new(sink).run();

        match &result {
            Ok(()) => {
                let _ = self.app.diag.write(
                    &DiagRecord::new(DiagLevel::Info, "run finished").with_kind("lifecycle"),
                );
            }
            Err(e) => {
                let _ = self.app.diag.write(
                    &DiagRecord::new(DiagLevel::Error, "run failed")
                        .with_kind("error")
                        .with_field("detail", e.to_string()),
                );
            }
        }

        result.map(|()| 0)
    }
}

fn print_help() {
    println!("worklog - run one unit of work bracketed by two log records");
    println!();
    println!("Usage: worklog [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --sink <backend>     Record backend: file or console (default: file)");
    println!("  --log-file <path>    Record file for the file backend");
    println!("                       (default: {})", wiring::DEFAULT_LOG_FILE);
    println!("  --generate <shell>   Generate shell completion script");
    println!("  -h, --help           Print help");
    println!();
    println!("Environment:");
    println!("  WORKLOG_LOG_FILE     Record file when --log-file is not given");
    println!("  WORKLOG_DIAG_LOG     Write JSONL diagnostics of the run to this file");
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let outcome = match parse_args(&argv) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("worklog: {}", e);
            process::exit(e.exit_code());
        }
    };

    match outcome {
        ParseOutcome::GenerateCompletion(shell) => print_completion(shell),
        ParseOutcome::Config(config) => {
            if config.help {
                print_help();
                return;
            }
            let runner = Runner {
                app: wire_worklog(),
            };
            match runner.run(config) {
                Ok(code) => process::exit(code),
                Err(e) => {
                    eprintln!("worklog: {}", e);
                    process::exit(e.exit_code());
                }
            }
        }
    }
}
