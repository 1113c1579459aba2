pub mod commands;
pub mod input;
pub mod output;

use clap::ValueEnum;
use colored::Colorize;
use log::LevelFilter;
use std::io;
use std::process;

use commands::Rendered;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
    Minimal,
}

/// Route `log` records to stderr. Level comes from `LOANSORT_LOG`
/// (e.g. `LOANSORT_LOG=debug`), warnings only by default.
pub fn init_logging() {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("LOANSORT_LOG", "warn"))
        .init();
}

/// Print a command's output in the requested format and exit.
pub fn finish(format: &OutputFormat, result: Result<Rendered, Box<dyn std::error::Error>>) -> ! {
    match result {
        Ok(rendered) => {
            let stdout = io::stdout();
            if let Err(e) = output::format_output(format, &rendered, &mut stdout.lock()) {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
