#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! toolvers — merge per-architecture tool version tables into one markdown report.

mod cli;
mod commands;
mod report;
mod types;

use clap::Parser;

use cli::{Cli, OutputCtx, write_error};
use types::ErrorOutput;

fn main() {
    // Every usage error exits 1, including the ones clap catches.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            std::process::exit(i32::from(err.use_stderr()));
        }
    };

    let ctx = OutputCtx::new(cli.format, cli.json, cli.debug);

    let result = cli
        .merge_config()
        .and_then(|config| commands::dispatch(&config, &ctx));
    if let Err(err) = result {
        write_error(&ErrorOutput::from_report_error(&err), &ctx);
        std::process::exit(err.exit_code());
    }
}
