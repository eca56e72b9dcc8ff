pub mod bench;
pub mod demo;

pub use bench::*;
pub use demo::*;

use crate::cli::Commands;
use crate::services::{ConsoleBenchmarkReporter, DefaultRunnerConfig};
use crate::App;
use anyhow::Result;
use std::io::Write;

/// サブコマンドを実行する
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::All { iterations } => execute_all(iterations),
        Commands::Bench {
            iterations,
            json,
            quiet,
        } => execute_bench(iterations, json, quiet, true).map(|_| ()),
        Commands::Demo => execute_demo(),
    }
}

/// ベンチマークに続けてデモンストレーションを実行する
fn execute_all(iterations: u64) -> Result<()> {
    let config = DefaultRunnerConfig::new(iterations);
    config.validate()?;

    let app = App::new(config, ConsoleBenchmarkReporter::new());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = app.run(&mut out).map(|_| ());
    out.flush()?;
    result
}
