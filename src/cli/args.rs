use crate::services::config::implementations::DEFAULT_ITERATIONS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prototype_bench")]
#[command(about = "Benchmarks closure-bound, plain and delegated records and demonstrates delegation chains")]
#[command(version)]
pub struct Cli {
    /// Runs benchmarks followed by demonstrations when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run benchmarks followed by the delegation demonstrations
    All {
        /// Number of times each workload is invoked
        #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,
    },

    /// Run only the record benchmarks
    Bench {
        /// Number of times each workload is invoked
        #[arg(short, long, default_value_t = DEFAULT_ITERATIONS)]
        iterations: u64,

        /// Write a JSON report to this path
        #[arg(short, long)]
        json: Option<PathBuf>,

        /// Suppress per-workload lines and the summary
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run only the delegation demonstrations
    Demo,
}

impl Default for Commands {
    fn default() -> Self {
        Self::All {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
