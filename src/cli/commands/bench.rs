use crate::benchmarks::{BenchmarkRunner, PerformanceComparison};
use crate::core::BenchmarkReporter;
use crate::services::{ConsoleBenchmarkReporter, DefaultRunnerConfig};
use anyhow::Result;
use std::path::PathBuf;

pub const BENCHMARK_HEADER: &str = "Example benchmarks proto vs. no proto.";

/// 3種類のレコードのベンチマークを実行する
///
/// 各ワークロードの完了時に `"<description> took: <elapsed-ms>"` を出力する。
pub fn execute_bench(
    iterations: u64,
    json: Option<PathBuf>,
    quiet: bool,
    summary: bool,
) -> Result<PerformanceComparison> {
    let config = DefaultRunnerConfig::new(iterations).with_reporting(!quiet);
    config.validate()?;

    let reporter = if quiet {
        ConsoleBenchmarkReporter::quiet()
    } else {
        ConsoleBenchmarkReporter::new()
    };
    reporter.report_section(BENCHMARK_HEADER);

    let runner = BenchmarkRunner::new(config, reporter);
    let comparison = PerformanceComparison::run_standard(&runner);

    if summary && !quiet {
        println!();
        comparison.print_summary();
    }
    if let Some(path) = json {
        comparison.export_json_report(&path)?;
        if !quiet {
            println!("📄 詳細レポートを出力しました: {}", path.display());
        }
    }
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_bench_quiet() {
        let comparison = execute_bench(10, None, true, true).unwrap();
        assert_eq!(comparison.results().len(), 3);
    }

    #[test]
    fn test_execute_bench_rejects_zero_iterations() {
        let error = execute_bench(0, None, true, false).unwrap_err();
        assert!(error.to_string().contains("iterations"));
    }

    #[test]
    fn test_execute_bench_writes_json() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.json");

        execute_bench(5, Some(path.clone()), true, false).unwrap();
        assert!(path.exists());
    }
}
