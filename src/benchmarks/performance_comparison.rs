//! レコード実装バリエーション間のパフォーマンス比較
//!
//! 計測結果の集約、サマリー表示、JSONレポート出力

use super::runner::BenchmarkRunner;
use super::workload::standard_workloads;
use crate::core::{BenchmarkReporter, Measurement, RunnerConfig};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// レポート1行分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub description: String,
    pub iterations: u64,
    pub elapsed_ms: u128,
    pub nanos_per_iteration: f64,
    /// 最速に対する倍率
    pub relative_to_fastest: f64,
}

/// JSONレポート全体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub timestamp: DateTime<Utc>,
    pub fastest: Option<String>,
    pub results: Vec<ReportEntry>,
}

/// パフォーマンス比較テストスイート
#[derive(Debug, Default)]
pub struct PerformanceComparison {
    results: Vec<Measurement>,
}

impl PerformanceComparison {
    pub fn new() -> Self {
        Self::default()
    }

    /// 標準の3ワークロードを実行して比較を作成
    pub fn run_standard<C, R>(runner: &BenchmarkRunner<C, R>) -> Self
    where
        C: RunnerConfig,
        R: BenchmarkReporter,
    {
        Self {
            results: runner.run_all(standard_workloads()),
        }
    }

    pub fn record(&mut self, measurement: Measurement) {
        self.results.push(measurement);
    }

    pub fn results(&self) -> &[Measurement] {
        &self.results
    }

    pub fn fastest(&self) -> Option<&Measurement> {
        self.results.iter().min_by_key(|m| m.elapsed)
    }

    pub fn slowest(&self) -> Option<&Measurement> {
        self.results.iter().max_by_key(|m| m.elapsed)
    }

    /// 最速の計測に対する倍率（最速が0の場合は1.0）
    pub fn relative_to_fastest(&self, measurement: &Measurement) -> f64 {
        match self.fastest() {
            Some(fastest) if !fastest.elapsed.is_zero() => {
                measurement.elapsed.as_secs_f64() / fastest.elapsed.as_secs_f64()
            }
            _ => 1.0,
        }
    }

    pub fn build_report(&self) -> ComparisonReport {
        ComparisonReport {
            timestamp: Utc::now(),
            fastest: self.fastest().map(|m| m.description.clone()),
            results: self
                .results
                .iter()
                .map(|m| ReportEntry {
                    description: m.description.clone(),
                    iterations: m.iterations,
                    elapsed_ms: m.elapsed_ms(),
                    nanos_per_iteration: m.nanos_per_iteration(),
                    relative_to_fastest: self.relative_to_fastest(m),
                })
                .collect(),
        }
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 パフォーマンス比較サマリー");
        println!("{}", "=".repeat(60));

        for measurement in &self.results {
            println!(
                "🎯 {}: {:?} ({:.1} ns/iter, x{:.2})",
                measurement.description,
                measurement.elapsed,
                measurement.nanos_per_iteration(),
                self.relative_to_fastest(measurement)
            );
        }

        if let Some(fastest) = self.fastest() {
            println!("🏆 Best: {} ({:?})", fastest.description, fastest.elapsed);
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&self.build_report())
            .context("レポートのシリアライズに失敗しました")?;
        std::fs::write(path, json)
            .with_context(|| format!("レポートを書き込めません: {}", path.display()))?;
        Ok(())
    }
}
