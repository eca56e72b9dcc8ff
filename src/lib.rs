pub mod benchmarks;
pub mod cli;
pub mod core;
pub mod demonstration;
pub mod object_model;
pub mod records;
pub mod services;

pub use benchmarks::{BenchmarkRunner, LabeledWorkload, PerformanceComparison};
pub use crate::core::{FullName, Measurement, ObjectModelError, ReceiverPolicy};
pub use object_model::{ObjectHeap, Value};

use crate::core::{BenchmarkReporter, RunnerConfig};
use std::io::Write;

// 設定と報告先を直接所有するアプリケーション構造体
// ベンチマークとデモンストレーションを元の順序で実行する
pub struct App<C, R>
where
    C: RunnerConfig,
    R: BenchmarkReporter,
{
    pub runner: BenchmarkRunner<C, R>,
}

impl<C, R> App<C, R>
where
    C: RunnerConfig,
    R: BenchmarkReporter,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(config: C, reporter: R) -> Self {
        Self {
            runner: BenchmarkRunner::new(config, reporter),
        }
    }

    /// ベンチマーク3種を実行した後、デモンストレーションを書き出す
    ///
    /// デモンストレーションは最後に意図的なエラーで終わるため、通常は Err を返す。
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<PerformanceComparison> {
        self.runner
            .reporter()
            .report_section(cli::commands::BENCHMARK_HEADER);
        let comparison = PerformanceComparison::run_standard(&self.runner);

        let mut heap = ObjectHeap::new();
        demonstration::run_demonstrations(&mut heap, out)?;
        Ok(comparison)
    }
}
