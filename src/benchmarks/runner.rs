// ベンチマークランナー
// 引数なしの処理を固定回数連続で実行し、経過時間を報告する

use super::workload::LabeledWorkload;
use crate::core::{BenchmarkReporter, Measurement, RunnerConfig};
use std::time::Instant;

/// 設定と報告先を持つベンチマークランナー
pub struct BenchmarkRunner<C, R>
where
    C: RunnerConfig,
    R: BenchmarkReporter,
{
    config: C,
    reporter: R,
}

impl<C, R> BenchmarkRunner<C, R>
where
    C: RunnerConfig,
    R: BenchmarkReporter,
{
    pub fn new(config: C, reporter: R) -> Self {
        Self { config, reporter }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// `unit` を設定回数だけ実行し、計測結果を報告して返す
    pub fn run<F>(&self, description: &str, mut unit: F) -> Measurement
    where
        F: FnMut(),
    {
        let iterations = self.config.iterations();
        let start = Instant::now();
        for _ in 0..iterations {
            unit();
        }
        let measurement = Measurement::new(description, iterations, start.elapsed());
        self.report(&measurement);
        measurement
    }

    /// 失敗しうる `unit` を実行する
    ///
    /// 最初のエラーで残りの反復を中止し、報告せずにエラーを返す。
    pub fn try_run<F, E>(&self, description: &str, mut unit: F) -> Result<Measurement, E>
    where
        F: FnMut() -> Result<(), E>,
    {
        let iterations = self.config.iterations();
        let start = Instant::now();
        for _ in 0..iterations {
            unit()?;
        }
        let measurement = Measurement::new(description, iterations, start.elapsed());
        self.report(&measurement);
        Ok(measurement)
    }

    /// ラベル付きワークロードを消費して実行する
    pub fn run_workload(&self, workload: LabeledWorkload) -> Measurement {
        let LabeledWorkload { description, unit } = workload;
        self.run(&description, unit)
    }

    pub fn run_all(&self, workloads: Vec<LabeledWorkload>) -> Vec<Measurement> {
        workloads
            .into_iter()
            .map(|workload| self.run_workload(workload))
            .collect()
    }

    fn report(&self, measurement: &Measurement) {
        if self.config.enable_reporting() {
            self.reporter.report_measurement(measurement);
        }
    }
}
