// 結果報告の具象実装

use crate::core::{BenchmarkReporter, Measurement};

/// コンソール出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleBenchmarkReporter {
    quiet: bool,
}

impl ConsoleBenchmarkReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl BenchmarkReporter for ConsoleBenchmarkReporter {
    fn report_measurement(&self, measurement: &Measurement) {
        if !self.quiet {
            println!("{}", measurement.report_line());
        }
    }

    fn report_section(&self, title: &str) {
        if !self.quiet {
            println!("{title}");
        }
    }
}

/// 何もしない結果報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpBenchmarkReporter;

impl NoOpBenchmarkReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpBenchmarkReporter {
    fn report_measurement(&self, _measurement: &Measurement) {
        // 何もしない
    }

    fn report_section(&self, _title: &str) {
        // 何もしない
    }
}
