//! パフォーマンス測定とベンチマークモジュール
//!
//! クロージャ束縛・プレーン・委譲の各レコードの構築と fullName 呼び出しを
//! 同じ反復回数で計測し、比較する

pub mod performance_comparison;
pub mod runner;
pub mod workload;

pub use performance_comparison::{ComparisonReport, PerformanceComparison, ReportEntry};
pub use runner::BenchmarkRunner;
pub use workload::{standard_workloads, LabeledWorkload};
