// サービス層 - 設定と結果報告の具象実装

pub mod config;
pub mod monitoring;

// 公開API
pub use config::DefaultRunnerConfig;
pub use monitoring::{ConsoleBenchmarkReporter, NoOpBenchmarkReporter};
