// 結果報告機能
// ベンチマーク計測結果とセクション見出しの出力

pub mod implementations;

// 公開API
pub use implementations::{ConsoleBenchmarkReporter, NoOpBenchmarkReporter};
