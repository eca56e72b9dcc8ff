// 設定管理機能
// ベンチマーク反復回数、レシーバポリシー、報告の有無

pub mod implementations;

// 公開API
pub use implementations::DefaultRunnerConfig;
