// 設定管理の具象実装

use crate::core::{ConfigError, RunnerConfig};

/// 1ワークロードあたりの既定反復回数
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultRunnerConfig {
    iterations: u64,
    enable_reporting: bool,
}

impl DefaultRunnerConfig {
    pub fn new(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_reporting(mut self, enable: bool) -> Self {
        self.enable_reporting = enable;
        self
    }

    /// 設定値の検証
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::new("iterations", "1以上である必要があります"));
        }
        Ok(())
    }
}

impl Default for DefaultRunnerConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            enable_reporting: true,
        }
    }
}

impl RunnerConfig for DefaultRunnerConfig {
    fn iterations(&self) -> u64 {
        self.iterations
    }

    fn enable_reporting(&self) -> bool {
        self.enable_reporting
    }
}
