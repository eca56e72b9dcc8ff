// 抽象化インターフェースの定義
// レコードの fullName 能力、ベンチマーク設定、結果報告

use super::error::RecordResult;
use super::types::Measurement;
use mockall::automock;

/// フルネームを計算する能力
///
/// クロージャ束縛・プレーン・委譲の各レコードがそれぞれの方法で実装する。
pub trait FullName {
    /// `firstName + " " + lastName` を返す
    fn full_name(&self) -> RecordResult<String>;
}

/// ベンチマーク実行の設定を抽象化するトレイト
#[automock]
pub trait RunnerConfig {
    /// 1ワークロードあたりの反復回数
    fn iterations(&self) -> u64;

    /// 結果報告を有効にするかどうか
    fn enable_reporting(&self) -> bool;
}

impl RunnerConfig for Box<dyn RunnerConfig> {
    fn iterations(&self) -> u64 {
        self.as_ref().iterations()
    }

    fn enable_reporting(&self) -> bool {
        self.as_ref().enable_reporting()
    }
}

/// ベンチマーク結果の報告トレイト
#[automock]
pub trait BenchmarkReporter {
    /// 計測完了時の報告
    fn report_measurement(&self, measurement: &Measurement);

    /// セクション見出しの報告
    fn report_section(&self, title: &str);
}

impl BenchmarkReporter for Box<dyn BenchmarkReporter> {
    fn report_measurement(&self, measurement: &Measurement) {
        self.as_ref().report_measurement(measurement)
    }

    fn report_section(&self, title: &str) {
        self.as_ref().report_section(title)
    }
}
