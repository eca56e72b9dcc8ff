// 共通型定義
// ハンドル型、レシーバポリシー、ベンチマーク計測結果

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// ヒープ上のオブジェクトを指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectHandle(pub u32);

/// ヒープ上の関数を指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FunctionHandle(pub u32);

/// 共有リスト（可変コンテナ）を指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ListHandle(pub u32);

/// コンストラクタを指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ConstructorHandle(pub u32);

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object#{}", self.0)
    }
}

impl fmt::Display for FunctionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function#{}", self.0)
    }
}

impl fmt::Display for ListHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list#{}", self.0)
    }
}

impl fmt::Display for ConstructorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "constructor#{}", self.0)
    }
}

/// レシーバなしで委譲メソッドを呼び出したときの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReceiverPolicy {
    /// レシーバ欠落をエラーとして報告する
    #[default]
    Strict,
    /// 空のグローバルオブジェクトをレシーバとして扱い、欠落フィールドは undefined になる
    Sloppy,
}

/// 1回のベンチマーク実行の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub description: String,
    pub iterations: u64,
    pub elapsed: Duration,
}

impl Measurement {
    pub fn new(description: impl Into<String>, iterations: u64, elapsed: Duration) -> Self {
        Self {
            description: description.into(),
            iterations,
            elapsed,
        }
    }

    /// 経過時間（ミリ秒）
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }

    /// 1回あたりの平均時間（ナノ秒）
    pub fn nanos_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_nanos() as f64 / self.iterations as f64
    }

    /// レポート行 `"<description> took: <elapsed-ms>"`
    pub fn report_line(&self) -> String {
        format!("{} took: {}", self.description, self.elapsed_ms())
    }
}
