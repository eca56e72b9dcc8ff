// オブジェクトモデル・レコード・設定のエラー型定義
// 委譲チェーン上のプロパティ欠落、レシーバ欠落、プリミティブ値への呼び出しを明示的に表現する

use super::types::{ConstructorHandle, FunctionHandle, ListHandle, ObjectHandle};
use thiserror::Error;

/// オブジェクトモデル固有のエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectModelError {
    #[error("呼び出し不可: {key} は関数ではありません")]
    NotCallable { key: String },

    #[error("レシーバ欠落: {function} はレシーバなしで呼び出されました")]
    DetachedReceiver { function: String },

    #[error("機能なし: {kind} 値には {key} がありません")]
    NoSuchCapability { kind: String, key: String },

    #[error("オブジェクトが見つかりません: {0}")]
    ObjectNotFound(ObjectHandle),

    #[error("関数が見つかりません: {0}")]
    FunctionNotFound(FunctionHandle),

    #[error("リストが見つかりません: {0}")]
    ListNotFound(ListHandle),

    #[error("コンストラクタが見つかりません: {0}")]
    ConstructorNotFound(ConstructorHandle),

    #[error("委譲チェーンの循環を検出しました")]
    PrototypeCycleDetected,

    #[error("委譲チェーンが深すぎます: {depth} (上限 {max})")]
    PrototypeChainTooDeep { depth: u32, max: u32 },

    #[error("インデックス範囲外: {list} [{index}] (長さ {len})")]
    IndexOutOfRange {
        list: ListHandle,
        index: usize,
        len: usize,
    },
}

impl ObjectModelError {
    pub fn not_callable(key: impl Into<String>) -> Self {
        Self::NotCallable { key: key.into() }
    }

    pub fn detached_receiver(function: impl Into<String>) -> Self {
        Self::DetachedReceiver {
            function: function.into(),
        }
    }

    pub fn no_such_capability(kind: impl Into<String>, key: impl Into<String>) -> Self {
        Self::NoSuchCapability {
            kind: kind.into(),
            key: key.into(),
        }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotCallable { .. }
            | Self::DetachedReceiver { .. }
            | Self::NoSuchCapability { .. } => ErrorSeverity::Medium,
            Self::IndexOutOfRange { .. } => ErrorSeverity::Low,
            Self::ObjectNotFound(_)
            | Self::FunctionNotFound(_)
            | Self::ListNotFound(_)
            | Self::ConstructorNotFound(_) => ErrorSeverity::High,
            Self::PrototypeCycleDetected | Self::PrototypeChainTooDeep { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    /// エラーコンテキストを取得
    pub fn context(&self) -> ErrorContext {
        match self {
            Self::NotCallable { key } => ErrorContext::new("invoke")
                .with_resource(key.clone())
                .with_suggestion("プロパティが削除されていないか確認してください"),
            Self::DetachedReceiver { function } => ErrorContext::new("invoke")
                .with_resource(function.clone())
                .with_suggestion("レシーバ経由でメソッドとして呼び出してください"),
            Self::NoSuchCapability { kind, .. } => ErrorContext::new("invoke")
                .with_resource(kind.clone())
                .with_suggestion("レコード専用の振る舞いはプリミティブ値に使えません"),
            Self::PrototypeCycleDetected | Self::PrototypeChainTooDeep { .. } => {
                ErrorContext::new("prototype_lookup")
            }
            _ => ErrorContext::new("heap_access"),
        }
    }
}

/// 型付きレコードのエラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("振る舞いが削除されています: {record}.{behavior}")]
    BehaviorRemoved { record: String, behavior: String },
}

impl RecordError {
    pub fn behavior_removed(record: impl Into<String>, behavior: impl Into<String>) -> Self {
        Self::BehaviorRemoved {
            record: record.into(),
            behavior: behavior.into(),
        }
    }
}

/// 設定検証エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("設定エラー: {field} - {reason}")]
pub struct ConfigError {
    pub field: String,
    pub reason: String,
}

impl ConfigError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    /// ヒープ構造そのものが壊れている
    Critical,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// エラーコンテキスト情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// 実行していた操作
    pub operation: String,
    /// 関連するリソース（プロパティ名等）
    pub resource: Option<String>,
    /// エラー解決のための提案
    pub suggestion: Option<String>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
            suggestion: None,
        }
    }

    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// オブジェクトモデル操作の結果型
pub type ObjectResult<T> = std::result::Result<T, ObjectModelError>;

/// 型付きレコード操作の結果型
pub type RecordResult<T> = std::result::Result<T, RecordError>;
