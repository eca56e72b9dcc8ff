// 動的値の表現
// ヒープ上のオブジェクト・関数・リストはハンドルで参照する

use crate::core::{ConstructorHandle, FunctionHandle, ListHandle, ObjectHandle};
use std::fmt;

/// プロパティ値およびメソッドの戻り値
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 値の欠落を表すマーカー
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Object(ObjectHandle),
    Function(FunctionHandle),
    /// 共有可変リスト
    List(ListHandle),
    Constructor(ConstructorHandle),
}

impl Value {
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// 値の種別名
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::Object(_) => "object",
            Self::Function(_) | Self::Constructor(_) => "function",
            Self::List(_) => "list",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_object(&self) -> Option<ObjectHandle> {
        match self {
            Self::Object(handle) => Some(*handle),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<ListHandle> {
        match self {
            Self::List(handle) => Some(*handle),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<ObjectHandle> for Value {
    fn from(value: ObjectHandle) -> Self {
        Self::Object(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => f.write_str(&format_number(*n)),
            Self::Str(s) => f.write_str(s),
            Self::Object(_) => f.write_str("[object Object]"),
            Self::Function(h) => write!(f, "[{h}]"),
            Self::List(h) => write!(f, "[{h}]"),
            Self::Constructor(h) => write!(f, "[{h}]"),
        }
    }
}

/// 整数値は小数点なしで表示する
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

/// 引数リストから i 番目を取得（不足時は Undefined）
pub fn arg(args: &[Value], index: usize) -> Value {
    args.get(index).cloned().unwrap_or(Value::Undefined)
}
