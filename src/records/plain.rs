// プレーンレコードとフリー関数

use super::NamedRecord;
use crate::core::{FullName, RecordResult};

/// フィールドのみを持つレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainPerson {
    pub first_name: String,
    pub last_name: String,
}

impl PlainPerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

impl NamedRecord for PlainPerson {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}

/// レコードを明示的な引数として受け取るフリー関数
pub fn full_name(person: &PlainPerson) -> String {
    format!("{} {}", person.first_name, person.last_name)
}

impl FullName for PlainPerson {
    fn full_name(&self) -> RecordResult<String> {
        Ok(full_name(self))
    }
}
