//! 人物レコードの実装バリエーション
//!
//! 振る舞いの持たせ方が異なる3種類の型付きレコード（ベンチマーク用）と、
//! 動的オブジェクトヒープ上に登録するコンストラクタ群を提供する。

pub mod closure_bound;
pub mod constructors;
pub mod delegated;
pub mod plain;

pub use closure_bound::{BoundBehavior, ClosurePerson};
pub use constructors::{get_full_name, register_person_constructors, PersonConstructors};
pub use delegated::{
    DelegatedBehavior, DelegatedPerson, EmployeePrototype, EmployeeRecord, PersonPrototype,
    SharedList,
};
pub use plain::{full_name, PlainPerson};

/// 姓名フィールドを読み取れるレコード
pub trait NamedRecord {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
}

/// 姓名フィールドの組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonFields {
    pub first_name: String,
    pub last_name: String,
}

impl PersonFields {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// `firstName + " " + lastName`
    pub fn joined(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl NamedRecord for PersonFields {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}
