//! 共有委譲先を持つレコード
//!
//! フルネームの振る舞いはインスタンスではなく、同じコンストラクタで作られた
//! 全インスタンスが共有する [`PersonPrototype`] に置かれる。振る舞いは
//! レシーバを明示的な引数として受け取るため、レシーバなしでは呼び出せない。

use super::NamedRecord;
use crate::core::{FullName, RecordResult};
use crate::object_model::value::format_number;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// レシーバを明示的に受け取る委譲された振る舞い
pub type DelegatedBehavior = Rc<dyn Fn(&dyn NamedRecord) -> String>;

/// 共有委譲先が所有する可変コンテナ。全インスタンスから同じ実体が見える
pub type SharedList<T> = Rc<RefCell<Vec<T>>>;

/// 人物レコードの共有委譲先
pub struct PersonPrototype {
    full_name: DelegatedBehavior,
    friends: SharedList<Rc<DelegatedPerson>>,
}

impl PersonPrototype {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            full_name: Rc::new(|record: &dyn NamedRecord| {
                format!("{} {}", record.first_name(), record.last_name())
            }),
            friends: Rc::new(RefCell::new(Vec::new())),
        })
    }

    /// 共有の振る舞いを取り出す
    pub fn full_name_behavior(&self) -> DelegatedBehavior {
        Rc::clone(&self.full_name)
    }

    /// 委譲先レベルの共有リスト
    pub fn friends(&self) -> SharedList<Rc<DelegatedPerson>> {
        Rc::clone(&self.friends)
    }
}

impl fmt::Debug for PersonPrototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonPrototype")
            .field("friends", &self.friends.borrow().len())
            .finish_non_exhaustive()
    }
}

/// 共有委譲先に振る舞いを委ねるレコード
pub struct DelegatedPerson {
    pub first_name: String,
    pub last_name: String,
    prototype: Rc<PersonPrototype>,
    own_full_name: Option<DelegatedBehavior>,
}

impl DelegatedPerson {
    pub fn new(
        prototype: &Rc<PersonPrototype>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            prototype: Rc::clone(prototype),
            own_full_name: None,
        }
    }

    pub fn prototype(&self) -> &Rc<PersonPrototype> {
        &self.prototype
    }

    /// このインスタンスだけで共有の振る舞いを上書きする
    pub fn override_full_name(&mut self, behavior: DelegatedBehavior) {
        self.own_full_name = Some(behavior);
    }

    /// 上書きを削除する。以降は再び共有の振る舞いが使われる
    pub fn remove_full_name_override(&mut self) -> bool {
        self.own_full_name.take().is_some()
    }

    pub fn has_own_full_name(&self) -> bool {
        self.own_full_name.is_some()
    }

    /// 上書きがあればそれを、無ければ共有の振る舞いを返す
    pub fn full_name_behavior(&self) -> DelegatedBehavior {
        self.own_full_name
            .clone()
            .unwrap_or_else(|| self.prototype.full_name_behavior())
    }

    pub fn friends(&self) -> SharedList<Rc<DelegatedPerson>> {
        self.prototype.friends()
    }
}

impl NamedRecord for DelegatedPerson {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl FullName for DelegatedPerson {
    fn full_name(&self) -> RecordResult<String> {
        let behavior = self.own_full_name.as_ref().unwrap_or(&self.prototype.full_name);
        Ok(behavior(self))
    }
}

impl fmt::Debug for DelegatedPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedPerson")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("has_own_full_name", &self.own_full_name.is_some())
            .finish()
    }
}

/// 収入の説明を返す振る舞い
pub type EarningBehavior = Rc<dyn Fn(&EmployeeRecord) -> RecordResult<String>>;

/// 従業員の共有委譲先。人物の委譲先に連結される（コピーではない）
pub struct EmployeePrototype {
    parent: Rc<PersonPrototype>,
    earning_statement: EarningBehavior,
}

impl EmployeePrototype {
    pub fn new(parent: &Rc<PersonPrototype>) -> Rc<Self> {
        Rc::new(Self {
            parent: Rc::clone(parent),
            earning_statement: Rc::new(|employee: &EmployeeRecord| -> RecordResult<String> {
                Ok(format!(
                    "{} earns {}",
                    employee.full_name()?,
                    format_number(employee.salary)
                ))
            }),
        })
    }

    pub fn parent(&self) -> &Rc<PersonPrototype> {
        &self.parent
    }
}

impl fmt::Debug for EmployeePrototype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeePrototype")
            .field("parent", &self.parent)
            .finish_non_exhaustive()
    }
}

/// 給与を持つ従業員レコード
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub salary: f64,
    prototype: Rc<EmployeePrototype>,
}

impl EmployeeRecord {
    pub fn new(
        prototype: &Rc<EmployeePrototype>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            salary,
            prototype: Rc::clone(prototype),
        }
    }

    /// `fullName() + " earns " + salary`
    pub fn earning_statement(&self) -> RecordResult<String> {
        (self.prototype.earning_statement)(self)
    }

    /// 委譲チェーンに人物の委譲先が含まれるか
    pub fn delegates_to(&self, prototype: &Rc<PersonPrototype>) -> bool {
        Rc::ptr_eq(&self.prototype.parent, prototype)
    }

    /// 2段目の委譲先から共有リストを取得する
    pub fn friends(&self) -> SharedList<Rc<DelegatedPerson>> {
        self.prototype.parent.friends()
    }
}

impl NamedRecord for EmployeeRecord {
    fn first_name(&self) -> &str {
        &self.first_name
    }

    fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl FullName for EmployeeRecord {
    fn full_name(&self) -> RecordResult<String> {
        Ok((self.prototype.parent.full_name)(self))
    }
}

impl fmt::Debug for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmployeeRecord")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("salary", &self.salary)
            .finish()
    }
}
