// クロージャ束縛レコード
// インスタンスごとに自分のフィールドを参照するクロージャを保持する

use super::PersonFields;
use crate::core::{FullName, RecordError, RecordResult};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// レシーバを必要としない、インスタンスに束縛済みの振る舞い
pub type BoundBehavior = Rc<dyn Fn() -> String>;

/// 構築時にフルネームのクロージャを作るレコード
///
/// クロージャは文字列のコピーではなくフィールドへの共有参照を捕捉するため、
/// 構築後にフィールドを変更すると呼び出し結果にも反映される。
pub struct ClosurePerson {
    fields: Rc<RefCell<PersonFields>>,
    full_name: Option<BoundBehavior>,
}

impl ClosurePerson {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        let fields = Rc::new(RefCell::new(PersonFields::new(first_name, last_name)));
        let captured = Rc::clone(&fields);
        let full_name: BoundBehavior = Rc::new(move || captured.borrow().joined());
        Self {
            fields,
            full_name: Some(full_name),
        }
    }

    pub fn first_name(&self) -> String {
        self.fields.borrow().first_name.clone()
    }

    pub fn last_name(&self) -> String {
        self.fields.borrow().last_name.clone()
    }

    pub fn set_first_name(&self, first_name: impl Into<String>) {
        self.fields.borrow_mut().first_name = first_name.into();
    }

    pub fn set_last_name(&self, last_name: impl Into<String>) {
        self.fields.borrow_mut().last_name = last_name.into();
    }

    /// 振る舞いを取り出す。取り出した値は単独で呼び出しても正しく動作する
    pub fn full_name_behavior(&self) -> Option<BoundBehavior> {
        self.full_name.clone()
    }

    /// このインスタンスからのみ振る舞いを削除する
    pub fn remove_full_name(&mut self) -> bool {
        self.full_name.take().is_some()
    }

    pub fn has_full_name(&self) -> bool {
        self.full_name.is_some()
    }
}

impl FullName for ClosurePerson {
    fn full_name(&self) -> RecordResult<String> {
        self.full_name
            .as_ref()
            .map(|behavior| behavior())
            .ok_or_else(|| RecordError::behavior_removed("ClosurePerson", "fullName"))
    }
}

impl fmt::Debug for ClosurePerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosurePerson")
            .field("fields", &self.fields.borrow())
            .field("has_full_name", &self.full_name.is_some())
            .finish()
    }
}
