// 関数とコンストラクタの登録エントリ

use super::heap::ObjectHeap;
use super::value::Value;
use crate::core::{ObjectHandle, ObjectResult};
use std::fmt;
use std::rc::Rc;

/// ネイティブ関数本体
///
/// 第2引数はレシーバ。メソッド呼び出し規約で呼ばれた場合のみ `Some` になる。
pub type NativeBody = Rc<dyn Fn(&ObjectHeap, Option<ObjectHandle>, &[Value]) -> ObjectResult<Value>>;

/// コンストラクタの初期化処理（新しいインスタンスのフィールドを設定する）
pub type ConstructorInit = Rc<dyn Fn(&mut ObjectHeap, ObjectHandle, &[Value]) -> ObjectResult<()>>;

#[derive(Clone)]
pub struct NativeFunction {
    pub name: String,
    pub body: NativeBody,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// コンストラクタ: 名前、共有委譲先、初期化処理
#[derive(Clone)]
pub struct Constructor {
    pub name: String,
    pub prototype: ObjectHandle,
    pub init: ConstructorInit,
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("name", &self.name)
            .field("prototype", &self.prototype)
            .finish_non_exhaustive()
    }
}

/// クロージャから関数本体を作る
pub fn native<F>(body: F) -> NativeBody
where
    F: Fn(&ObjectHeap, Option<ObjectHandle>, &[Value]) -> ObjectResult<Value> + 'static,
{
    Rc::new(body)
}

/// クロージャから初期化処理を作る
pub fn init<F>(body: F) -> ConstructorInit
where
    F: Fn(&mut ObjectHeap, ObjectHandle, &[Value]) -> ObjectResult<()> + 'static,
{
    Rc::new(body)
}

/// フィールドを設定しない初期化処理
pub fn empty_init() -> ConstructorInit {
    init(|_, _, _| Ok(()))
}
