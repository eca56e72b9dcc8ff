// 継承のエミュレーション
// 子コンストラクタの共有委譲先を親の共有委譲先へ連結する

use super::heap::ObjectHeap;
use super::value::Value;
use crate::core::{ConstructorHandle, ObjectHandle, ObjectResult};

/// 空の中間委譲先を挟んで子を親に連結する
///
/// 中間オブジェクトは親の共有委譲先に委譲するだけの空オブジェクト。
/// 子の委譲先と親の委譲先は別オブジェクトのままなので、子への追加は親に漏れない。
pub fn derive_from(
    heap: &mut ObjectHeap,
    child: ConstructorHandle,
    parent: ConstructorHandle,
) -> ObjectResult<ObjectHandle> {
    let parent_prototype = heap.prototype_of_constructor(parent)?;
    let intermediate = heap.create(None);
    heap.set_prototype_of(intermediate, Some(parent_prototype))?;
    link_child(heap, child, intermediate)?;
    Ok(intermediate)
}

/// 親の共有委譲先に委譲するオブジェクトを直接作って子に連結する
pub fn derive_with_create(
    heap: &mut ObjectHeap,
    child: ConstructorHandle,
    parent: ConstructorHandle,
) -> ObjectResult<ObjectHandle> {
    let parent_prototype = heap.prototype_of_constructor(parent)?;
    let intermediate = heap.create(Some(parent_prototype));
    link_child(heap, child, intermediate)?;
    Ok(intermediate)
}

/// 子と親で共有委譲先そのものを共有させる
///
/// 子の委譲先への追加が親のインスタンスにも見えてしまう。正しい継承ではない。
pub fn share_prototype(
    heap: &mut ObjectHeap,
    child: ConstructorHandle,
    parent: ConstructorHandle,
) -> ObjectResult<ObjectHandle> {
    let parent_prototype = heap.prototype_of_constructor(parent)?;
    heap.set_constructor_prototype(child, parent_prototype)?;
    Ok(parent_prototype)
}

fn link_child(
    heap: &mut ObjectHeap,
    child: ConstructorHandle,
    prototype: ObjectHandle,
) -> ObjectResult<()> {
    heap.set_constructor_prototype(child, prototype)?;
    // constructor を子に向け直す
    heap.set(prototype, "constructor", Value::Constructor(child))
}
