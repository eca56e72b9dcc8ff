// 動的ヒープ上の人物コンストラクタ群
// Person（クロージャ束縛）、PersonNoFullName（プレーン）、PersonProto（委譲）、
// Employee / Employee2（PersonProto から派生）

use crate::core::{ConstructorHandle, ListHandle, ObjectHandle, ObjectResult};
use crate::object_model::{arg, derive_from, derive_with_create, init, native, ObjectHeap, Value};

/// 登録済みコンストラクタのハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonConstructors {
    /// fullName をインスタンスごとのクロージャとして持つ
    pub person: ConstructorHandle,
    /// フィールドのみ
    pub person_no_full_name: ConstructorHandle,
    /// fullName を共有委譲先に持つ
    pub person_proto: ConstructorHandle,
    /// 中間委譲先を挟んで PersonProto から派生
    pub employee: ConstructorHandle,
    /// create で PersonProto から派生
    pub employee2: ConstructorHandle,
}

/// 全コンストラクタをヒープに登録する
pub fn register_person_constructors(heap: &mut ObjectHeap) -> ObjectResult<PersonConstructors> {
    let person = heap.define_constructor(
        "Person",
        init(|heap, this, args| {
            set_names(heap, this, args)?;
            let full_name = heap.alloc_function(
                "fullName",
                native(move |heap, _receiver, _args| {
                    let first = heap.get(this, "firstName")?;
                    let last = heap.get(this, "lastName")?;
                    Ok(Value::Str(format!("{first} {last}")))
                }),
            );
            heap.set(this, "fullName", Value::Function(full_name))
        }),
    );

    let person_no_full_name = heap.define_constructor("PersonNoFullName", init(set_names));

    let person_proto = heap.define_constructor("PersonProto", init(set_names));
    heap.define_method(
        person_proto,
        "fullName",
        native(|heap, this, _args| {
            let first = heap.this_field(this, "firstName", "fullName")?;
            let last = heap.this_field(this, "lastName", "fullName")?;
            Ok(Value::Str(format!("{first} {last}")))
        }),
    )?;

    let employee = heap.define_constructor("Employee", init(set_employee_fields));
    derive_from(heap, employee, person_proto)?;
    define_get_salary(heap, employee)?;

    let employee2 = heap.define_constructor("Employee2", init(set_employee_fields));
    derive_with_create(heap, employee2, person_proto)?;
    define_get_salary(heap, employee2)?;

    Ok(PersonConstructors {
        person,
        person_no_full_name,
        person_proto,
        employee,
        employee2,
    })
}

fn set_names(heap: &mut ObjectHeap, this: ObjectHandle, args: &[Value]) -> ObjectResult<()> {
    heap.set(this, "firstName", arg(args, 0))?;
    heap.set(this, "lastName", arg(args, 1))
}

fn set_employee_fields(heap: &mut ObjectHeap, this: ObjectHandle, args: &[Value]) -> ObjectResult<()> {
    set_names(heap, this, args)?;
    heap.set(this, "salary", arg(args, 2))
}

/// `getSalary` を共有委譲先に追加する
pub fn define_get_salary(heap: &mut ObjectHeap, constructor: ConstructorHandle) -> ObjectResult<()> {
    heap.define_method(
        constructor,
        "getSalary",
        native(|heap, this, _args| {
            let receiver = this.map(Value::Object).unwrap_or(Value::Undefined);
            let full_name = match this {
                Some(_) => heap.invoke(&receiver, "fullName", &[])?,
                None => Value::Undefined,
            };
            let salary = heap.this_field(this, "salary", "getSalary")?;
            Ok(Value::Str(format!("{full_name} earns {salary}")))
        }),
    )?;
    Ok(())
}

/// レコードを明示的な引数として受け取るフリー関数
pub fn get_full_name(heap: &ObjectHeap, person: &Value) -> ObjectResult<String> {
    let (first, last) = match person {
        Value::Object(handle) => (heap.get(*handle, "firstName")?, heap.get(*handle, "lastName")?),
        _ => (Value::Undefined, Value::Undefined),
    };
    Ok(format!("{first} {last}"))
}

/// 共有委譲先に可変リスト `friends` を置く
///
/// 以降に作られたインスタンスも含め、全インスタンスが同じリストを参照する。
pub fn attach_shared_friends(
    heap: &mut ObjectHeap,
    constructor: ConstructorHandle,
) -> ObjectResult<ListHandle> {
    let prototype = heap.prototype_of_constructor(constructor)?;
    let friends = heap.alloc_list();
    heap.set(prototype, "friends", Value::List(friends))?;
    Ok(friends)
}

/// インスタンスから `friends` リストを辿る
pub fn friends_of(heap: &ObjectHeap, person: ObjectHandle) -> ObjectResult<Option<ListHandle>> {
    Ok(heap.get(person, "friends")?.as_list())
}

/// ルート委譲先に fullName を追加する（全オブジェクトに影響する）
pub fn install_root_full_name(heap: &mut ObjectHeap) -> ObjectResult<()> {
    let root = heap.object_root();
    let function = heap.alloc_function(
        "fullName",
        native(|heap, this, _args| {
            let first = heap.this_field(this, "firstName", "fullName")?;
            let last = heap.this_field(this, "lastName", "fullName")?;
            Ok(Value::Str(format!("{first} {last}")))
        }),
    );
    heap.set(root, "fullName", Value::Function(function))
}
