//! 委譲モデルのデモンストレーション
//!
//! 呼び出しコンテキスト、削除、共有プロパティ、継承、create、ルート委譲先の
//! 各セクションを順に実行し、結果を行単位で書き出す。最後のセクションは
//! 数値に対して fullName を呼び出し、意図的に失敗する。

use crate::core::ObjectHandle;
use crate::object_model::{ObjectHeap, Value};
use crate::records::constructors::{
    attach_shared_friends, friends_of, install_root_full_name, register_person_constructors,
    PersonConstructors,
};
use anyhow::{Context, Result};
use std::io::Write;

pub const INVOKE_CONTEXT: &str = "Examples using invoke context.";
pub const DELETE: &str = "Examples using delete.";
pub const STATIC_PROPERTY: &str = "Example using static prototype property.";
pub const INHERITANCE: &str = "Examples using inheritance.";
pub const OBJECT_CREATE: &str = "Examples using Object.create.";
pub const PROTO_POINTER: &str = "Examples on __proto__.";

/// 全セクションを順に実行する。最初のエラーで中断する
pub fn run_demonstrations<W: Write>(heap: &mut ObjectHeap, out: &mut W) -> Result<()> {
    let ctors = register_person_constructors(heap)?;

    invoke_context(heap, &ctors, out)?;
    delete_semantics(heap, &ctors, out)?;
    static_prototype_property(heap, &ctors, out)?;
    inheritance(heap, &ctors, out)?;
    object_create(heap, &ctors, out)?;
    proto_pointer(heap, out)
}

fn section<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    Ok(())
}

fn sander_rossel() -> Vec<Value> {
    vec![Value::str("Sander"), Value::str("Rossel")]
}

fn full_name(heap: &ObjectHeap, record: ObjectHandle) -> Result<Value> {
    Ok(heap.invoke(&Value::Object(record), "fullName", &[])?)
}

pub fn invoke_context<W: Write>(
    heap: &mut ObjectHeap,
    ctors: &PersonConstructors,
    out: &mut W,
) -> Result<()> {
    section(out, INVOKE_CONTEXT)?;

    let p = heap.construct(ctors.person_proto, &sander_rossel())?;
    writeln!(out, "{}", full_name(heap, p)?)?;

    // クロージャ束縛の関数は取り出して単独で呼んでも動作する
    let p = heap.construct(ctors.person, &sander_rossel())?;
    writeln!(out, "{}", full_name(heap, p)?)?;
    let detached = heap.get(p, "fullName")?;
    writeln!(out, "{}", heap.call(&detached, None, &[])?)?;
    Ok(())
}

pub fn delete_semantics<W: Write>(
    heap: &mut ObjectHeap,
    ctors: &PersonConstructors,
    out: &mut W,
) -> Result<()> {
    section(out, DELETE)?;

    // 自身のプロパティではないので削除しても共有の振る舞いが残る
    let p = heap.construct(ctors.person_proto, &sander_rossel())?;
    heap.delete(p, "fullName")?;
    writeln!(out, "{}", full_name(heap, p)?)?;

    heap.set(p, "fullName", Value::Undefined)?;
    writeln!(out, "{}", heap.get(p, "fullName")?)?;
    Ok(())
}

pub fn static_prototype_property<W: Write>(
    heap: &mut ObjectHeap,
    ctors: &PersonConstructors,
    out: &mut W,
) -> Result<()> {
    section(out, STATIC_PROPERTY)?;

    attach_shared_friends(heap, ctors.person_proto)?;
    let p1 = heap.construct(ctors.person_proto, &sander_rossel())?;
    let p2 = heap.construct(ctors.person_proto, &[Value::str("Bill"), Value::str("Gates")])?;

    let friends = friends_of(heap, p1)?.context("p1 に friends がありません")?;
    heap.list_push(friends, Value::Object(p2))?;

    for person in [p1, p2] {
        let friends = friends_of(heap, person)?.context("friends がありません")?;
        let friend = heap.list_get(friends, 0)?;
        let friend_name = heap.invoke(&friend, "fullName", &[])?;
        writeln!(out, "{friend_name} is a friend of {}", full_name(heap, person)?)?;
    }
    Ok(())
}

fn employee_args() -> Vec<Value> {
    vec![
        Value::str("Sander"),
        Value::str("Rossel"),
        Value::Number(1_000_000.0),
    ]
}

fn write_instance_checks<W: Write>(
    heap: &ObjectHeap,
    out: &mut W,
    label: &str,
    value: &Value,
    ctors: &[crate::core::ConstructorHandle],
) -> Result<()> {
    for ctor in ctors {
        if heap.instance_of(value, *ctor)? {
            writeln!(
                out,
                "{label} is an instance of {}.",
                heap.constructor_name(*ctor)?
            )?;
        }
    }
    Ok(())
}

pub fn inheritance<W: Write>(
    heap: &mut ObjectHeap,
    ctors: &PersonConstructors,
    out: &mut W,
) -> Result<()> {
    section(out, INHERITANCE)?;

    let e = Value::Object(heap.construct(ctors.employee, &employee_args())?);
    writeln!(out, "{}", heap.invoke(&e, "getSalary", &[])?)?;
    write_instance_checks(heap, out, "e", &e, &[ctors.employee, ctors.person_proto])
}

pub fn object_create<W: Write>(
    heap: &mut ObjectHeap,
    ctors: &PersonConstructors,
    out: &mut W,
) -> Result<()> {
    section(out, OBJECT_CREATE)?;

    let prototype = heap.prototype_of_constructor(ctors.person_proto)?;
    let o = heap.create(Some(prototype));
    heap.set(o, "firstName", Value::str("Sander"))?;
    heap.set(o, "lastName", Value::str("Rossel"))?;
    writeln!(out, "{}", full_name(heap, o)?)?;
    write_instance_checks(heap, out, "o", &Value::Object(o), &[ctors.person_proto])?;

    let e = Value::Object(heap.construct(ctors.employee2, &employee_args())?);
    writeln!(out, "{}", heap.invoke(&e, "getSalary", &[])?)?;
    write_instance_checks(heap, out, "e", &e, &[ctors.employee2, ctors.person_proto])
}

pub fn proto_pointer<W: Write>(heap: &mut ObjectHeap, out: &mut W) -> Result<()> {
    section(out, PROTO_POINTER)?;

    let p = heap.alloc_object();
    heap.set(p, "firstName", Value::str("Sander"))?;
    heap.set(p, "lastName", Value::str("Rossel"))?;

    if heap.get_prototype_of(p)? == Some(heap.object_root()) {
        writeln!(out, "__proto__ points to the constructors prototype.")?;
    }

    // ルートへの追加は全オブジェクトに影響する
    install_root_full_name(heap)?;
    writeln!(out, "{}", full_name(heap, p)?)?;
    heap.delete(p, "fullName")?;
    writeln!(out, "{}", full_name(heap, p)?)?;

    let i = Value::Number(10.0);
    let result = heap
        .invoke(&i, "fullName", &[])
        .context("i.fullName() に失敗しました")?;
    writeln!(out, "{result}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ObjectModelError;

    fn capture<F>(f: F) -> (Result<()>, String)
    where
        F: FnOnce(&mut ObjectHeap, &PersonConstructors, &mut Vec<u8>) -> Result<()>,
    {
        let mut heap = ObjectHeap::new();
        let ctors = register_person_constructors(&mut heap).unwrap();
        let mut out = Vec::new();
        let result = f(&mut heap, &ctors, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_invoke_context_output() {
        let (result, output) = capture(invoke_context);
        result.unwrap();
        assert_eq!(
            output,
            "\nExamples using invoke context.\nSander Rossel\nSander Rossel\nSander Rossel\n"
        );
    }

    #[test]
    fn test_delete_output() {
        let (result, output) = capture(delete_semantics);
        result.unwrap();
        assert_eq!(output, "\nExamples using delete.\nSander Rossel\nundefined\n");
    }

    #[test]
    fn test_static_property_output() {
        let (result, output) = capture(static_prototype_property);
        result.unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[2], "Bill Gates is a friend of Sander Rossel");
        assert_eq!(lines[3], "Bill Gates is a friend of Bill Gates");
    }

    #[test]
    fn test_inheritance_output() {
        let (result, output) = capture(inheritance);
        result.unwrap();
        let lines: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(
            lines,
            vec![
                "Sander Rossel earns 1000000",
                "e is an instance of Employee.",
                "e is an instance of PersonProto.",
            ]
        );
    }

    #[test]
    fn test_object_create_output() {
        let (result, output) = capture(object_create);
        result.unwrap();
        let lines: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(
            lines,
            vec![
                "Sander Rossel",
                "o is an instance of PersonProto.",
                "Sander Rossel earns 1000000",
                "e is an instance of Employee2.",
                "e is an instance of PersonProto.",
            ]
        );
    }

    #[test]
    fn test_proto_pointer_ends_with_capability_error() {
        let (result, output) = capture(|heap, _, out| proto_pointer(heap, out));
        let error = result.unwrap_err();
        assert_eq!(
            error.downcast_ref::<ObjectModelError>(),
            Some(&ObjectModelError::no_such_capability("number", "fullName"))
        );

        let lines: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(
            lines,
            vec![
                "__proto__ points to the constructors prototype.",
                "Sander Rossel",
                "Sander Rossel",
            ]
        );
    }
}
