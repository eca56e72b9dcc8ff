// 委譲モデルの振る舞いを公開APIから検証する

use prototype_bench::core::{FullName, ObjectModelError, ReceiverPolicy};
use prototype_bench::object_model::{derive_from, derive_with_create, empty_init, native, ObjectHeap, Value};
use prototype_bench::records::constructors::{attach_shared_friends, friends_of};
use prototype_bench::records::{register_person_constructors, ClosurePerson, DelegatedPerson, PersonPrototype};
use std::rc::Rc;

fn sander_rossel() -> Vec<Value> {
    vec![Value::str("Sander"), Value::str("Rossel")]
}

#[test]
fn test_closure_fidelity_after_mutation() {
    // 型付きレコード
    let person = ClosurePerson::new("Sander", "Rossel");
    person.set_first_name("Bill");
    assert_eq!(person.full_name().unwrap(), "Bill Rossel");

    // 動的ヒープ
    let mut heap = ObjectHeap::new();
    let ctors = register_person_constructors(&mut heap).unwrap();
    let p = heap.construct(ctors.person, &sander_rossel()).unwrap();
    heap.set(p, "firstName", Value::str("Bill")).unwrap();
    assert_eq!(
        heap.invoke(&Value::Object(p), "fullName", &[]).unwrap(),
        Value::str("Bill Rossel")
    );
}

#[test]
fn test_delegation_shadowing_and_restore() {
    let mut heap = ObjectHeap::new();
    let ctors = register_person_constructors(&mut heap).unwrap();
    let p1 = Value::Object(heap.construct(ctors.person_proto, &sander_rossel()).unwrap());
    let p2 = Value::Object(
        heap.construct(ctors.person_proto, &[Value::str("Bill"), Value::str("Gates")])
            .unwrap(),
    );
    let p1_handle = p1.as_object().unwrap();

    let override_fn = heap.alloc_function("fullName", native(|_, _, _| Ok(Value::str("override"))));
    heap.set(p1_handle, "fullName", Value::Function(override_fn)).unwrap();

    assert_eq!(heap.invoke(&p1, "fullName", &[]).unwrap(), Value::str("override"));
    assert_eq!(heap.invoke(&p2, "fullName", &[]).unwrap(), Value::str("Bill Gates"));

    heap.delete(p1_handle, "fullName").unwrap();
    assert_eq!(heap.invoke(&p1, "fullName", &[]).unwrap(), Value::str("Sander Rossel"));
}

#[test]
fn test_shared_container_leakage() {
    // 型付きレコード
    let prototype = PersonPrototype::new();
    let p1 = DelegatedPerson::new(&prototype, "Sander", "Rossel");
    let p2 = Rc::new(DelegatedPerson::new(&prototype, "Bill", "Gates"));
    p1.friends().borrow_mut().push(Rc::clone(&p2));
    assert_eq!(p2.friends().borrow().len(), 1);
    prototype.friends().borrow_mut().clear();

    // 動的ヒープ
    let mut heap = ObjectHeap::new();
    let ctors = register_person_constructors(&mut heap).unwrap();
    attach_shared_friends(&mut heap, ctors.person_proto).unwrap();
    let h1 = heap.construct(ctors.person_proto, &sander_rossel()).unwrap();
    let h2 = heap.construct(ctors.person_proto, &sander_rossel()).unwrap();

    let list = friends_of(&heap, h1).unwrap().unwrap();
    heap.list_push(list, Value::Object(h2)).unwrap();
    let seen_from_h2 = friends_of(&heap, h2).unwrap().unwrap();
    assert_eq!(heap.list_len(seen_from_h2).unwrap(), 1);
}

#[test]
fn test_chain_distinctness_for_both_strategies() {
    for strategy in [derive_from, derive_with_create] {
        let mut heap = ObjectHeap::new();
        let parent = heap.define_constructor("Parent", empty_init());
        let child = heap.define_constructor("Child", empty_init());
        strategy(&mut heap, child, parent).unwrap();

        heap.define_method(child, "childOnly", native(|_, _, _| Ok(Value::Bool(true))))
            .unwrap();

        let parent_instance = heap.construct(parent, &[]).unwrap();
        assert_eq!(heap.get(parent_instance, "childOnly").unwrap(), Value::Undefined);
    }
}

#[test]
fn test_identity_queries() {
    let mut heap = ObjectHeap::new();
    let ctors = register_person_constructors(&mut heap).unwrap();
    let args = [Value::str("Sander"), Value::str("Rossel"), Value::Number(1.0)];

    let e = Value::Object(heap.construct(ctors.employee, &args).unwrap());
    let p = Value::Object(heap.construct(ctors.person_proto, &args).unwrap());

    assert!(heap.instance_of(&e, ctors.employee).unwrap());
    assert!(heap.instance_of(&e, ctors.person_proto).unwrap());
    assert!(!heap.instance_of(&p, ctors.employee).unwrap());
    assert!(!heap.instance_of(&e, ctors.employee2).unwrap());
}

#[test]
fn test_delete_then_invoke_closure_bound() {
    let mut typed = ClosurePerson::new("Sander", "Rossel");
    typed.remove_full_name();
    assert!(typed.full_name().is_err());
    assert_eq!(typed.first_name(), "Sander");

    let mut heap = ObjectHeap::new();
    let ctors = register_person_constructors(&mut heap).unwrap();
    let p = heap.construct(ctors.person, &sander_rossel()).unwrap();
    heap.delete(p, "fullName").unwrap();

    assert_eq!(
        heap.invoke(&Value::Object(p), "fullName", &[]),
        Err(ObjectModelError::not_callable("fullName"))
    );
    assert_eq!(heap.get(p, "lastName").unwrap(), Value::str("Rossel"));
}

#[test]
fn test_detached_delegated_call_does_not_produce_full_name() {
    for policy in [ReceiverPolicy::Strict, ReceiverPolicy::Sloppy] {
        let mut heap = ObjectHeap::with_receiver_policy(policy);
        let ctors = register_person_constructors(&mut heap).unwrap();
        let p = heap.construct(ctors.person_proto, &sander_rossel()).unwrap();
        let detached = heap.get(p, "fullName").unwrap();

        match heap.call(&detached, None, &[]) {
            Ok(value) => {
                assert_eq!(policy, ReceiverPolicy::Sloppy);
                assert_eq!(value, Value::str("undefined undefined"));
            }
            Err(error) => {
                assert_eq!(policy, ReceiverPolicy::Strict);
                assert_eq!(error, ObjectModelError::detached_receiver("fullName"));
            }
        }
    }
}

#[test]
fn test_primitive_receiver_has_no_capability() {
    let mut heap = ObjectHeap::new();
    register_person_constructors(&mut heap).unwrap();

    for value in [Value::Number(10.0), Value::str("text"), Value::Bool(true)] {
        let error = heap.invoke(&value, "fullName", &[]).unwrap_err();
        assert!(matches!(error, ObjectModelError::NoSuchCapability { .. }));
    }
}
