//! Cycle guard scenarios over `Rc<RefCell<..>>` linked nodes.

mod common;

use common::{link, node, ring, self_loop, Node};
use deepcmp_core::errors::ExErrorKind;
use deepcmp_core::{compare, Diff};
use serde_json::json;
use std::rc::{Rc, Weak};

#[test]
fn test_self_loops_terminate_and_are_equal() {
    let expected = self_loop("a");
    let actual = self_loop("a");
    assert_eq!(compare(&expected, &actual).unwrap(), Vec::<Diff>::new());
}

#[test]
fn test_value_compared_with_itself_terminates() {
    let value = ring("a", "b");
    assert!(compare(&value, &value).unwrap().is_empty());
}

#[test]
fn test_rings_report_diff_before_cycle_closes() {
    let expected = ring("a", "b");
    let actual = ring("a", "c");

    let diffs = compare(&expected, &actual).unwrap();
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].field, "*(*().next).name");
    assert_eq!(diffs[0].expected, json!("b"));
    assert_eq!(diffs[0].actual, json!("c"));
}

#[test]
fn test_cycle_against_terminated_chain_is_cut_by_expected_side_guard() {
    // expected: a -> a -> ..., actual: a -> a' (end)
    let expected = self_loop("a");
    let actual = node("a");
    let tail = node("a");
    link(&actual, &tail);

    let diffs = compare(&expected, &actual).unwrap();
    // The expected side cycles back to an entered pointer, so the second
    // hop is cut short before reaching the absent `next` of `tail`.
    assert!(diffs.is_empty());
}

#[test]
fn test_shared_subtree_is_entered_once() {
    let shared = node("leaf");
    let expected = vec![Rc::clone(&shared), Rc::clone(&shared)];
    let actual = vec![node("leaf"), node("other")];

    // The second element aliases the first on the expected side, so its
    // subtree is treated as already compared.
    assert!(compare(&expected, &actual).unwrap().is_empty());
}

#[test]
fn test_diff_snapshot_of_cycle_is_finite() {
    let expected: Option<Rc<Node>> = None;
    let actual = Some(self_loop("a"));

    let diffs = compare(&expected, &actual).unwrap();
    assert_eq!(diffs.len(), 1);
    assert_eq!(
        diffs[0].actual,
        json!({"name": "a", "next": "<cycle>"})
    );
}

#[test]
fn test_guard_state_is_not_shared_between_calls() {
    let expected = self_loop("a");
    let actual = self_loop("b");

    for _ in 0..3 {
        let diffs = compare(&expected, &actual).unwrap();
        assert_eq!(diffs, vec![Diff::new("*().name", json!("a"), json!("b"))]);
    }
}

struct Parent {
    name: String,
    child: Rc<Child>,
}

struct Child {
    name: String,
    parent: Weak<Parent>,
}

deepcmp_core::inspect_struct!(Parent { name, child });
deepcmp_core::inspect_struct!(Child { name, parent });

fn family(parent: &str, child: &str) -> Rc<Parent> {
    Rc::new_cyclic(|me| Parent {
        name: parent.to_string(),
        child: Rc::new(Child {
            name: child.to_string(),
            parent: me.clone(),
        }),
    })
}

#[test]
fn test_weak_back_references_terminate() {
    let expected = family("p", "c");
    let actual = family("p", "c2");

    let diffs = compare(&expected, &actual).unwrap();
    assert_eq!(diffs, vec![Diff::new("*(*().child).name", json!("c"), json!("c2"))]);
}

#[test]
fn test_borrowed_link_is_invalid_type() {
    let expected = self_loop("a");
    let actual = self_loop("a");
    let _guard = actual.next.borrow_mut();

    let err = compare(&expected, &actual).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::InvalidType);
    assert_eq!(err.field(), "*().next");
}
