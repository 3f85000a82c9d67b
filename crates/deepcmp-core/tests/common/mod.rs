#![allow(dead_code)]

use deepcmp_core::inspect::Inspect;
use deepcmp_core::{inspect_leaf, inspect_struct};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Sample rate classification used as an enum leaf
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Quality {
    Low,
    Standard,
    High,
}

inspect_leaf!(Quality);

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

inspect_struct!(Point { x, y });

/// Nested record covering every structural kind the comparator handles
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub quality: Quality,
    pub tags: Vec<String>,
    pub scores: BTreeMap<String, i64>,
    pub origin: [Point; 2],
    pub meta: Option<Box<Point>>,
}

inspect_struct!(Record {
    id,
    name,
    quality,
    tags,
    scores,
    origin,
    meta,
});

/// Build a fully populated record
pub fn sample_record() -> Record {
    Record {
        id: 7,
        name: "intro".to_string(),
        quality: Quality::Standard,
        tags: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        scores: BTreeMap::from([("left".to_string(), 1), ("right".to_string(), 2)]),
        origin: [Point { x: 0, y: 0 }, Point { x: 1, y: 1 }],
        meta: Some(Box::new(Point { x: 5, y: 6 })),
    }
}

/// Node of a possibly cyclic singly linked list
pub struct Node {
    pub name: String,
    pub next: RefCell<Option<Rc<Node>>>,
}

inspect_struct!(Node { name, next });

/// Create an unlinked node
pub fn node(name: &str) -> Rc<Node> {
    Rc::new(Node {
        name: name.to_string(),
        next: RefCell::new(None),
    })
}

/// Point `from.next` at `to`
pub fn link(from: &Rc<Node>, to: &Rc<Node>) {
    *from.next.borrow_mut() = Some(Rc::clone(to));
}

/// A node whose `next` points back to itself
pub fn self_loop(name: &str) -> Rc<Node> {
    let n = node(name);
    link(&n, &n);
    n
}

/// A two-node ring: first -> second -> first
pub fn ring(first: &str, second: &str) -> Rc<Node> {
    let a = node(first);
    let b = node(second);
    link(&a, &b);
    link(&b, &a);
    a
}

/// Value with no introspectable structure
pub struct Handle(pub u64);

impl Inspect for Handle {
    fn shape(&self) -> deepcmp_core::Shape<'_> {
        deepcmp_core::Shape::Opaque
    }
}
