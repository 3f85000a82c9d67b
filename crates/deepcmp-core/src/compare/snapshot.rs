//! JSON snapshots of inspected values, used as the payload of a [`Diff`].
//!
//! Structs become objects in declaration order, sequences become arrays and
//! maps become objects ordered by key label. A pointee already on the
//! rendering stack becomes `"<cycle>"`, and a present wrapper or pointer
//! around an absent value becomes `"<nil target>"` so it is not confused
//! with the absent value itself.
//!
//! [`Diff`]: crate::compare::Diff

use crate::inspect::{Indirect, Inspect, Shape};
use serde_json::{Map, Value};
use std::collections::HashSet;

pub(crate) const CYCLE_MARKER: &str = "<cycle>";
pub(crate) const BORROWED_MARKER: &str = "<borrowed>";
pub(crate) const NIL_TARGET_MARKER: &str = "<nil target>";

/// Render `value` as a JSON snapshot.
pub fn snapshot(value: &dyn Inspect) -> Value {
    Snapshotter::default().render(value)
}

#[derive(Default)]
struct Snapshotter {
    on_stack: HashSet<usize>,
}

impl Snapshotter {
    fn render(&mut self, value: &dyn Inspect) -> Value {
        match value.shape() {
            Shape::Primitive(leaf) => leaf.to_json(),
            Shape::Struct(fields) => {
                let mut object = Map::new();
                for name in fields.field_names() {
                    let rendered = fields
                        .field(name)
                        .map(|member| self.render(member))
                        .unwrap_or(Value::Null);
                    object.insert((*name).to_string(), rendered);
                }
                Value::Object(object)
            }
            Shape::Array(elements) | Shape::Slice(elements) => Value::Array(
                (0..elements.len())
                    .filter_map(|i| elements.element(i))
                    .map(|element| self.render(element))
                    .collect(),
            ),
            Shape::Map(entries) => {
                let mut sorted = entries.entries();
                sorted.sort_by(|a, b| a.label.cmp(&b.label));
                let mut object = Map::new();
                for entry in sorted {
                    let rendered = self.render(entry.value);
                    object.insert(entry.label, rendered);
                }
                Value::Object(object)
            }
            Shape::Pointer(pointer) => {
                let addr = pointer.address();
                if let Some(addr) = addr {
                    if !self.on_stack.insert(addr) {
                        return Value::String(CYCLE_MARKER.to_string());
                    }
                }
                let rendered = self.render_target(pointer, true);
                if let Some(addr) = addr {
                    self.on_stack.remove(&addr);
                }
                rendered
            }
            Shape::Present(present) => self.render_target(present, true),
            Shape::Cell(cell) => self.render_target(cell, false),
            Shape::Absent => Value::Null,
            Shape::Opaque => Value::String(format!("<{}>", value.type_info().name())),
        }
    }

    fn render_target(&mut self, indirect: &dyn Indirect, mark_nil: bool) -> Value {
        let mut rendered = Value::String(BORROWED_MARKER.to_string());
        indirect.visit(&mut |target| {
            rendered = if mark_nil && matches!(target.shape(), Shape::Absent) {
                Value::String(NIL_TARGET_MARKER.to_string())
            } else {
                self.render(target)
            };
        });
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_snapshot_primitives() {
        assert_eq!(snapshot(&3_i32), json!(3));
        assert_eq!(snapshot(&"abc".to_string()), json!("abc"));
        assert_eq!(snapshot(&Option::<u8>::None), Value::Null);
    }

    #[test]
    fn test_snapshot_map_orders_by_label() {
        let mut map = HashMap::new();
        map.insert("b".to_string(), 2_u8);
        map.insert("a".to_string(), 1_u8);
        let rendered = serde_json::to_string(&snapshot(&map)).unwrap();
        assert_eq!(rendered, r#"{"a":1,"b":2}"#);
    }

    #[test]
    fn test_snapshot_present_nil_is_marked() {
        assert_eq!(snapshot(&Some(None::<u8>)), json!("<nil target>"));
        assert_eq!(snapshot(&Box::new(None::<u8>)), json!("<nil target>"));
        assert_eq!(snapshot(&Some(Some(4_u8))), json!(4));
        assert_eq!(snapshot(&std::cell::RefCell::new(None::<u8>)), Value::Null);
    }

    #[test]
    fn test_snapshot_zero_sized_pointees_are_not_cycles() {
        let value: Vec<Box<()>> = vec![Box::new(()), Box::new(())];
        assert_eq!(snapshot(&value), json!([null, null]));
    }

    #[test]
    fn test_snapshot_nested_pointers() {
        let value: Vec<Box<u8>> = vec![Box::new(1), Box::new(2)];
        assert_eq!(snapshot(&value), json!([1, 2]));
    }
}
