//! Runtime type descriptors.
//!
//! A value takes part in a comparison by implementing [`Inspect`], which
//! exposes a borrowed [`Shape`] view of itself. The comparator never sees
//! concrete types; it only walks shapes and checks [`TypeInfo`] identity.
//!
//! Standard library types are covered in `std_impls`. User structs are
//! described with [`inspect_struct!`](crate::inspect_struct) and user leaf
//! types (typically enums) with [`inspect_leaf!`](crate::inspect_leaf).

mod macros;
mod std_impls;

use serde::Serialize;
use serde_json::Value;
use std::any::{Any, TypeId};
use std::fmt;

/// Runtime identity of a type: its `TypeId` plus a name for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Identity and upcasting support, implemented for every [`Inspect`] type.
///
/// Calls through `&dyn Inspect` dispatch to the concrete type, so
/// `type_info` reports the runtime type even behind a `Box<dyn Inspect>`.
pub trait Typed {
    fn type_info(&self) -> TypeInfo;
    fn as_any(&self) -> &dyn Any;
    fn as_inspect(&self) -> &dyn Inspect;
}

impl<T: Inspect> Typed for T {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }
}

/// A value whose structure can be walked by the comparator.
pub trait Inspect: Typed + 'static {
    /// Borrowed structural view of this value.
    fn shape(&self) -> Shape<'_>;
}

/// Structural classification of a value.
pub enum Shape<'a> {
    /// Compared by deep value equality.
    Primitive(&'a dyn Leaf),
    /// Named members in declaration order.
    Struct(&'a dyn Fields),
    /// Fixed-length sequence; never absent.
    Array(&'a dyn Elements),
    /// Variable-length sequence.
    Slice(&'a dyn Elements),
    /// Keyed entries.
    Map(&'a dyn Entries),
    /// An indirection with an identity, subject to the cycle guard.
    Pointer(&'a dyn Indirect),
    /// Interior-mutability wrapper; compared as its content, at the same path.
    Cell(&'a dyn Indirect),
    /// The present value of a nilable wrapper; compared as its content, at
    /// the same path. Its content may itself be absent.
    Present(&'a dyn Indirect),
    /// The nil value of a nilable kind.
    Absent,
    /// A value that exposes no structure.
    Opaque,
}

impl Shape<'_> {
    /// Short classification name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Primitive(_) => "primitive",
            Shape::Struct(_) => "struct",
            Shape::Array(_) => "array",
            Shape::Slice(_) => "slice",
            Shape::Map(_) => "map",
            Shape::Pointer(_) => "pointer",
            Shape::Cell(_) => "cell",
            Shape::Present(_) => "present",
            Shape::Absent => "absent",
            Shape::Opaque => "opaque",
        }
    }
}

/// Leaf comparison and snapshotting.
///
/// Implemented for every `PartialEq + Debug + Serialize` type, so a leaf
/// type only needs an [`Inspect`] impl returning [`Shape::Primitive`].
pub trait Leaf {
    fn leaf_any(&self) -> &dyn Any;

    /// Deep value equality; false when `other` is a different type.
    fn leaf_eq(&self, other: &dyn Leaf) -> bool;

    /// JSON snapshot of the value.
    fn to_json(&self) -> Value;
}

impl<T> Leaf for T
where
    T: PartialEq + fmt::Debug + Serialize + 'static,
{
    fn leaf_any(&self) -> &dyn Any {
        self
    }

    fn leaf_eq(&self, other: &dyn Leaf) -> bool {
        other
            .leaf_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::String(format!("{:?}", self)))
    }
}

/// Named members of a struct.
pub trait Fields {
    /// Visible member names in declaration order.
    fn field_names(&self) -> &[&'static str];

    /// Resolve a member by name.
    fn field(&self, name: &str) -> Option<&dyn Inspect>;
}

/// Indexed elements of an array or slice.
pub trait Elements {
    fn len(&self) -> usize;

    fn element(&self, index: usize) -> Option<&dyn Inspect>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One entry of a map, as seen by the comparator.
pub struct Entry<'a> {
    /// Textual form of the key; used in field paths and for ordering.
    ///
    /// Distinct keys with equal labels produce equal paths. The comparator
    /// sorts stably, so such keys keep the map's iteration order: key order
    /// for a `BTreeMap`, unspecified for a `HashMap`.
    pub label: String,
    /// The key itself, for lookups on the other side.
    pub key: &'a dyn Any,
    pub value: &'a dyn Inspect,
}

/// Keyed entries of a map.
pub trait Entries {
    fn len(&self) -> usize;

    /// All entries, in the map's own iteration order.
    fn entries(&self) -> Vec<Entry<'_>>;

    /// Look up the value stored under `key`, which is a key of the same map type.
    fn lookup(&self, key: &dyn Any) -> Option<&dyn Inspect>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A reference to a target value.
///
/// Targets are only lent to a visitor, which lets guarded containers
/// (`RefCell`, `Weak`) hand out access for the duration of the call.
pub trait Indirect {
    /// Identity of the target: its thin address. `None` for zero-sized
    /// targets, which share addresses and cannot close a cycle.
    fn address(&self) -> Option<usize>;

    /// Run `f` on the target. Returns false, without calling `f`, if the
    /// target cannot be reached.
    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool;
}

/// Identity of a possibly unsized target.
pub(crate) fn address_of<T: ?Sized>(target: &T) -> Option<usize> {
    (std::mem::size_of_val(target) != 0).then(|| (target as *const T).cast::<()>() as usize)
}

/// Identity of a sized target known only by raw pointer.
pub(crate) fn raw_address_of<T>(target: *const T) -> Option<usize> {
    (std::mem::size_of::<T>() != 0).then(|| target.cast::<()>() as usize)
}
