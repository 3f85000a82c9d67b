use super::{address_of, raw_address_of, Elements, Entries, Entry, Indirect, Inspect, Shape};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::rc::{self, Rc};
use std::sync::Arc;

crate::inspect_leaf!(
    bool, char, (), String, &'static str, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

impl<T: Inspect, const N: usize> Elements for [T; N] {
    fn len(&self) -> usize {
        N
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|v| v as &dyn Inspect)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(self)
    }
}

impl<T: Inspect> Elements for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|v| v as &dyn Inspect)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(self)
    }
}

impl<T: Inspect> Elements for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|v| v as &dyn Inspect)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(self)
    }
}

impl<T: Inspect> Elements for &'static [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn element(&self, index: usize) -> Option<&dyn Inspect> {
        self.get(index).map(|v| v as &dyn Inspect)
    }
}

impl<T: Inspect> Inspect for &'static [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Slice(self)
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

impl<K, V, S> Entries for HashMap<K, V, S>
where
    K: Eq + Hash + Display + 'static,
    V: Inspect,
    S: BuildHasher + 'static,
{
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries(&self) -> Vec<Entry<'_>> {
        self.iter()
            .map(|(k, v)| Entry {
                label: k.to_string(),
                key: k,
                value: v,
            })
            .collect()
    }

    fn lookup(&self, key: &dyn Any) -> Option<&dyn Inspect> {
        key.downcast_ref::<K>()
            .and_then(|k| self.get(k))
            .map(|v| v as &dyn Inspect)
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: Eq + Hash + Display + 'static,
    V: Inspect,
    S: BuildHasher + 'static,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }
}

impl<K, V> Entries for BTreeMap<K, V>
where
    K: Ord + Display + 'static,
    V: Inspect,
{
    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries(&self) -> Vec<Entry<'_>> {
        self.iter()
            .map(|(k, v)| Entry {
                label: k.to_string(),
                key: k,
                value: v,
            })
            .collect()
    }

    fn lookup(&self, key: &dyn Any) -> Option<&dyn Inspect> {
        key.downcast_ref::<K>()
            .and_then(|k| self.get(k))
            .map(|v| v as &dyn Inspect)
    }
}

impl<K, V> Inspect for BTreeMap<K, V>
where
    K: Ord + Display + 'static,
    V: Inspect,
{
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }
}

// ---------------------------------------------------------------------------
// Pointers
// ---------------------------------------------------------------------------

impl<T: Inspect + ?Sized> Indirect for Box<T> {
    fn address(&self) -> Option<usize> {
        address_of(&**self)
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        f((**self).as_inspect());
        true
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self)
    }
}

impl<T: Inspect + ?Sized> Indirect for Rc<T> {
    fn address(&self) -> Option<usize> {
        address_of(&**self)
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        f((**self).as_inspect());
        true
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self)
    }
}

impl<T: Inspect + ?Sized> Indirect for Arc<T> {
    fn address(&self) -> Option<usize> {
        address_of(&**self)
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        f((**self).as_inspect());
        true
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self)
    }
}

impl<T: Inspect + ?Sized> Indirect for &'static T {
    fn address(&self) -> Option<usize> {
        address_of(*self)
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        f((**self).as_inspect());
        true
    }
}

impl<T: Inspect + ?Sized> Inspect for &'static T {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self)
    }
}

impl<T: Inspect> Indirect for rc::Weak<T> {
    fn address(&self) -> Option<usize> {
        raw_address_of(self.as_ptr())
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        match self.upgrade() {
            Some(target) => {
                f(&*target);
                true
            }
            None => false,
        }
    }
}

/// A dangling `Weak` is the absent value.
impl<T: Inspect> Inspect for rc::Weak<T> {
    fn shape(&self) -> Shape<'_> {
        if self.strong_count() == 0 {
            Shape::Absent
        } else {
            Shape::Pointer(self)
        }
    }
}

// ---------------------------------------------------------------------------
// Nilable and cells
// ---------------------------------------------------------------------------

impl<T: Inspect> Indirect for Option<T> {
    fn address(&self) -> Option<usize> {
        None
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        match self {
            Some(value) => {
                f(value);
                true
            }
            None => false,
        }
    }
}

/// `Some` is a layer of its own, so `Some(None)` is present while `None` is absent.
impl<T: Inspect> Inspect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(_) => Shape::Present(self),
            None => Shape::Absent,
        }
    }
}

impl<T: Inspect> Indirect for RefCell<T> {
    fn address(&self) -> Option<usize> {
        raw_address_of(self.as_ptr())
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        match self.try_borrow() {
            Ok(guard) => {
                f(&*guard);
                true
            }
            Err(_) => false,
        }
    }
}

impl<T: Inspect> Inspect for RefCell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Cell(self)
    }
}

impl<T: Inspect + Copy> Indirect for Cell<T> {
    fn address(&self) -> Option<usize> {
        raw_address_of(self.as_ptr())
    }

    fn visit(&self, f: &mut dyn FnMut(&dyn Inspect)) -> bool {
        let value = self.get();
        f(&value);
        true
    }
}

impl<T: Inspect + Copy> Inspect for Cell<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Cell(self)
    }
}
