//! Typed, host-owned storage that arguments write into.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared handle to a value owned by the host program.
///
/// Cloning a slot clones the handle, not the value: the host keeps one clone,
/// hands another to an [`Argument`](super::Argument), and reads the result
/// after parsing.
pub struct Slot<T>(Rc<RefCell<T>>);

impl<T> Slot<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(value)))
    }

    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = value;
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow())
    }
}

impl<T: Clone> Slot<T> {
    pub fn get(&self) -> T {
        self.0.borrow().clone()
    }
}

impl<T> Clone for Slot<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for Slot<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Slot").field(&self.0.borrow()).finish()
    }
}

/// Value kinds an argument can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    Integer,
    Float,
    Str,
}

/// Where a matched argument writes its value.
#[derive(Debug, Clone)]
pub enum Destination {
    Bool(Slot<bool>),
    Integer(Slot<i64>),
    Float(Slot<f64>),
    Str(Slot<Option<String>>),
}

impl Destination {
    pub fn value_type(&self) -> ValueType {
        match self {
            Destination::Bool(_) => ValueType::Bool,
            Destination::Integer(_) => ValueType::Integer,
            Destination::Float(_) => ValueType::Float,
            Destination::Str(_) => ValueType::Str,
        }
    }
}

impl From<Slot<bool>> for Destination {
    fn from(slot: Slot<bool>) -> Self {
        Destination::Bool(slot)
    }
}

impl From<Slot<i64>> for Destination {
    fn from(slot: Slot<i64>) -> Self {
        Destination::Integer(slot)
    }
}

impl From<Slot<f64>> for Destination {
    fn from(slot: Slot<f64>) -> Self {
        Destination::Float(slot)
    }
}

impl From<Slot<Option<String>>> for Destination {
    fn from(slot: Slot<Option<String>>) -> Self {
        Destination::Str(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_clones_share_storage() {
        let host = Slot::new(0i64);
        let registered = host.clone();
        registered.set(5);
        assert_eq!(host.get(), 5);
    }

    #[test]
    fn test_destination_reports_value_type() {
        assert_eq!(
            Destination::from(Slot::<bool>::default()).value_type(),
            ValueType::Bool
        );
        assert_eq!(
            Destination::from(Slot::<Option<String>>::default()).value_type(),
            ValueType::Str
        );
    }
}
