use core::any::Any;
use core::fmt;

use crate::Object;
use crate::info::{DynamicTyped, PrimitiveKind};

// -----------------------------------------------------------------------------
// Value

/// A type-erased value that can be serialized.
///
/// Implemented for the primitive types and by
/// [`#[derive(Describe)]`](crate::derive::Describe). A member whose type does
/// not implement `Value` cannot be described.
///
/// # Examples
///
/// ```
/// use ds_describe::{Value, ValueRef};
///
/// let value: &dyn Value = &String::from("text");
///
/// assert!(matches!(value.value_ref(), ValueRef::String("text")));
/// assert!(value.as_any().is::<String>());
/// ```
pub trait Value: DynamicTyped + Any {
    /// Returns a borrowed view of the value.
    fn value_ref(&self) -> ValueRef<'_>;

    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Value {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcasts to the concrete type `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl fmt::Debug for dyn Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.value_ref(), f)
    }
}

// -----------------------------------------------------------------------------
// ValueRef

/// A borrowed view of a [`Value`].
///
/// All integer widths are widened to `i128`, all string types are
/// borrowed as `&str`.
#[derive(Clone, Copy)]
pub enum ValueRef<'a> {
    Char(char),
    Int(i128),
    Bool(bool),
    String(&'a str),
    Object(&'a dyn Object),
}

impl ValueRef<'_> {
    /// Returns the [`PrimitiveKind`], or `None` for objects.
    pub const fn primitive_kind(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Char(_) => Some(PrimitiveKind::Char),
            Self::Int(_) => Some(PrimitiveKind::Int),
            Self::Bool(_) => Some(PrimitiveKind::Bool),
            Self::String(_) => Some(PrimitiveKind::String),
            Self::Object(_) => None,
        }
    }
}

impl fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(v) => fmt::Debug::fmt(v, f),
            Self::Int(v) => fmt::Debug::fmt(v, f),
            Self::Bool(v) => fmt::Debug::fmt(v, f),
            Self::String(v) => fmt::Debug::fmt(v, f),
            Self::Object(object) => {
                let info = object.class_info();
                let mut debug = f.debug_struct(info.name());
                for (index, entry) in info.iter().enumerate() {
                    if let Some(value) = object.member_value(index) {
                        debug.field(entry.name(), &value);
                    }
                }
                debug.finish()
            }
        }
    }
}
