use crate::descriptor::ClassDescriptor;
use crate::info::{ClassInfo, Typed};
use crate::Value;

// -----------------------------------------------------------------------------
// Describe

/// A class with a static descriptor table.
///
/// Usually implemented by [`#[derive(Describe)]`](crate::derive::Describe).
/// The descriptor is built once, on first access, and never changes.
///
/// # Examples
///
/// ```
/// use ds_describe::{Describe, derive::Describe};
///
/// #[derive(Describe)]
/// #[describe(name = "Vec2", function(length_squared))]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Point {
///     fn length_squared(&self) -> i32 {
///         self.x * self.x + self.y * self.y
///     }
/// }
///
/// let descriptor = Point::class_descriptor();
/// let mut p = Point { x: 3, y: 4 };
///
/// assert_eq!(descriptor.name(), "Vec2");
/// assert_eq!(descriptor.len(), 3);
/// assert_eq!(descriptor.get::<i32>(&p, "y"), Ok(&4));
/// assert_eq!(descriptor.invoke::<(), i32>(&mut p, "length_squared", ()), Ok(25));
/// ```
///
/// # Rejected input
///
/// Only structs with named fields, or no fields, can be derived:
///
/// ```compile_fail
/// use ds_describe::derive::Describe;
///
/// #[derive(Describe)]
/// struct Pair(i32, i32);
/// ```
///
/// ```compile_fail
/// use ds_describe::derive::Describe;
///
/// #[derive(Describe)]
/// enum Mode {
///     On,
///     Off,
/// }
/// ```
///
/// A listed function needs one argument name per parameter:
///
/// ```compile_fail
/// use ds_describe::derive::Describe;
///
/// #[derive(Describe)]
/// #[describe(function(translate, args(dx)))]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Point {
///     fn translate(&mut self, dx: i32, dy: i32) {
///         self.x += dx;
///         self.y += dy;
///     }
/// }
/// ```
pub trait Describe: Typed + Sized {
    /// Returns the descriptor table of `Self`.
    fn class_descriptor() -> &'static ClassDescriptor<Self>;
}

// -----------------------------------------------------------------------------
// Object

/// Object-safe view of a described class instance.
///
/// Implemented for every type that implements both [`Describe`] and [`Value`].
pub trait Object: Value {
    /// Returns the [`ClassInfo`] of the concrete class.
    fn class_info(&self) -> &'static ClassInfo;

    /// Returns the value of the entry at `index`.
    ///
    /// Returns `None` for functions and for out-of-range indices.
    fn member_value(&self, index: usize) -> Option<&dyn Value>;
}

impl<T: Describe + Value> Object for T {
    #[inline]
    fn class_info(&self) -> &'static ClassInfo {
        T::class_descriptor().info()
    }

    #[inline]
    fn member_value(&self, index: usize) -> Option<&dyn Value> {
        T::class_descriptor().entry_at(index)?.member_value(self)
    }
}
