//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`Type`]: a `TypeId` together with the type's path.
//! - [`TypeInfo`]: either a [`PrimitiveInfo`] or a [`ClassInfo`].
//!     - [`PrimitiveInfo`]: a primitive type and its [`PrimitiveKind`].
//!     - [`ClassInfo`]: a described class, its display name and its entries.
//! - [`EntryInfo`]: one entry of a class, a [`MemberInfo`] or a [`FunctionInfo`].
//!     - [`ArgumentInfo`]: one parameter of a [`FunctionInfo`].
//! - Kind:
//!     - [`PrimitiveKind`]: the closed set `Char`, `Int`, `Bool` and `String`.
//!     - [`DescribeKind`]: `Primitive` or `Class`.
//!     - [`EntryKind`]: `Member` or `Function`.
//! - [`Typed`]: a trait for obtaining `TypeInfo` without an instance.
//! - [`DynamicTyped`]: dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod kind;
mod ty;
mod type_info;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::{ArgumentInfo, ClassInfo, EntryInfo, FunctionInfo, MemberInfo};
pub use kind::{DescribeKind, DescribeKindError, EntryKind, PrimitiveKind};
pub use ty::Type;
pub use type_info::{PrimitiveInfo, TypeInfo};
pub use typed::{DynamicTyped, Typed};
