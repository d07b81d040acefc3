//! Static storage cells and the primitive implementations.
//!
//! - [`NonGenericTypeInfoCell`]: used to implement [`Typed`] for non-generic types.
//! - [`GenericTypeInfoCell`]: used to implement [`Typed`] for generic types.
//! - [`NonGenericDescriptorCell`]: used to implement [`Describe`] for non-generic types.
//! - [`GenericDescriptorCell`]: used to implement [`Describe`] for generic types.
//!
//! ## Implemented Menu
//!
//! - `Int`: `i8`-`i128`, `isize`, `u8`-`u64`, `usize`
//! - `Bool`: `bool`
//! - `Char`: `char`
//! - `String`: `String`, `&'static str`, `Box<str>`, `Cow<'static, str>`
//!
//! [`Typed`]: crate::info::Typed
//! [`Describe`]: crate::Describe

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod primitives;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericDescriptorCell, GenericTypeInfoCell};
pub use cell::{NonGenericDescriptorCell, NonGenericTypeInfoCell};
