//! Format-agnostic serialization driven by class descriptors.
//!
//! A [`Serializer`] walks a value, or a type's structure, and asks its
//! [`FormatSupplier`] for every piece of literal syntax. Swapping the supplier
//! changes the output format and nothing else.
//!
//! - [`JsonFormat`]: compact JSON, the default.
//! - [`PlainFormat`]: human readable text, `{x = 3, y = 4}`.
//!
//! # Modes
//!
//! - Value mode, [`Serializer::serialize`]: member names and their values.
//! - Structure mode, [`Serializer::serialize_structure`]: member names and
//!   type tags, no instance required.
//! - Extended structure mode, [`Serializer::serialize_structure_extended`]:
//!   the class name, its members and its functions with their arguments.
//!
//! Functions never contribute to value output.
//!
//! # Examples
//!
//! ```
//! use ds_describe::derive::Describe;
//! use ds_describe::serializer::{PlainFormat, Serializer};
//!
//! #[derive(Describe)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let p = Point { x: 3, y: 4 };
//!
//! assert_eq!(Serializer::default().to_string(&p), r#"{"x":3,"y":4}"#);
//! assert_eq!(Serializer::new(PlainFormat).to_string(&p), "{x = 3, y = 4}");
//! assert_eq!(
//!     Serializer::default().structure_to_string::<Point>(),
//!     r#"{"x":"INT","y":"INT"}"#,
//! );
//! ```
//!
//! Only values and types that can be described are accepted:
//!
//! ```compile_fail
//! use ds_describe::serializer::Serializer;
//!
//! let _ = Serializer::default().to_string(&1.5_f32);
//! ```
//!
//! ```compile_fail
//! use ds_describe::serializer::Serializer;
//!
//! struct Opaque;
//!
//! let _ = Serializer::default().structure_to_string::<Opaque>();
//! ```

// -----------------------------------------------------------------------------
// Modules

mod format;
mod json;
mod plain;
mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use format::FormatSupplier;
pub use json::JsonFormat;
pub use plain::PlainFormat;
pub use serializer::Serializer;
