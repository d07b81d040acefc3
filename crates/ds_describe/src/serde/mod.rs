//! A bridge from described values to `serde`.
//!
//! [`SerializeDriver`] implements [`serde::Serialize`](serde_core::Serialize)
//! for any [`Value`](crate::Value), so every serde data format can stand in
//! for a [`FormatSupplier`](crate::serializer::FormatSupplier).
//!
//! | value      | serde data model                     |
//! |------------|--------------------------------------|
//! | char       | `char`                               |
//! | integer    | `i64`, else `u64`, else `i128`       |
//! | bool       | `bool`                               |
//! | string     | `str`                                |
//! | object     | `struct` named after the class       |
//!
//! Functions are skipped. Deserialization is not provided.

// -----------------------------------------------------------------------------
// Modules

mod driver;

// -----------------------------------------------------------------------------
// Exports

pub use driver::SerializeDriver;
