//! A runtime registry of [`TypeInfo`](crate::info::TypeInfo).
//!
//! Registering a class also registers every member and argument type it
//! reaches, so a registry built from a few root classes can answer lookups
//! for the whole type graph.
//!
//! ## Auto Register
//!
//! With the `auto_register` feature, classes annotated with
//! `#[describe(auto_register)]` are collected through the [`inventory`]
//! crate and registered by [`TypeRegistry::auto_register`].
//!
//! Platforms unsupported by `inventory` register nothing, in that case
//! `auto_register` returns `false`.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_registry::{TypeRegistry, TypeRegistryArc};
