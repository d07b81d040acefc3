//! See the [`Describe`] derive macro.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static DESCRIBE_ATTRIBUTE_NAME: &str = "describe";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Class Description Derivation
///
/// `#[derive(Describe)]` implements the following traits for a struct with
/// named fields (or a unit struct):
///
/// - `Typed`
/// - `Describe`
/// - `Value`
///
/// Every field becomes a data member, in declaration order. Each field type
/// must itself be describable, a primitive or another `Describe` type.
///
/// ## Class Name
///
/// The display name defaults to the struct's identifier:
///
/// ```rust, ignore
/// #[derive(Describe)]
/// #[describe(name = "Vec2")]
/// struct Point { x: i32, y: i32 }
/// ```
///
/// ## Member Functions
///
/// Methods are listed at the type level, after the members, in the given
/// order. `args(..)` names each parameter and must match the method's arity,
/// `name` overrides the display name:
///
/// ```rust, ignore
/// #[derive(Describe)]
/// #[describe(
///     function(length),
///     function(translate, args(dx, dy), name = "move"),
/// )]
/// struct Point { x: i32, y: i32 }
///
/// impl Point {
///     fn length(&self) -> i32 { /* ... */ }
///     fn translate(&mut self, dx: i32, dy: i32) { /* ... */ }
/// }
/// ```
///
/// ## Field Attributes
///
/// - `#[describe(rename = "...")]`: use another display name.
/// - `#[describe(skip)]`: leave the field out, its type is unconstrained.
///
/// ## Auto Register
///
/// `#[describe(auto_register)]` submits the type to
/// `TypeRegistry::auto_register`. It is ignored for generic types and when
/// the `auto_register` feature is disabled.
///
/// ## Generics
///
/// Generic structs are supported, every used field type gets a
/// `Value + Typed` bound and each instantiation caches its own descriptor.
#[proc_macro_derive(Describe, attributes(describe))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let derive_data = match derive_data::DescribeStruct::from_input(&ast) {
        Ok(data) => data,
        Err(err) => return err.into_compile_error().into(),
    };

    impls::impl_struct(&derive_data).into()
}
