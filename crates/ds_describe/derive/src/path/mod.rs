//! This independent module is used to provide the required paths.
//! So as to minimize changes when the `ds_describe` structure is modified.
//!
//! The only special feature is the path of ds_describe itself,
//! See [`ds_describe`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `ds_describe` crate.
///
/// Not all crates can name `ds_describe` directly, the builder's `Cargo.toml`
/// is scanned:
///
/// 1. For crates that depend on `ds_describe`, `::ds_describe` is returned.
/// 2. For crates that depend on `descry`, `::descry::describe` is returned.
/// 3. For crates that depend on `ds_core`, `::ds_core::describe` is returned.
/// 4. For crates that depend on `ds`, `::ds::describe` is returned.
/// 5. Otherwise `::ds_describe` is returned, which may be incorrect.
///
/// The cost of this function is relatively high (reading files, taking a
/// lock), so the path is obtained once per derive and passed around.
pub(crate) fn ds_describe() -> syn::Path {
    ds_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("ds_describe"))
}

// -----------------------------------------------------------------------------
// Modules

mod cell;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use cell::*;

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn typed_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn describe_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::Describe
    }
}

#[inline(always)]
pub(crate) fn value_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::Value
    }
}

#[inline(always)]
pub(crate) fn value_ref_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::ValueRef
    }
}

#[inline(always)]
pub(crate) fn class_descriptor_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::descriptor::ClassDescriptor
    }
}

#[inline(always)]
pub(crate) fn descriptor_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::descriptor::Descriptor
    }
}

#[inline(always)]
pub(crate) fn member_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::member
    }
}
