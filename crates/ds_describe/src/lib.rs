#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    ds_cfg::define_alias! {
        #[cfg(feature = "auto_register")] => auto_register,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate as `ds_describe`, which must also resolve
// inside the crate itself.
extern crate self as ds_describe;

// -----------------------------------------------------------------------------
// Modules

mod describe;
mod value;

pub mod descriptor;
pub mod impls;
pub mod info;
pub mod registry;
pub mod serde;
pub mod serializer;

// -----------------------------------------------------------------------------
// Top-Level exports

pub mod __macro_exports;

pub use describe::{Describe, Object};
pub use ds_describe_derive as derive;
pub use value::{Value, ValueRef};
