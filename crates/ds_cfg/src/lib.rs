//! Macros that turn `cfg` predicates into item-like switches.
//!
//! A crate declares its aliases once with [`define_alias!`], then uses the
//! generated macros wherever it would otherwise repeat `#[cfg(...)]`:
//!
//! ```
//! mod cfg {
//!     ds_cfg::define_alias! {
//!         #[cfg(debug_assertions)] => debug,
//!         #[cfg(feature = "never_enabled")] => never,
//!     }
//! }
//!
//! cfg::never! {
//!     compile_error!("suppressed");
//! }
//!
//! fn is_debug() -> bool {
//!     cfg::debug!()
//! }
//!
//! let level = cfg::never! {
//!     if { 1 } else { 2 }
//! };
//!
//! assert_eq!(level, 2);
//! assert_eq!(is_debug(), cfg!(debug_assertions));
//! ```
#![no_std]

/// Passes the provided tokens through.
///
/// - `enabled!()` evaluates to `true`.
/// - `enabled! { if { .. } else { .. } }` keeps the first branch.
/// - `enabled! { .. }` keeps everything.
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Suppresses the provided tokens.
///
/// - `disabled!()` evaluates to `false`.
/// - `disabled! { if { .. } else { .. } }` keeps the second branch.
/// - `disabled! { .. }` removes everything.
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Defines one alias macro per `cfg` predicate.
///
/// The predicate is evaluated in the crate that invokes this macro, so
/// `#[cfg(feature = "..")]` refers to that crate's own features.
///
/// Each alias behaves as [`enabled!`] when its predicate holds and as
/// [`disabled!`] otherwise.
#[macro_export]
macro_rules! define_alias {
    ($(#[cfg($meta:meta)] => $alias:ident),+ $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc = concat!("Keeps the given code, `#[cfg(", stringify!($meta), ")]` is active.")]
            pub use $crate::enabled as $alias;

            #[cfg(not($meta))]
            #[doc = concat!("Drops the given code, `#[cfg(", stringify!($meta), ")]` is not active.")]
            pub use $crate::disabled as $alias;
        )+
    };
}
