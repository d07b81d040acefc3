// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod struct_kind;
mod trait_describe;
mod trait_typed;
mod trait_value;

// -----------------------------------------------------------------------------
// Internal API

use auto_register::get_auto_register_impl;
use trait_describe::impl_trait_describe;
use trait_typed::impl_trait_typed;
use trait_value::impl_trait_value;

pub(crate) use struct_kind::impl_struct;
