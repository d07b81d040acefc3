use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_describe};
use super::{impl_trait_typed, impl_trait_value};

use crate::derive_data::DescribeStruct;

/// Implement `Typed`, `Describe` and `Value` for a struct.
pub(crate) fn impl_struct(info: &DescribeStruct) -> TokenStream {
    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(info);

    // trait: Describe
    let describe_trait_tokens = impl_trait_describe(info);

    // trait: Value
    let value_trait_tokens = impl_trait_value(info);

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(info);

    quote! {
        const _: () = {
            #typed_trait_tokens

            #describe_trait_tokens

            #value_trait_tokens

            #auto_register_tokens
        };
    }
}
