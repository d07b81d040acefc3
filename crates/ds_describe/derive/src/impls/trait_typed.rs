use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::DescribeStruct;

/// Generate implementation code for `Typed`.
///
/// The information is the descriptor's `ClassInfo`, cached in a static cell.
pub(crate) fn impl_trait_typed(info: &DescribeStruct) -> TokenStream {
    let ds_describe_path = info.ds_describe_path();
    let typed_ = crate::path::typed_(ds_describe_path);
    let type_info_ = crate::path::type_info_(ds_describe_path);
    let describe_ = crate::path::describe_(ds_describe_path);

    let class_info_tokens = quote! {
        #type_info_::Class(<Self as #describe_>::class_descriptor().info())
    };

    let inner_cell_tokens = if info.impl_with_generic() {
        let info_cell = crate::path::generic_type_info_cell_(ds_describe_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #class_info_tokens
            })
        }
    } else {
        let info_cell = crate::path::non_generic_type_info_cell_(ds_describe_path);
        quote! {
            static CELL: #info_cell = #info_cell::new();
            CELL.get_or_init(|| {
                #class_info_tokens
            })
        }
    };

    let real_ident = info.real_ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #typed_ for #real_ident #ty_generics #where_clause {
            fn type_info() -> &'static #type_info_ {
                #inner_cell_tokens
            }
        }
    }
}
