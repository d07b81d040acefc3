use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::DescribeStruct;

/// Generate implementation code for `Describe`.
///
/// Members come first in field order, then functions in attribute order.
pub(crate) fn impl_trait_describe(info: &DescribeStruct) -> TokenStream {
    let ds_describe_path = info.ds_describe_path();
    let describe_ = crate::path::describe_(ds_describe_path);
    let descriptor_ = crate::path::descriptor_(ds_describe_path);
    let class_descriptor_ = crate::path::class_descriptor_(ds_describe_path);
    let member_ = crate::path::member_(ds_describe_path);

    let real_ident = info.real_ident();
    let class_name = info.class_name();

    let member_tokens = info.fields().iter().map(|field| {
        let ident = field.ident;
        let name = field.display_name();
        quote! {
            .member(#member_!(Self, #ident), #name)
        }
    });

    let function_tokens = info.attrs().functions.iter().map(|function| {
        let method = &function.method;
        let name = function.display_name();
        let args = function
            .args
            .iter()
            .map(|arg| syn::LitStr::new(&arg.to_string(), arg.span()));
        quote! {
            .function(Self::#method, #name, [#(#args),*])
        }
    });

    let build_tokens = quote! {
        #descriptor_::class::<Self>(#class_name)
            #(#member_tokens)*
            #(#function_tokens)*
            .build()
    };

    let inner_cell_tokens = if info.impl_with_generic() {
        let descriptor_cell = crate::path::generic_descriptor_cell_(ds_describe_path);
        quote! {
            static CELL: #descriptor_cell = #descriptor_cell::new();
            CELL.get_or_insert::<Self>(|| {
                #build_tokens
            })
        }
    } else {
        let descriptor_cell = crate::path::non_generic_descriptor_cell_(ds_describe_path);
        quote! {
            static CELL: #descriptor_cell<#real_ident> = #descriptor_cell::new();
            CELL.get_or_init(|| {
                #build_tokens
            })
        }
    };

    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #describe_ for #real_ident #ty_generics #where_clause {
            fn class_descriptor() -> &'static #class_descriptor_<Self> {
                #inner_cell_tokens
            }
        }
    }
}
