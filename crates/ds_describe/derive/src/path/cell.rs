use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::impls::NonGenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn generic_type_info_cell_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::impls::GenericTypeInfoCell
    }
}

#[inline(always)]
pub(crate) fn non_generic_descriptor_cell_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::impls::NonGenericDescriptorCell
    }
}

#[inline(always)]
pub(crate) fn generic_descriptor_cell_(ds_describe_path: &syn::Path) -> TokenStream {
    quote! {
        #ds_describe_path::impls::GenericDescriptorCell
    }
}
