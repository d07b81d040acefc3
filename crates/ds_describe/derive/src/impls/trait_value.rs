use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::DescribeStruct;

/// Generate implementation code for `Value`, every struct is an object.
pub(crate) fn impl_trait_value(info: &DescribeStruct) -> TokenStream {
    let ds_describe_path = info.ds_describe_path();
    let value_ = crate::path::value_(ds_describe_path);
    let value_ref_ = crate::path::value_ref_(ds_describe_path);

    let real_ident = info.real_ident();
    let (impl_generics, ty_generics, where_clause) = info.split_generics();

    quote! {
        impl #impl_generics #value_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn value_ref(&self) -> #value_ref_<'_> {
                #value_ref_::Object(self)
            }

            #[inline]
            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    }
}
