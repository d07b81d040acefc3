use crate::derive_data::DescribeStruct;

/// Generate `auto_register` implementation
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(info: &DescribeStruct) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = info.attrs().auto_register else {
        return crate::utils::empty();
    };

    // Invalid for generic types.
    if info.impl_with_generic() {
        return crate::utils::empty();
    }

    let auto_register_ = crate::path::auto_register_(info.ds_describe_path());
    let real_ident = info.real_ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#real_ident as #auto_register_::__RegisterType>::__register
            )
        }
    }
}

/// Generate `auto_register` implementation
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &DescribeStruct) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
