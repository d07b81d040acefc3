use proc_macro2::TokenStream;

/// An empty token stream.
#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
