use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, LitStr, Path, Type, WhereClause};

use super::{FieldAttributes, TypeAttributes};

// -----------------------------------------------------------------------------
// StructField

/// A named field that is not skipped.
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The display name, `rename = ".."` or the field identifier.
    pub fn display_name(&self) -> LitStr {
        match &self.attrs.rename {
            Some(name) => name.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }
}

// -----------------------------------------------------------------------------
// DescribeStruct

/// The parsed input of `#[derive(Describe)]`.
pub(crate) struct DescribeStruct<'a> {
    ds_describe_path: Path,
    ident: &'a Ident,
    generics: &'a Generics,
    attrs: TypeAttributes,
    fields: Vec<StructField<'a>>,
}

impl<'a> DescribeStruct<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse(&input.attrs)?;

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named.named.iter().collect::<Vec<_>>(),
                Fields::Unit => Vec::new(),
                Fields::Unnamed(_) => {
                    return Err(syn::Error::new_spanned(
                        input,
                        "`Describe` requires named fields, tuple structs have no member names",
                    ));
                }
            },
            Data::Enum(_) | Data::Union(_) => {
                return Err(syn::Error::new_spanned(
                    input,
                    "`Describe` can only be derived for structs",
                ));
            }
        };

        let mut active = Vec::new();
        for field in fields {
            let attrs = FieldAttributes::parse(&field.attrs)?;
            if attrs.skip {
                continue;
            }
            // Named fields always have an identifier.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };
            active.push(StructField {
                ident,
                ty: &field.ty,
                attrs,
            });
        }

        Ok(Self {
            ds_describe_path: crate::path::ds_describe(),
            ident: &input.ident,
            generics: &input.generics,
            attrs,
            fields: active,
        })
    }

    #[inline]
    pub fn ds_describe_path(&self) -> &Path {
        &self.ds_describe_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn fields(&self) -> &[StructField<'a>] {
        &self.fields
    }

    /// The type identifier, usable where `Self` is not, e.g. in `static`s.
    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    /// The class display name.
    pub fn class_name(&self) -> LitStr {
        match &self.attrs.name {
            Some(name) => name.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    /// Returns `true` if the type has type or const parameters.
    pub fn impl_with_generic(&self) -> bool {
        self.generics
            .params
            .iter()
            .any(|param| !matches!(param, syn::GenericParam::Lifetime(_)))
    }

    /// Splits the generics for an `impl` block.
    ///
    /// For generic types, the where clause gains `'static` for every type
    /// parameter and `Value + Typed` for every field type.
    pub fn split_generics(&self) -> (syn::ImplGenerics<'_>, syn::TypeGenerics<'_>, TokenStream) {
        let (impl_generics, ty_generics, where_clause) = self.generics.split_for_impl();

        if !self.impl_with_generic() {
            return (impl_generics, ty_generics, where_clause.to_token_stream());
        }

        let ds_describe_path = &self.ds_describe_path;
        let value_ = crate::path::value_(ds_describe_path);
        let typed_ = crate::path::typed_(ds_describe_path);

        let mut where_clause = where_clause.cloned().unwrap_or_else(|| WhereClause {
            where_token: Default::default(),
            predicates: Default::default(),
        });

        for param in self.generics.type_params() {
            let ident = &param.ident;
            where_clause.predicates.push(syn::parse_quote!(#ident: 'static));
        }

        for field in &self.fields {
            let ty = field.ty;
            where_clause
                .predicates
                .push(syn::parse_quote!(#ty: #value_ + #typed_));
        }

        (impl_generics, ty_generics, quote!(#where_clause))
    }
}
