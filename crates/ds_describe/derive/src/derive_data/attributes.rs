//! Parsers of the `#[describe(..)]` attribute.

use proc_macro2::Span;
use syn::meta::ParseNestedMeta;
use syn::spanned::Spanned;
use syn::{Attribute, Ident, LitStr};

use crate::DESCRIBE_ATTRIBUTE_NAME;

// -----------------------------------------------------------------------------
// TypeAttributes

/// `#[describe(..)]` on the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `name = "..."`, defaults to the type's identifier.
    pub name: Option<LitStr>,
    /// `function(..)`, in the written order.
    pub functions: Vec<FunctionAttribute>,
    /// `auto_register`, with the span of the flag.
    pub auto_register: Option<Span>,
}

/// `function(method, args(a, b), name = "...")`.
pub(crate) struct FunctionAttribute {
    pub method: Ident,
    pub args: Vec<Ident>,
    pub name: Option<LitStr>,
}

impl FunctionAttribute {
    /// The display name, `name = ".."` or the method identifier.
    pub fn display_name(&self) -> LitStr {
        match &self.name {
            Some(name) => name.clone(),
            None => LitStr::new(&self.method.to_string(), self.method.span()),
        }
    }
}

impl TypeAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    if result.name.is_some() {
                        return Err(meta.error("duplicate `name`"));
                    }
                    result.name = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("function") {
                    result.functions.push(parse_function(&meta)?);
                    Ok(())
                } else if meta.path.is_ident("auto_register") {
                    result.auto_register = Some(meta.path.span());
                    Ok(())
                } else {
                    Err(meta.error(
                        "unsupported type attribute, expected `name`, `function` or `auto_register`",
                    ))
                }
            })?;
        }

        Ok(result)
    }
}

fn parse_function(meta: &ParseNestedMeta) -> syn::Result<FunctionAttribute> {
    let mut method = None;
    let mut args = None;
    let mut name = None;

    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("args") {
            if args.is_some() {
                return Err(inner.error("duplicate `args`"));
            }
            let mut list = Vec::new();
            inner.parse_nested_meta(|arg| match arg.path.get_ident() {
                Some(ident) => {
                    list.push(ident.clone());
                    Ok(())
                }
                None => Err(arg.error("expected an argument name")),
            })?;
            args = Some(list);
            Ok(())
        } else if inner.path.is_ident("name") && inner.input.peek(syn::Token![=]) {
            name = Some(inner.value()?.parse()?);
            Ok(())
        } else if method.is_none()
            && let Some(ident) = inner.path.get_ident()
        {
            method = Some(ident.clone());
            Ok(())
        } else {
            Err(inner.error("expected `method`, `args(..)` or `name = \"..\"`"))
        }
    })?;

    let Some(method) = method else {
        return Err(meta.error("`function(..)` requires a method name"));
    };

    Ok(FunctionAttribute {
        method,
        args: args.unwrap_or_default(),
        name,
    })
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// `#[describe(..)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `rename = "..."`
    pub rename: Option<LitStr>,
    /// `skip`
    pub skip: bool,
}

impl FieldAttributes {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(DESCRIBE_ATTRIBUTE_NAME) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    result.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `rename` or `skip`"))
                }
            })?;
        }

        Ok(result)
    }
}
