use core::fmt;

use super::FormatSupplier;
use crate::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// PlainFormat

/// Human readable text, such as `{x = 3, name = "origin"}`.
///
/// Strings and characters use Rust's debug quoting, type tags are the
/// lowercase kind names `char`, `int`, `bool` and `string`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainFormat;

impl FormatSupplier for PlainFormat {
    #[inline]
    fn object_start(&self) -> &str {
        "{"
    }

    #[inline]
    fn object_end(&self) -> &str {
        "}"
    }

    #[inline]
    fn name_before(&self) -> &str {
        ""
    }

    #[inline]
    fn name_after(&self) -> &str {
        " = "
    }

    #[inline]
    fn separator(&self) -> &str {
        ", "
    }

    #[inline]
    fn true_literal(&self) -> &str {
        "true"
    }

    #[inline]
    fn false_literal(&self) -> &str {
        "false"
    }

    fn type_tag(&self, kind: PrimitiveKind) -> &str {
        match kind {
            PrimitiveKind::Char => "char",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::String => "string",
        }
    }

    #[inline]
    fn class_name_key(&self) -> &str {
        "class"
    }

    #[inline]
    fn members_key(&self) -> &str {
        "members"
    }

    #[inline]
    fn functions_key(&self) -> &str {
        "functions"
    }

    #[inline]
    fn arguments_key(&self) -> &str {
        "arguments"
    }

    fn write_char(&self, out: &mut dyn fmt::Write, value: char) -> fmt::Result {
        write!(out, "{value:?}")
    }

    fn write_string(&self, out: &mut dyn fmt::Write, value: &str) -> fmt::Result {
        write!(out, "{value:?}")
    }
}
