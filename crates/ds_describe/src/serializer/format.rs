use core::fmt;

use crate::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// FormatSupplier

/// The literal syntax of an output format.
///
/// A supplier is a stateless policy: token accessors return constants and the
/// `write_*` methods format one primitive value. The default `write_*`
/// implementations render values with `Display` and names between
/// [`name_before`](Self::name_before) and [`name_after`](Self::name_after).
///
/// The trait is object safe, `&dyn FormatSupplier` selects the format at
/// runtime.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use ds_describe::derive::Describe;
/// use ds_describe::info::PrimitiveKind;
/// use ds_describe::serializer::{FormatSupplier, Serializer};
///
/// struct Angle;
///
/// impl FormatSupplier for Angle {
///     fn object_start(&self) -> &str { "<" }
///     fn object_end(&self) -> &str { ">" }
///     fn name_before(&self) -> &str { "" }
///     fn name_after(&self) -> &str { ":" }
///     fn separator(&self) -> &str { " " }
///     fn true_literal(&self) -> &str { "yes" }
///     fn false_literal(&self) -> &str { "no" }
///     fn type_tag(&self, _: PrimitiveKind) -> &str { "?" }
///     fn class_name_key(&self) -> &str { "class" }
///     fn members_key(&self) -> &str { "members" }
///     fn functions_key(&self) -> &str { "functions" }
///     fn arguments_key(&self) -> &str { "arguments" }
/// }
///
/// #[derive(Describe)]
/// struct Switch {
///     id: u8,
///     on: bool,
/// }
///
/// let text = Serializer::new(Angle).to_string(&Switch { id: 2, on: true });
/// assert_eq!(text, "<id:2 on:yes>");
/// ```
pub trait FormatSupplier {
    /// Opens an object.
    fn object_start(&self) -> &str;

    /// Closes an object.
    fn object_end(&self) -> &str;

    /// Written before every entry name.
    fn name_before(&self) -> &str;

    /// Written after every entry name.
    fn name_after(&self) -> &str;

    /// Written between two entries of the same object.
    fn separator(&self) -> &str;

    /// The literal of `true`.
    fn true_literal(&self) -> &str;

    /// The literal of `false`.
    fn false_literal(&self) -> &str;

    /// The type tag of a primitive kind in structure mode.
    fn type_tag(&self, kind: PrimitiveKind) -> &str;

    /// Extended structure key of the class name.
    fn class_name_key(&self) -> &str;

    /// Extended structure key of the member object.
    fn members_key(&self) -> &str;

    /// Extended structure key of the function object.
    fn functions_key(&self) -> &str;

    /// Extended structure key of a function's argument object.
    fn arguments_key(&self) -> &str;

    /// Writes an entry name.
    fn write_name(&self, out: &mut dyn fmt::Write, name: &str) -> fmt::Result {
        out.write_str(self.name_before())?;
        out.write_str(name)?;
        out.write_str(self.name_after())
    }

    /// Writes an integer.
    fn write_int(&self, out: &mut dyn fmt::Write, value: i128) -> fmt::Result {
        write!(out, "{value}")
    }

    /// Writes a character.
    fn write_char(&self, out: &mut dyn fmt::Write, value: char) -> fmt::Result {
        out.write_char(value)
    }

    /// Writes a boolean with [`true_literal`](Self::true_literal) or
    /// [`false_literal`](Self::false_literal).
    fn write_bool(&self, out: &mut dyn fmt::Write, value: bool) -> fmt::Result {
        out.write_str(if value {
            self.true_literal()
        } else {
            self.false_literal()
        })
    }

    /// Writes a string, quoting and escaping it as the format requires.
    fn write_string(&self, out: &mut dyn fmt::Write, value: &str) -> fmt::Result {
        out.write_str(value)
    }
}

macro_rules! forward_format_supplier {
    ($($ptr:ty),+ $(,)?) => {$(
        impl<F: FormatSupplier + ?Sized> FormatSupplier for $ptr {
            #[inline] fn object_start(&self) -> &str { (**self).object_start() }
            #[inline] fn object_end(&self) -> &str { (**self).object_end() }
            #[inline] fn name_before(&self) -> &str { (**self).name_before() }
            #[inline] fn name_after(&self) -> &str { (**self).name_after() }
            #[inline] fn separator(&self) -> &str { (**self).separator() }
            #[inline] fn true_literal(&self) -> &str { (**self).true_literal() }
            #[inline] fn false_literal(&self) -> &str { (**self).false_literal() }
            #[inline] fn type_tag(&self, kind: PrimitiveKind) -> &str { (**self).type_tag(kind) }
            #[inline] fn class_name_key(&self) -> &str { (**self).class_name_key() }
            #[inline] fn members_key(&self) -> &str { (**self).members_key() }
            #[inline] fn functions_key(&self) -> &str { (**self).functions_key() }
            #[inline] fn arguments_key(&self) -> &str { (**self).arguments_key() }

            #[inline]
            fn write_name(&self, out: &mut dyn fmt::Write, name: &str) -> fmt::Result {
                (**self).write_name(out, name)
            }

            #[inline]
            fn write_int(&self, out: &mut dyn fmt::Write, value: i128) -> fmt::Result {
                (**self).write_int(out, value)
            }

            #[inline]
            fn write_char(&self, out: &mut dyn fmt::Write, value: char) -> fmt::Result {
                (**self).write_char(out, value)
            }

            #[inline]
            fn write_bool(&self, out: &mut dyn fmt::Write, value: bool) -> fmt::Result {
                (**self).write_bool(out, value)
            }

            #[inline]
            fn write_string(&self, out: &mut dyn fmt::Write, value: &str) -> fmt::Result {
                (**self).write_string(out, value)
            }
        }
    )+};
}

forward_format_supplier!(&F, Box<F>);
