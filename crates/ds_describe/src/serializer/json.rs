use core::fmt;

use super::FormatSupplier;
use crate::info::PrimitiveKind;

// -----------------------------------------------------------------------------
// JsonFormat

/// Compact JSON output.
///
/// | item        | output                      |
/// |-------------|-----------------------------|
/// | object      | `{` .. `}`                  |
/// | entry name  | `"name":`                   |
/// | separator   | `,`                         |
/// | integer     | `42`                        |
/// | character   | `c`, bare                   |
/// | boolean     | `true` / `false`            |
/// | string      | `"text"`, escaped           |
/// | type tags   | `"CHAR"` `"INT"` `"STRING"` `"BOOLEAN"` |
///
/// Characters are written bare, the output is then not strict JSON.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormat;

impl FormatSupplier for JsonFormat {
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
        "\""
    }

    #[inline]
    fn name_after(&self) -> &str {
        "\":"
    }

    #[inline]
    fn separator(&self) -> &str {
        ","
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
            PrimitiveKind::Char => "\"CHAR\"",
            PrimitiveKind::Int => "\"INT\"",
            PrimitiveKind::Bool => "\"BOOLEAN\"",
            PrimitiveKind::String => "\"STRING\"",
        }
    }

    #[inline]
    fn class_name_key(&self) -> &str {
        "ClassName"
    }

    #[inline]
    fn members_key(&self) -> &str {
        "Members"
    }

    #[inline]
    fn functions_key(&self) -> &str {
        "Functions"
    }

    #[inline]
    fn arguments_key(&self) -> &str {
        "Arguments"
    }

    fn write_string(&self, out: &mut dyn fmt::Write, value: &str) -> fmt::Result {
        out.write_char('"')?;
        write_escaped(out, value)?;
        out.write_char('"')
    }
}

/// Writes `value` with JSON string escapes, unescaped runs are written whole.
fn write_escaped(out: &mut dyn fmt::Write, value: &str) -> fmt::Result {
    let mut start = 0;

    for (index, c) in value.char_indices() {
        let escape = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{08}' => "\\b",
            '\u{0C}' => "\\f",
            c if c < ' ' => "",
            _ => continue,
        };

        out.write_str(&value[start..index])?;
        if escape.is_empty() {
            write!(out, "\\u{:04x}", c as u32)?;
        } else {
            out.write_str(escape)?;
        }
        start = index + c.len_utf8();
    }

    out.write_str(&value[start..])
}

#[cfg(test)]
mod tests {
    use super::JsonFormat;
    use crate::serializer::FormatSupplier;

    fn string(value: &str) -> String {
        let mut out = String::new();
        JsonFormat.write_string(&mut out, value).unwrap();
        out
    }

    #[test]
    fn escapes_strings() {
        assert_eq!(string("plain"), r#""plain""#);
        assert_eq!(string(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(string("a\\b"), r#""a\\b""#);
        assert_eq!(string("line\nnext\t"), r#""line\nnext\t""#);
        assert_eq!(string("\u{01}é"), "\"\\u0001é\"");
        assert_eq!(string(""), r#""""#);
    }

    #[test]
    fn bare_primitives() {
        let mut out = String::new();
        JsonFormat.write_int(&mut out, -17).unwrap();
        JsonFormat.write_char(&mut out, 'q').unwrap();
        JsonFormat.write_bool(&mut out, false).unwrap();
        JsonFormat.write_name(&mut out, "key").unwrap();

        assert_eq!(out, r#"-17qfalse"key":"#);
    }
}
