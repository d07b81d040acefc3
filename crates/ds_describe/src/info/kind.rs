use core::{error, fmt};

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The closed set of primitive kinds a described member can have.
///
/// Every other member type must itself be a described class.
///
/// | Kind | Rust types |
/// |---|---|
/// | `Char` | `char` |
/// | `Int` | `i8`..`i128`, `isize`, `u8`..`u64`, `usize` |
/// | `Bool` | `bool` |
/// | `String` | `String`, `&'static str`, `Box<str>`, `Cow<'static, str>` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Char,
    Int,
    Bool,
    String,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char => f.pad("Char"),
            Self::Int => f.pad("Int"),
            Self::Bool => f.pad("Bool"),
            Self::String => f.pad("String"),
        }
    }
}

// -----------------------------------------------------------------------------
// DescribeKind

/// The kind of a [`TypeInfo`](crate::info::TypeInfo).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescribeKind {
    Primitive,
    Class,
}

impl fmt::Display for DescribeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive => f.pad("Primitive"),
            Self::Class => f.pad("Class"),
        }
    }
}

/// Returned by the `as_*` casts of [`TypeInfo`](crate::info::TypeInfo)
/// when the kind does not match.
///
/// # Examples
///
/// ```
/// use ds_describe::info::{DescribeKind, Typed};
///
/// let err = <i32 as Typed>::type_info().as_class().unwrap_err();
///
/// assert_eq!(err.expected, DescribeKind::Class);
/// assert_eq!(err.received, DescribeKind::Primitive);
/// assert_eq!(err.to_string(), "describe kind mismatch: expected Class, received Primitive");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescribeKindError {
    pub expected: DescribeKind,
    pub received: DescribeKind,
}

impl fmt::Display for DescribeKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "describe kind mismatch: expected {}, received {}",
            self.expected, self.received
        )
    }
}

impl error::Error for DescribeKindError {}

// -----------------------------------------------------------------------------
// EntryKind

/// Whether a class entry is a data member or a member function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Member,
    Function,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Member => f.pad("member"),
            Self::Function => f.pad("function"),
        }
    }
}
