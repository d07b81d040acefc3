use crate::info::{ClassInfo, DescribeKind, DescribeKindError, PrimitiveKind, Type};

// -----------------------------------------------------------------------------
// PrimitiveInfo

/// Type information of a primitive type.
///
/// # Examples
///
/// ```
/// use ds_describe::info::{PrimitiveKind, Typed};
///
/// let info = <u8 as Typed>::type_info().as_primitive().unwrap();
///
/// assert_eq!(info.kind(), PrimitiveKind::Int);
/// assert!(info.ty().is::<u8>());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PrimitiveInfo {
    ty: Type,
    kind: PrimitiveKind,
}

impl PrimitiveInfo {
    /// Creates the information of primitive type `T`.
    #[inline]
    pub const fn new<T: ?Sized + 'static>(kind: PrimitiveKind) -> Self {
        Self {
            ty: Type::of::<T>(),
            kind,
        }
    }

    /// Returns the [`Type`] of the primitive.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`PrimitiveKind`] of the primitive.
    #[inline]
    pub const fn kind(&self) -> PrimitiveKind {
        self.kind
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time information of a describable type.
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info).
#[derive(Debug, Clone, Copy)]
pub enum TypeInfo {
    Primitive(PrimitiveInfo),
    Class(&'static ClassInfo),
}

impl TypeInfo {
    /// Returns the [`PrimitiveInfo`], or an error for a class.
    pub const fn as_primitive(&self) -> Result<&PrimitiveInfo, DescribeKindError> {
        match self {
            Self::Primitive(info) => Ok(info),
            Self::Class(_) => Err(DescribeKindError {
                expected: DescribeKind::Primitive,
                received: DescribeKind::Class,
            }),
        }
    }

    /// Returns the [`ClassInfo`], or an error for a primitive.
    pub const fn as_class(&self) -> Result<&'static ClassInfo, DescribeKindError> {
        match self {
            Self::Class(info) => Ok(*info),
            Self::Primitive(_) => Err(DescribeKindError {
                expected: DescribeKind::Class,
                received: DescribeKind::Primitive,
            }),
        }
    }

    /// Returns the [`DescribeKind`] of this information.
    #[inline]
    pub const fn kind(&self) -> DescribeKind {
        match self {
            Self::Primitive(_) => DescribeKind::Primitive,
            Self::Class(_) => DescribeKind::Class,
        }
    }

    /// Returns the [`Type`] this information describes.
    #[inline]
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Primitive(info) => info.ty(),
            Self::Class(info) => info.ty(),
        }
    }

    /// Returns the display name.
    ///
    /// The class name for classes, the short type name for primitives.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Primitive(info) => info.ty().name(),
            Self::Class(info) => info.name(),
        }
    }
}
