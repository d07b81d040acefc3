use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// A [`TypeId`] together with the type's path.
///
/// The path comes from [`core::any::type_name`], it is meant for
/// diagnostics and registry lookups, not as a stable identifier.
///
/// # Example
///
/// ```
/// use core::any::TypeId;
/// use ds_describe::info::Type;
///
/// let ty = Type::of::<String>();
///
/// assert_eq!(ty.id(), TypeId::of::<String>());
/// assert_eq!(ty.path(), "alloc::string::String");
/// assert_eq!(ty.name(), "String");
/// assert!(ty.is::<String>());
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: fn() -> &'static str,
}

impl Type {
    /// Creates a new [`Type`] for `T`.
    #[inline]
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>,
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full path of the type, e.g. `alloc::string::String`.
    #[inline]
    pub fn path(&self) -> &'static str {
        (self.path)()
    }

    /// Returns the path of the type with every module prefix removed,
    /// generics included, e.g. `Wrapper<u32>` for `my_crate::Wrapper<u32>`.
    pub fn name(&self) -> &'static str {
        let path = self.path();
        let head = match path.find('<') {
            Some(index) => &path[..index],
            None => path,
        };
        match head.rfind("::") {
            Some(index) => &path[index + 2..],
            None => path,
        }
    }

    /// Check if the given type matches this one.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::Type;

    #[allow(dead_code)]
    struct Wrapper<T>(T);

    #[test]
    fn name_strips_modules() {
        assert_eq!(Type::of::<u32>().name(), "u32");
        assert_eq!(Type::of::<Wrapper<u8>>().name(), "Wrapper<u8>");
        assert_eq!(Type::of::<Wrapper<String>>().name(), "Wrapper<alloc::string::String>");
    }

    #[test]
    fn equality_by_id() {
        assert_eq!(Type::of::<bool>(), Type::of::<bool>());
        assert_ne!(Type::of::<bool>(), Type::of::<char>());
    }
}
