use core::any::Any;

use crate::info::{EntryKind, Type, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// MemberInfo

/// Information of a described data member.
///
/// # Examples
///
/// ```
/// use ds_describe::{derive::Describe, info::Typed};
///
/// #[derive(Describe)]
/// struct Foo {
///     #[describe(rename = "Count")]
///     count: u16,
/// }
///
/// let info = Foo::type_info().as_class().unwrap();
/// let member = info.members().next().unwrap();
///
/// assert!(member.type_is::<u16>());
/// assert_eq!(member.name(), "Count");
/// ```
#[derive(Clone, Debug)]
pub struct MemberInfo {
    name: &'static str,
    ty: Type,
    // Resolved on first access, nested classes may not be built yet.
    type_info: fn() -> &'static TypeInfo,
}

impl MemberInfo {
    /// Creates a new [`MemberInfo`] for the member `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the display name of the member.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] of the member.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the given type matches the member type.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Returns the [`TypeInfo`] of the member type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// ArgumentInfo

/// Information of one parameter of a described member function.
#[derive(Clone, Debug)]
pub struct ArgumentInfo {
    name: &'static str,
    ty: Type,
    type_info: fn() -> &'static TypeInfo,
}

impl ArgumentInfo {
    /// Creates a new [`ArgumentInfo`] for the parameter `name` of type `T`.
    #[inline]
    pub const fn new<T: Typed>(name: &'static str) -> Self {
        Self {
            name,
            ty: Type::of::<T>(),
            type_info: T::type_info,
        }
    }

    /// Returns the parameter name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the [`Type`] of the parameter.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the [`TypeInfo`] of the parameter type.
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }
}

// -----------------------------------------------------------------------------
// FunctionInfo

/// Information of a described member function.
///
/// # Examples
///
/// ```
/// use ds_describe::{derive::Describe, info::Typed};
///
/// #[derive(Describe)]
/// #[describe(function(shift, args(dx, dy)))]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Point {
///     fn shift(&mut self, dx: i32, dy: i32) {
///         self.x += dx;
///         self.y += dy;
///     }
/// }
///
/// let info = Point::type_info().as_class().unwrap();
/// let shift = info.functions().next().unwrap();
///
/// assert_eq!(shift.name(), "shift");
/// assert_eq!(shift.argument_count(), 2);
/// assert_eq!(shift.argument(1).unwrap().name(), "dy");
/// assert!(!shift.is_shared());
/// ```
#[derive(Clone, Debug)]
pub struct FunctionInfo {
    name: &'static str,
    arguments: Box<[ArgumentInfo]>,
    returns: Type,
    shared: bool,
}

impl FunctionInfo {
    /// Creates a new [`FunctionInfo`].
    ///
    /// `shared` tells whether the function takes `&self` rather than `&mut self`.
    pub fn new(
        name: &'static str,
        arguments: Box<[ArgumentInfo]>,
        returns: Type,
        shared: bool,
    ) -> Self {
        Self {
            name,
            arguments,
            returns,
            shared,
        }
    }

    /// Returns the display name of the function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the parameters in declaration order.
    #[inline]
    pub fn arguments(&self) -> &[ArgumentInfo] {
        &self.arguments
    }

    /// Returns the parameter at `index`.
    #[inline]
    pub fn argument(&self, index: usize) -> Option<&ArgumentInfo> {
        self.arguments.get(index)
    }

    /// Returns the number of parameters, the receiver excluded.
    #[inline]
    pub fn argument_count(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the [`Type`] of the return value.
    #[inline]
    pub const fn returns(&self) -> &Type {
        &self.returns
    }

    /// Returns `true` if the function takes `&self`.
    #[inline]
    pub const fn is_shared(&self) -> bool {
        self.shared
    }
}

// -----------------------------------------------------------------------------
// EntryInfo

/// Information of one entry of a described class.
#[derive(Clone, Debug)]
pub enum EntryInfo {
    Member(MemberInfo),
    Function(FunctionInfo),
}

impl EntryInfo {
    /// Returns the display name of the entry.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Member(info) => info.name(),
            Self::Function(info) => info.name(),
        }
    }

    /// Returns the [`EntryKind`] of the entry.
    #[inline]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Member(_) => EntryKind::Member,
            Self::Function(_) => EntryKind::Function,
        }
    }

    /// Returns the [`MemberInfo`] if the entry is a data member.
    #[inline]
    pub const fn as_member(&self) -> Option<&MemberInfo> {
        match self {
            Self::Member(info) => Some(info),
            Self::Function(_) => None,
        }
    }

    /// Returns the [`FunctionInfo`] if the entry is a member function.
    #[inline]
    pub const fn as_function(&self) -> Option<&FunctionInfo> {
        match self {
            Self::Function(info) => Some(info),
            Self::Member(_) => None,
        }
    }
}

// -----------------------------------------------------------------------------
// ClassInfo

/// Information of a described class: its display name and its entries
/// in declaration order.
///
/// Built by [`ClassDescriptor`](crate::descriptor::ClassDescriptor), which
/// owns it for the lifetime of the program.
#[derive(Clone, Debug)]
pub struct ClassInfo {
    ty: Type,
    name: &'static str,
    entries: Box<[EntryInfo]>,
}

impl ClassInfo {
    /// Creates the information of class `T`.
    pub fn new<T: ?Sized + 'static>(name: &'static str, entries: Box<[EntryInfo]>) -> Self {
        Self {
            ty: Type::of::<T>(),
            name,
            entries,
        }
    }

    /// Returns the [`Type`] of the class.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Returns the display name of the class.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of entries, members and functions together.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the class has no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, EntryInfo> {
        self.entries.iter()
    }

    /// Iterates over the data members in declaration order.
    pub fn members(&self) -> impl Iterator<Item = &MemberInfo> {
        self.entries.iter().filter_map(EntryInfo::as_member)
    }

    /// Iterates over the member functions in declaration order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionInfo> {
        self.entries.iter().filter_map(EntryInfo::as_function)
    }

    /// Returns the first entry named `name`.
    pub fn entry(&self, name: &str) -> Option<&EntryInfo> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Returns the entry at `index`.
    #[inline]
    pub fn entry_at(&self, index: usize) -> Option<&EntryInfo> {
        self.entries.get(index)
    }

    /// Returns the index of the first entry named `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.name() == name)
    }
}

impl<'a> IntoIterator for &'a ClassInfo {
    type Item = &'a EntryInfo;
    type IntoIter = core::slice::Iter<'a, EntryInfo>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassInfo, EntryInfo, FunctionInfo, MemberInfo};
    use crate::info::{EntryKind, Type};

    fn sample() -> ClassInfo {
        ClassInfo::new::<()>(
            "Sample",
            Box::new([
                EntryInfo::Member(MemberInfo::new::<i32>("a")),
                EntryInfo::Function(FunctionInfo::new("f", Box::new([]), Type::of::<()>(), true)),
                EntryInfo::Member(MemberInfo::new::<bool>("b")),
            ]),
        )
    }

    #[test]
    fn split_by_kind() {
        let info = sample();

        assert_eq!(info.len(), 3);
        assert_eq!(info.members().map(MemberInfo::name).collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(info.functions().count(), 1);
        assert_eq!(info.entry_at(1).map(EntryInfo::kind), Some(EntryKind::Function));
    }

    #[test]
    fn lookup_by_name() {
        let info = sample();

        assert_eq!(info.index_of("b"), Some(2));
        assert!(info.entry("b").unwrap().as_member().unwrap().type_is::<bool>());
        assert!(info.entry("missing").is_none());
    }
}
