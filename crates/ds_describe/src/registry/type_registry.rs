use core::any::TypeId;
use core::fmt;
use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use ds_utils::TypeIdMap;
use ds_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::{EntryInfo, TypeInfo, Typed};

// -----------------------------------------------------------------------------
// TypeRegistry

/// A registry of [`TypeInfo`], keyed by [`TypeId`].
///
/// Types can also be looked up by their full type path or, for classes, by
/// their display name. Two classes sharing a display name make that name
/// ambiguous, it then resolves to neither.
///
/// # Examples
///
/// ```
/// use ds_describe::{derive::Describe, registry::TypeRegistry};
///
/// #[derive(Describe)]
/// struct Inner {
///     flag: bool,
/// }
///
/// #[derive(Describe)]
/// struct Outer {
///     inner: Inner,
/// }
///
/// let mut registry = TypeRegistry::empty();
/// registry.register::<Outer>();
///
/// // `Inner` and `bool` are reached through `Outer`.
/// assert!(registry.contains_type::<Inner>());
/// assert!(registry.contains_type::<bool>());
///
/// let info = registry.get_with_class_name("Inner").unwrap();
/// assert!(info.ty().is::<Inner>());
/// ```
pub struct TypeRegistry {
    type_info_table: TypeIdMap<&'static TypeInfo>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    class_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    #[cfg_attr(not(feature = "auto_register"), allow(dead_code))]
    pub(crate) auto_registered: bool,
}

impl Default for TypeRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates an empty registry, without any primitive registered.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            type_info_table: TypeIdMap::new(),
            type_path_to_id: HashMap::with_hasher(FixedHashState),
            class_name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Creates a registry with every primitive type registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register::<bool>();
        registry.register::<char>();
        registry.register::<u8>();
        registry.register::<u16>();
        registry.register::<u32>();
        registry.register::<u64>();
        registry.register::<usize>();
        registry.register::<i8>();
        registry.register::<i16>();
        registry.register::<i32>();
        registry.register::<i64>();
        registry.register::<i128>();
        registry.register::<isize>();
        registry.register::<String>();
        registry.register::<&'static str>();
        registry.register::<Box<str>>();
        registry.register::<Cow<'static, str>>();
        registry
    }

    /// Registers `T` and, recursively, the types of its members and of its
    /// functions' arguments.
    ///
    /// Registering a type twice does nothing.
    #[inline]
    pub fn register<T: Typed>(&mut self) {
        self.register_info(T::type_info());
    }

    /// Registers the type behind `info`, see [`register`](Self::register).
    pub fn register_info(&mut self, info: &'static TypeInfo) {
        let type_id = info.ty().id();
        if self.type_info_table.contains(&type_id) {
            return;
        }

        self.type_info_table.insert(type_id, info);
        self.type_path_to_id.insert(info.ty().path(), type_id);

        let Ok(class) = info.as_class() else {
            log::debug!("registered primitive `{}`", info.ty());
            return;
        };

        let name = class.name();
        if !self.ambiguous_names.contains(name) {
            if self.class_name_to_id.contains_key(name) {
                log::warn!("class name `{name}` is ambiguous, lookups by this name are disabled");
                self.class_name_to_id.remove(name);
                self.ambiguous_names.insert(name);
            } else {
                self.class_name_to_id.insert(name, type_id);
            }
        }

        log::debug!("registered class `{name}` (`{}`)", info.ty());

        for entry in class {
            match entry {
                EntryInfo::Member(member) => self.register_info(member.type_info()),
                EntryInfo::Function(function) => {
                    for argument in function.arguments() {
                        self.register_info(argument.type_info());
                    }
                }
            }
        }
    }

    /// Registers every type annotated with `#[describe(auto_register)]`.
    ///
    /// Returns `true` if the platform supports it, calling it again is cheap.
    /// Without the `auto_register` feature this does nothing and returns `false`.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        crate::cfg::auto_register! {
            if {
                use crate::__macro_exports::auto_register;
                // Reduce the cost of duplicate registrations.
                if self.auto_registered {
                    return true;
                }
                auto_register::__register_types(self);
                self.auto_registered
            } else {
                false
            }
        }
    }

    /// Returns `true` if the type is registered.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_info_table.contains(&type_id)
    }

    /// Returns `true` if `T` is registered.
    #[inline]
    pub fn contains_type<T: ?Sized + 'static>(&self) -> bool {
        self.type_info_table.contains_type::<T>()
    }

    /// Returns the information of a registered type.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&'static TypeInfo> {
        self.type_info_table.get(&type_id).copied()
    }

    /// Returns the information of the class with display name `name`.
    ///
    /// Returns `None` if the name is [ambiguous](Self::is_ambiguous).
    pub fn get_with_class_name(&self, name: &str) -> Option<&'static TypeInfo> {
        match self.class_name_to_id.get(name) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns the information of the type with full path `type_path`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&'static TypeInfo> {
        match self.type_path_to_id.get(type_path) {
            Some(id) => self.get(*id),
            None => None,
        }
    }

    /// Returns `true` if more than one registered class uses the display name.
    #[inline]
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.ambiguous_names.contains(name)
    }

    /// Iterates over all registered types in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'static TypeInfo> + '_ {
        self.type_info_table.values().copied()
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.type_info_table.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_info_table.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.type_path_to_id.keys()).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeRegistryArc

/// A shared [`TypeRegistry`] behind an [`Arc`] and a [`RwLock`].
///
/// Lock poisoning is ignored, the registry is never left half-updated.
#[derive(Clone, Default)]
pub struct TypeRegistryArc {
    pub internal: Arc<RwLock<TypeRegistry>>,
}

impl TypeRegistryArc {
    /// Takes a read lock on the registry.
    pub fn read(&self) -> RwLockReadGuard<'_, TypeRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the registry.
    pub fn write(&self) -> RwLockWriteGuard<'_, TypeRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for TypeRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::{TypeRegistry, TypeRegistryArc};
    use crate::derive::Describe;

    mod a {
        #[derive(crate::derive::Describe)]
        pub struct Shape {
            pub sides: u8,
        }
    }

    mod b {
        #[derive(crate::derive::Describe)]
        pub struct Shape {
            pub name: String,
        }
    }

    #[derive(Describe)]
    #[describe(function(scale, args(factor)))]
    struct Model {
        shape: a::Shape,
    }

    impl Model {
        fn scale(&mut self, factor: i64) {
            self.shape.sides = (self.shape.sides as i64 * factor) as u8;
        }
    }

    #[test]
    fn primitives_by_default() {
        let registry = TypeRegistry::new();

        assert!(registry.contains_type::<i32>());
        assert!(registry.contains_type::<&'static str>());
        assert!(registry.get_with_type_path("alloc::string::String").is_some());
        assert!(TypeRegistry::empty().is_empty());
    }

    #[test]
    fn registers_reachable_types() {
        let mut registry = TypeRegistry::empty();
        registry.register::<Model>();

        assert!(registry.contains_type::<Model>());
        assert!(registry.contains_type::<a::Shape>());
        assert!(registry.contains_type::<u8>());
        assert!(registry.contains_type::<i64>());
        assert_eq!(registry.len(), 4);

        registry.register::<Model>();
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn ambiguous_class_names() {
        let mut registry = TypeRegistry::new();
        registry.register::<a::Shape>();
        assert!(registry.get_with_class_name("Shape").is_some());

        registry.register::<b::Shape>();
        assert!(registry.is_ambiguous("Shape"));
        assert!(registry.get_with_class_name("Shape").is_none());

        let path = core::any::type_name::<b::Shape>();
        assert!(registry.get_with_type_path(path).is_some());
    }

    #[derive(Describe)]
    #[describe(auto_register)]
    struct Registered {
        id: u32,
    }

    #[test]
    fn auto_register() {
        let mut registry = TypeRegistry::empty();
        let supported = registry.auto_register();

        crate::cfg::auto_register! {
            if {
                assert!(supported);
                assert!(registry.contains_type::<Registered>());
                assert!(registry.contains_type::<u32>());
                assert!(registry.auto_register());
            } else {
                assert!(!supported);
            }
        }
    }

    #[test]
    fn shared_registry() {
        let shared = TypeRegistryArc::default();
        shared.write().register::<Model>();

        let clone = shared.clone();
        assert!(clone.read().contains_type::<a::Shape>());
    }
}
