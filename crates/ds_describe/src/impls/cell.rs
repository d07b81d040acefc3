//! Containers for static storage of type information and descriptors.
//!
//! For non-generic types a cell is an [`OnceLock`], almost free.
//!
//! If the type is generic, the `static CELL` inside the function is shared by
//! every instantiation. Those cells hold a [`TypeIdMap`] wrapped in [`RwLock`]
//! and leak one value per instantiation.

use core::any::{Any, TypeId};
use std::sync::{OnceLock, PoisonError, RwLock};

use ds_utils::TypeIdMap;

use crate::descriptor::ClassDescriptor;
use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// TypeInfo cells

/// Container for static storage of non-generic type information.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct NonGenericTypeInfoCell(OnceLock<TypeInfo>);

impl NonGenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored information, initializing it with `f` if empty.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of type information with generics.
///
/// ## Example
///
/// ```
/// use ds_describe::impls::GenericTypeInfoCell;
/// use ds_describe::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, Typed};
///
/// struct Id<T>(u64, core::marker::PhantomData<T>);
///
/// impl<T: 'static> Typed for Id<T> {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             TypeInfo::Primitive(PrimitiveInfo::new::<Self>(PrimitiveKind::Int))
///         })
///     }
/// }
///
/// assert!(<Id<u8>>::type_info().ty().is::<Id<u8>>());
/// assert!(<Id<char>>::type_info().ty().is::<Id<char>>());
/// ```
pub struct GenericTypeInfoCell(RwLock<TypeIdMap<&'static TypeInfo>>);

impl GenericTypeInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the information stored for `G`, inserting the result of `f`
    /// if there is none yet.
    #[inline(always)]
    pub fn get_or_insert<G: Any + ?Sized>(&self, f: impl FnOnce() -> TypeInfo) -> &TypeInfo {
        // Separate to reduce code compilation times
        self.get_or_insert_by_type_id(TypeId::of::<G>(), f)
    }

    #[inline(never)]
    fn get_or_insert_by_type_id(
        &self,
        type_id: TypeId,
        f: impl FnOnce() -> TypeInfo,
    ) -> &TypeInfo {
        let found = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        match found {
            Some(info) => info,
            // `f` runs without the lock held, it may initialize nested types.
            None => {
                let info = f();
                *self
                    .0
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert(type_id, || Box::leak(Box::new(info)))
            }
        }
    }
}

// -----------------------------------------------------------------------------
// Descriptor cells

/// Container for static storage of a non-generic class descriptor.
///
/// See [`Typed`](crate::info::Typed) for an example.
pub struct NonGenericDescriptorCell<O: 'static>(OnceLock<ClassDescriptor<O>>);

impl<O: 'static> NonGenericDescriptorCell<O> {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored descriptor, building it with `f` if empty.
    #[inline]
    pub fn get_or_init(&self, f: impl FnOnce() -> ClassDescriptor<O>) -> &ClassDescriptor<O> {
        self.0.get_or_init(f)
    }
}

/// Container for static storage of class descriptors with generics.
///
/// Usually generated by [`#[derive(Describe)]`](crate::derive::Describe).
///
/// ## Example
///
/// ```
/// use ds_describe::{Describe, derive::Describe};
///
/// #[derive(Describe)]
/// struct Pair<T> {
///     first: T,
///     second: T,
/// }
///
/// let a = <Pair<u8>>::class_descriptor();
/// let b = <Pair<bool>>::class_descriptor();
///
/// assert!(a.info().ty().is::<Pair<u8>>());
/// assert!(b.info().ty().is::<Pair<bool>>());
/// ```
pub struct GenericDescriptorCell(RwLock<TypeIdMap<&'static (dyn Any + Send + Sync)>>);

impl GenericDescriptorCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(RwLock::new(TypeIdMap::new()))
    }

    /// Returns the descriptor stored for `O`, inserting the result of `f`
    /// if there is none yet.
    pub fn get_or_insert<O: 'static>(
        &self,
        f: impl FnOnce() -> ClassDescriptor<O>,
    ) -> &'static ClassDescriptor<O> {
        let type_id = TypeId::of::<O>();

        let found = self
            .0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied();

        let stored = match found {
            Some(stored) => stored,
            None => {
                let descriptor = f();
                *self
                    .0
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_or_insert(type_id, || Box::leak(Box::new(descriptor)))
            }
        };

        stored
            .downcast_ref()
            .expect("descriptor cell entries are keyed by their owner's `TypeId`")
    }
}
