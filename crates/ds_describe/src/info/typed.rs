use crate::info::TypeInfo;

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented for the primitive types and by
/// [`#[derive(Describe)]`](crate::derive::Describe).
///
/// # Examples
///
/// ```
/// use ds_describe::{derive::Describe, info::Typed};
///
/// #[derive(Describe)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let info = Point::type_info().as_class().unwrap();
///
/// assert_eq!(info.name(), "Point");
/// assert_eq!(info.len(), 2);
/// ```
///
/// # Manually Impl
///
/// A described class can forward to its descriptor, cached in a
/// [`NonGenericTypeInfoCell`]:
///
/// ```
/// use ds_describe::{Describe, Value, ValueRef, member};
/// use ds_describe::descriptor::{ClassDescriptor, Descriptor};
/// use ds_describe::impls::{NonGenericDescriptorCell, NonGenericTypeInfoCell};
/// use ds_describe::info::{TypeInfo, Typed};
///
/// struct Counter {
///     count: u32,
/// }
///
/// impl Typed for Counter {
///     fn type_info() -> &'static TypeInfo {
///         static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
///         CELL.get_or_init(|| TypeInfo::Class(Counter::class_descriptor().info()))
///     }
/// }
///
/// impl Describe for Counter {
///     fn class_descriptor() -> &'static ClassDescriptor<Self> {
///         static CELL: NonGenericDescriptorCell<Counter> = NonGenericDescriptorCell::new();
///         CELL.get_or_init(|| {
///             Descriptor::class::<Counter>("Counter")
///                 .member(member!(Counter, count), "count")
///                 .build()
///         })
///     }
/// }
///
/// impl Value for Counter {
///     fn value_ref(&self) -> ValueRef<'_> {
///         ValueRef::Object(self)
///     }
///
///     fn as_any(&self) -> &dyn core::any::Any {
///         self
///     }
/// }
///
/// assert_eq!(Counter::type_info().type_name(), "Counter");
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::impls::NonGenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the type information of `Self`.
    ///
    /// Use [`DynamicTyped`] for dynamic dispatch.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`].
///
/// Implemented for every type that implements [`Typed`].
pub trait DynamicTyped {
    /// Returns the type information of the concrete type behind `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ds_describe::{Value, info::PrimitiveKind};
    ///
    /// let value: &dyn Value = &'x';
    /// let info = value.dynamic_type_info().as_primitive().unwrap();
    ///
    /// assert_eq!(info.kind(), PrimitiveKind::Char);
    /// ```
    fn dynamic_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn dynamic_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
