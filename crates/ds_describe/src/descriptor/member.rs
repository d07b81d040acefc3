use core::fmt;

use crate::Value;
use crate::info::{MemberInfo, Typed};

// -----------------------------------------------------------------------------
// MemberAccessor

/// A compile-time binding to one field of `O`.
///
/// Holds a pair of function pointers, never a pointer into an instance.
/// Usually created with [`member!`](crate::member).
pub struct MemberAccessor<O, V> {
    get: fn(&O) -> &V,
    get_mut: fn(&mut O) -> &mut V,
}

impl<O, V> MemberAccessor<O, V> {
    /// Creates an accessor from a shared and an exclusive projection.
    #[inline]
    pub const fn new(get: fn(&O) -> &V, get_mut: fn(&mut O) -> &mut V) -> Self {
        Self { get, get_mut }
    }

    /// Projects `owner` onto the field.
    #[inline]
    pub fn get<'a>(&self, owner: &'a O) -> &'a V {
        (self.get)(owner)
    }

    /// Projects `owner` onto the field, mutably.
    #[inline]
    pub fn get_mut<'a>(&self, owner: &'a mut O) -> &'a mut V {
        (self.get_mut)(owner)
    }
}

impl<O, V> Clone for MemberAccessor<O, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<O, V> Copy for MemberAccessor<O, V> {}

/// Creates a [`MemberAccessor`](crate::descriptor::MemberAccessor) for a
/// named field.
///
/// # Examples
///
/// ```
/// use ds_describe::member;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let y = member!(Point, y);
/// let mut p = Point { x: 1, y: 2 };
///
/// *y.get_mut(&mut p) += 1;
///
/// assert_eq!(*y.get(&p), 3);
/// assert_eq!(p.x, 1);
/// ```
#[macro_export]
macro_rules! member {
    ($owner:ty, $field:ident) => {
        $crate::descriptor::MemberAccessor::<$owner, _>::new(
            |owner| &owner.$field,
            |owner| &mut owner.$field,
        )
    };
}

// -----------------------------------------------------------------------------
// MemberDescriptor

/// Binds a [`MemberAccessor`] to a display name.
///
/// `V` must be a primitive or a described class, anything else fails to
/// compile.
///
/// # Examples
///
/// ```
/// use ds_describe::{descriptor::MemberDescriptor, member};
///
/// struct Flags {
///     visible: bool,
/// }
///
/// let visible = MemberDescriptor::new(member!(Flags, visible), "visible");
/// let mut flags = Flags { visible: false };
///
/// visible.set_value(&mut flags, true);
///
/// assert_eq!(visible.name(), "visible");
/// assert!(visible.get_value(&flags));
/// ```
pub struct MemberDescriptor<O, V> {
    name: &'static str,
    accessor: MemberAccessor<O, V>,
}

impl<O, V: Value + Typed> MemberDescriptor<O, V> {
    /// Binds `accessor` to `name`.
    #[inline]
    pub const fn new(accessor: MemberAccessor<O, V>, name: &'static str) -> Self {
        Self { name, accessor }
    }

    /// Returns the display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the accessor.
    #[inline]
    pub const fn accessor(&self) -> MemberAccessor<O, V> {
        self.accessor
    }

    /// Borrows the member of `instance`.
    #[inline]
    pub fn get<'a>(&self, instance: &'a O) -> &'a V {
        self.accessor.get(instance)
    }

    /// Returns a copy of the member of `instance`.
    #[inline]
    pub fn get_value(&self, instance: &O) -> V
    where
        V: Clone,
    {
        self.accessor.get(instance).clone()
    }

    /// Borrows the member of `instance` mutably.
    #[inline]
    pub fn get_mut<'a>(&self, instance: &'a mut O) -> &'a mut V {
        self.accessor.get_mut(instance)
    }

    /// Overwrites the member of `instance`.
    #[inline]
    pub fn set_value(&self, instance: &mut O, value: V) {
        *self.accessor.get_mut(instance) = value;
    }

    /// Returns the [`MemberInfo`] of this member.
    #[inline]
    pub fn info(&self) -> MemberInfo {
        MemberInfo::new::<V>(self.name)
    }
}

impl<O, V> fmt::Debug for MemberDescriptor<O, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberDescriptor")
            .field("name", &self.name)
            .field("type", &core::any::type_name::<V>())
            .finish()
    }
}
