use core::any::Any;

use crate::Value;
use crate::descriptor::{Arguments, MemberDescriptor, MemberFunctionDescriptor};
use crate::info::{EntryInfo, EntryKind, FunctionInfo, MemberInfo, Typed};

// -----------------------------------------------------------------------------
// Erased traits

/// A [`MemberDescriptor`] of owner `O` with the member type erased.
pub trait ErasedMember<O>: Send + Sync + 'static {
    /// Returns the display name.
    fn name(&self) -> &'static str;

    /// Borrows the member of `owner` as a [`Value`].
    fn value<'a>(&self, owner: &'a O) -> &'a dyn Value;

    /// Returns the [`MemberInfo`] of the member.
    fn info(&self) -> MemberInfo;

    /// Returns `self` as `&dyn Any`, for downcasting to the concrete descriptor.
    fn as_any(&self) -> &dyn Any;
}

impl<O: 'static, V: Value + Typed> ErasedMember<O> for MemberDescriptor<O, V> {
    #[inline]
    fn name(&self) -> &'static str {
        MemberDescriptor::name(self)
    }

    #[inline]
    fn value<'a>(&self, owner: &'a O) -> &'a dyn Value {
        self.get(owner)
    }

    #[inline]
    fn info(&self) -> MemberInfo {
        MemberDescriptor::info(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A [`MemberFunctionDescriptor`] of owner `O` with the signature erased.
pub trait ErasedFunction<O>: Send + Sync + 'static {
    /// Returns the display name.
    fn name(&self) -> &'static str;

    /// Returns all parameter names in order.
    fn argument_names(&self) -> &[&'static str];

    /// Returns the [`FunctionInfo`] of the function.
    fn info(&self) -> FunctionInfo;

    /// Returns `self` as `&dyn Any`, for downcasting to the concrete descriptor.
    fn as_any(&self) -> &dyn Any;
}

impl<O: 'static, A: Arguments, R: 'static> ErasedFunction<O> for MemberFunctionDescriptor<O, A, R> {
    #[inline]
    fn name(&self) -> &'static str {
        MemberFunctionDescriptor::name(self)
    }

    #[inline]
    fn argument_names(&self) -> &[&'static str] {
        MemberFunctionDescriptor::argument_names(self)
    }

    #[inline]
    fn info(&self) -> FunctionInfo {
        MemberFunctionDescriptor::info(self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

// -----------------------------------------------------------------------------
// DescriptorEntry

/// One entry of a [`ClassDescriptor`](crate::descriptor::ClassDescriptor).
///
/// The tag is what the serializer dispatches on: members are serialized,
/// functions are skipped.
pub enum DescriptorEntry<O> {
    Member(Box<dyn ErasedMember<O>>),
    Function(Box<dyn ErasedFunction<O>>),
}

impl<O: 'static> DescriptorEntry<O> {
    /// Wraps a [`MemberDescriptor`].
    #[inline]
    pub fn member<V: Value + Typed>(descriptor: MemberDescriptor<O, V>) -> Self {
        Self::Member(Box::new(descriptor))
    }

    /// Wraps a [`MemberFunctionDescriptor`].
    #[inline]
    pub fn function<A: Arguments, R: 'static>(
        descriptor: MemberFunctionDescriptor<O, A, R>,
    ) -> Self {
        Self::Function(Box::new(descriptor))
    }

    /// Returns the display name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Member(member) => member.name(),
            Self::Function(function) => function.name(),
        }
    }

    /// Returns the [`EntryKind`].
    #[inline]
    pub const fn kind(&self) -> EntryKind {
        match self {
            Self::Member(_) => EntryKind::Member,
            Self::Function(_) => EntryKind::Function,
        }
    }

    /// Downcasts to a member of type `V`.
    ///
    /// Returns `None` for functions and for members of another type.
    pub fn as_member<V: Value + Typed>(&self) -> Option<&MemberDescriptor<O, V>> {
        match self {
            Self::Member(member) => member.as_any().downcast_ref(),
            Self::Function(_) => None,
        }
    }

    /// Downcasts to a function taking `A` and returning `R`.
    ///
    /// Returns `None` for members and for functions of another signature.
    pub fn as_function<A: Arguments, R: 'static>(
        &self,
    ) -> Option<&MemberFunctionDescriptor<O, A, R>> {
        match self {
            Self::Function(function) => function.as_any().downcast_ref(),
            Self::Member(_) => None,
        }
    }

    /// Borrows the member of `owner`, or `None` for functions.
    #[inline]
    pub fn member_value<'a>(&self, owner: &'a O) -> Option<&'a dyn Value> {
        match self {
            Self::Member(member) => Some(member.value(owner)),
            Self::Function(_) => None,
        }
    }

    /// Returns the [`EntryInfo`] of the entry.
    pub fn info(&self) -> EntryInfo {
        match self {
            Self::Member(member) => EntryInfo::Member(member.info()),
            Self::Function(function) => EntryInfo::Function(function.info()),
        }
    }
}

impl<O: 'static> core::fmt::Debug for DescriptorEntry<O> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Member(member) => f.debug_tuple("Member").field(&member.name()).finish(),
            Self::Function(function) => f
                .debug_tuple("Function")
                .field(&function.name())
                .field(&function.argument_names())
                .finish(),
        }
    }
}
