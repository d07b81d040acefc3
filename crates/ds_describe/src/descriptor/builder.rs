use core::marker::PhantomData;

use crate::Value;
use crate::descriptor::{Arguments, ClassDescriptor, DescriptorEntry, MemberFunction};
use crate::descriptor::{MemberAccessor, MemberDescriptor, MemberFunctionDescriptor};
use crate::info::Typed;

// -----------------------------------------------------------------------------
// Descriptor

/// Factory of [`ClassDescriptor`]s.
///
/// Two forms are available, both keep entries in the given order:
///
/// - [`Descriptor::class`] returns a chained [`ClassDescriptorBuilder`].
/// - [`Descriptor::make_class_descriptor`] takes a tuple of entries and infers
///   the kind of each one from its shape: `(accessor, name)` is a data member,
///   `(function, name, [argument names])` is a member function.
///
/// # Examples
///
/// ```
/// use ds_describe::{member, descriptor::Descriptor};
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Point {
///     fn dot(&self, x: i32, y: i32) -> i32 {
///         self.x * x + self.y * y
///     }
/// }
///
/// let descriptor = Descriptor::make_class_descriptor(
///     "Point",
///     (
///         (member!(Point, x), "x"),
///         (member!(Point, y), "y"),
///         (Point::dot, "dot", ["x", "y"]),
///     ),
/// );
///
/// let mut p = Point { x: 1, y: 2 };
///
/// assert_eq!(descriptor.len(), 3);
/// assert_eq!(descriptor.invoke::<(i32, i32), i32>(&mut p, "dot", (3, 4)), Ok(11));
/// ```
pub struct Descriptor;

impl Descriptor {
    /// Starts a chained builder for class `O` named `name`.
    #[inline]
    pub fn class<O: 'static>(name: &'static str) -> ClassDescriptorBuilder<O> {
        ClassDescriptorBuilder {
            name,
            entries: Vec::new(),
        }
    }

    /// Builds a [`ClassDescriptor`] from a tuple of up to 16 entries.
    ///
    /// See [`IntoEntry`] for the accepted entry shapes.
    pub fn make_class_descriptor<O: 'static, M>(
        name: &'static str,
        entries: impl EntryList<O, M>,
    ) -> ClassDescriptor<O> {
        ClassDescriptor::new(name, entries.into_entries())
    }
}

// -----------------------------------------------------------------------------
// ClassDescriptorBuilder

/// Chained builder created by [`Descriptor::class`].
pub struct ClassDescriptorBuilder<O> {
    name: &'static str,
    entries: Vec<DescriptorEntry<O>>,
}

impl<O: 'static> ClassDescriptorBuilder<O> {
    /// Appends a data member.
    pub fn member<V: Value + Typed>(
        mut self,
        accessor: MemberAccessor<O, V>,
        name: &'static str,
    ) -> Self {
        let member = MemberDescriptor::new(accessor, name);
        self.entries.push(DescriptorEntry::member(member));
        self
    }

    /// Appends a member function with one name per parameter.
    pub fn function<F, M, const N: usize>(
        mut self,
        function: F,
        name: &'static str,
        argument_names: [&'static str; N],
    ) -> Self
    where
        F: MemberFunction<O, M>,
        F::Arguments: Arguments<Names = [&'static str; N]>,
    {
        let function = MemberFunctionDescriptor::new(function, name, argument_names);
        self.entries.push(DescriptorEntry::function(function));
        self
    }

    /// Appends any entry accepted by [`IntoEntry`].
    pub fn entry<M>(mut self, entry: impl IntoEntry<O, M>) -> Self {
        self.entries.push(entry.into_entry());
        self
    }

    /// Finishes the table.
    #[inline]
    pub fn build(self) -> ClassDescriptor<O> {
        ClassDescriptor::new(self.name, self.entries)
    }
}

// -----------------------------------------------------------------------------
// IntoEntry

/// Marker of `(MemberAccessor, name)` entries.
pub struct MemberEntry;

/// Marker of `(function, name, [argument names])` entries.
pub struct FunctionEntry<M>(PhantomData<M>);

/// A value convertible into a [`DescriptorEntry`] of class `O`.
///
/// - `(MemberAccessor<O, V>, &'static str)` becomes a data member.
/// - `(F, &'static str, [&'static str; N])` becomes a member function, where
///   `N` must equal the arity of `F`.
/// - A [`DescriptorEntry`] is passed through.
pub trait IntoEntry<O, Marker> {
    fn into_entry(self) -> DescriptorEntry<O>;
}

impl<O, V> IntoEntry<O, MemberEntry> for (MemberAccessor<O, V>, &'static str)
where
    O: 'static,
    V: Value + Typed,
{
    #[inline]
    fn into_entry(self) -> DescriptorEntry<O> {
        DescriptorEntry::member(MemberDescriptor::new(self.0, self.1))
    }
}

impl<O, F, M, const N: usize> IntoEntry<O, FunctionEntry<M>>
    for (F, &'static str, [&'static str; N])
where
    O: 'static,
    F: MemberFunction<O, M>,
    F::Arguments: Arguments<Names = [&'static str; N]>,
{
    #[inline]
    fn into_entry(self) -> DescriptorEntry<O> {
        DescriptorEntry::function(MemberFunctionDescriptor::new(self.0, self.1, self.2))
    }
}

impl<O> IntoEntry<O, ()> for DescriptorEntry<O> {
    #[inline]
    fn into_entry(self) -> DescriptorEntry<O> {
        self
    }
}

// -----------------------------------------------------------------------------
// EntryList

/// A tuple of up to 16 [`IntoEntry`] values.
pub trait EntryList<O, Marker> {
    fn into_entries(self) -> Vec<DescriptorEntry<O>>;
}

macro_rules! impl_entry_list {
    ($(($e:ident, $m:ident, $i:tt)),*) => {
        impl<O, $($e, $m),*> EntryList<O, ($($m,)*)> for ($($e,)*)
        where
            $($e: IntoEntry<O, $m>,)*
        {
            #[inline]
            fn into_entries(self) -> Vec<DescriptorEntry<O>> {
                vec![$(self.$i.into_entry()),*]
            }
        }
    };
}

impl_entry_list!();
impl_entry_list!((E0, M0, 0));
impl_entry_list!((E0, M0, 0), (E1, M1, 1));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9), (E10, M10, 10));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9), (E10, M10, 10), (E11, M11, 11));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9), (E10, M10, 10), (E11, M11, 11), (E12, M12, 12));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9), (E10, M10, 10), (E11, M11, 11), (E12, M12, 12), (E13, M13, 13));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9), (E10, M10, 10), (E11, M11, 11), (E12, M12, 12), (E13, M13, 13), (E14, M14, 14));
impl_entry_list!((E0, M0, 0), (E1, M1, 1), (E2, M2, 2), (E3, M3, 3), (E4, M4, 4), (E5, M5, 5), (E6, M6, 6), (E7, M7, 7), (E8, M8, 8), (E9, M9, 9), (E10, M10, 10), (E11, M11, 11), (E12, M12, 12), (E13, M13, 13), (E14, M14, 14), (E15, M15, 15));

#[cfg(test)]
mod tests {
    use crate::descriptor::{Descriptor, DescriptorEntry, MemberDescriptor};
    use crate::info::EntryKind;
    use crate::member;

    struct Rect {
        w: u32,
        h: u32,
    }

    impl Rect {
        fn area(&self) -> u32 {
            self.w * self.h
        }

        fn resize(&mut self, w: u32, h: u32) {
            self.w = w;
            self.h = h;
        }
    }

    #[test]
    fn infers_entry_kinds() {
        let descriptor = Descriptor::make_class_descriptor(
            "Rect",
            (
                (member!(Rect, w), "w"),
                (Rect::area, "area", []),
                (member!(Rect, h), "h"),
                (Rect::resize, "resize", ["w", "h"]),
            ),
        );

        let kinds = descriptor.iter().map(|e| e.kind()).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            [EntryKind::Member, EntryKind::Function, EntryKind::Member, EntryKind::Function]
        );

        let mut rect = Rect { w: 2, h: 3 };
        descriptor
            .invoke::<(u32, u32), ()>(&mut rect, "resize", (4, 5))
            .unwrap();
        assert_eq!(descriptor.invoke::<(), u32>(&mut rect, "area", ()), Ok(20));
    }

    #[test]
    fn builder_matches_tuple_form() {
        let chained = Descriptor::class::<Rect>("Rect")
            .member(member!(Rect, w), "w")
            .entry((member!(Rect, h), "h"))
            .entry(DescriptorEntry::member(MemberDescriptor::new(member!(Rect, w), "width")))
            .function(Rect::area, "area", [])
            .build();

        let names = chained.iter().map(|e| e.name()).collect::<Vec<_>>();
        assert_eq!(names, ["w", "h", "width", "area"]);
        assert_eq!(chained.name(), "Rect");
    }

    #[test]
    fn empty_class() {
        let descriptor = Descriptor::make_class_descriptor::<Rect, _>("Empty", ());
        assert!(descriptor.is_empty());
        assert!(descriptor.info().is_empty());
    }
}
