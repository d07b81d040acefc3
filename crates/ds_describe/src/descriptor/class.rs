use core::any::type_name;
use core::fmt;

use ds_utils::hash::{FixedHashState, HashSet};

use crate::Value;
use crate::descriptor::{Arguments, DescribeError, DescriptorEntry};
use crate::descriptor::{MemberDescriptor, MemberFunctionDescriptor};
use crate::info::{ClassInfo, EntryKind, Typed};

// -----------------------------------------------------------------------------
// ClassDescriptor

/// The ordered descriptor table of class `O`.
///
/// Entry order is declaration order, which is also serialization order.
/// A class owns exactly one table, returned by
/// [`Describe::class_descriptor`](crate::Describe::class_descriptor).
///
/// Entry names are expected to be unique. Duplicates are reported with
/// `log::warn!`, lookups by name then return the first entry.
///
/// # Examples
///
/// ```
/// use ds_describe::{member, descriptor::{DescribeError, Descriptor}};
///
/// struct Light {
///     on: bool,
///     level: u8,
/// }
///
/// impl Light {
///     fn toggle(&mut self) -> bool {
///         self.on = !self.on;
///         self.on
///     }
/// }
///
/// let descriptor = Descriptor::class::<Light>("Light")
///     .member(member!(Light, on), "on")
///     .member(member!(Light, level), "level")
///     .function(Light::toggle, "toggle", [])
///     .build();
///
/// let mut light = Light { on: false, level: 3 };
///
/// descriptor.set(&mut light, "level", 7_u8).unwrap();
/// assert_eq!(descriptor.invoke::<(), bool>(&mut light, "toggle", ()), Ok(true));
/// assert_eq!(descriptor.get::<bool>(&light, "on"), Ok(&true));
/// assert_eq!(light.level, 7);
///
/// assert!(matches!(
///     descriptor.get::<u8>(&light, "toggle"),
///     Err(DescribeError::EntryKind { .. }),
/// ));
/// ```
pub struct ClassDescriptor<O> {
    name: &'static str,
    entries: Box<[DescriptorEntry<O>]>,
    info: ClassInfo,
}

impl<O: 'static> ClassDescriptor<O> {
    /// Creates a descriptor table from entries in declaration order.
    pub fn new(name: &'static str, entries: Vec<DescriptorEntry<O>>) -> Self {
        let mut seen = HashSet::with_capacity_and_hasher(entries.len(), FixedHashState);
        for entry in &entries {
            if !seen.insert(entry.name()) {
                log::warn!(
                    "class `{name}` has more than one entry named `{}`, lookups return the first",
                    entry.name(),
                );
            }
        }

        let info = ClassInfo::new::<O>(name, entries.iter().map(DescriptorEntry::info).collect());

        Self {
            name,
            entries: entries.into_boxed_slice(),
            info,
        }
    }

    /// Returns the class display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of entries, members and functions together.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in declaration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, DescriptorEntry<O>> {
        self.entries.iter()
    }

    /// Returns the [`ClassInfo`] built from the entries.
    #[inline]
    pub const fn info(&self) -> &ClassInfo {
        &self.info
    }

    /// Returns the first entry named `name`.
    pub fn entry(&self, name: &str) -> Option<&DescriptorEntry<O>> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Returns the entry at `index`.
    #[inline]
    pub fn entry_at(&self, index: usize) -> Option<&DescriptorEntry<O>> {
        self.entries.get(index)
    }

    /// Returns the member named `name` if it has type `V`.
    pub fn member<V: Value + Typed>(&self, name: &str) -> Option<&MemberDescriptor<O, V>> {
        self.entry(name)?.as_member()
    }

    /// Returns the function named `name` if it takes `A` and returns `R`.
    pub fn function<A: Arguments, R: 'static>(
        &self,
        name: &str,
    ) -> Option<&MemberFunctionDescriptor<O, A, R>> {
        self.entry(name)?.as_function()
    }

    fn find(&self, name: &str, expected: EntryKind) -> Result<&DescriptorEntry<O>, DescribeError> {
        let entry = self.entry(name).ok_or_else(|| DescribeError::MissingEntry {
            class: self.name,
            name: name.to_owned(),
        })?;

        if entry.kind() != expected {
            return Err(DescribeError::EntryKind {
                class: self.name,
                name: entry.name(),
                expected,
                found: entry.kind(),
            });
        }

        Ok(entry)
    }

    fn mismatch<T: ?Sized>(&self, entry: &DescriptorEntry<O>) -> DescribeError {
        DescribeError::TypeMismatch {
            class: self.name,
            name: entry.name(),
            expected: type_name::<T>(),
        }
    }

    /// Borrows the member `name` of `instance`.
    pub fn get<'a, V: Value + Typed>(
        &self,
        instance: &'a O,
        name: &str,
    ) -> Result<&'a V, DescribeError> {
        let entry = self.find(name, EntryKind::Member)?;
        match entry.as_member::<V>() {
            Some(member) => Ok(member.get(instance)),
            None => Err(self.mismatch::<V>(entry)),
        }
    }

    /// Overwrites the member `name` of `instance`.
    pub fn set<V: Value + Typed>(
        &self,
        instance: &mut O,
        name: &str,
        value: V,
    ) -> Result<(), DescribeError> {
        let entry = self.find(name, EntryKind::Member)?;
        match entry.as_member::<V>() {
            Some(member) => {
                member.set_value(instance, value);
                Ok(())
            }
            None => Err(self.mismatch::<V>(entry)),
        }
    }

    /// Invokes the function `name` on `instance`.
    ///
    /// The function's own return value, `Result`s included, is forwarded
    /// unchanged inside `Ok`.
    pub fn invoke<A: Arguments, R: 'static>(
        &self,
        instance: &mut O,
        name: &str,
        args: A,
    ) -> Result<R, DescribeError> {
        let entry = self.find(name, EntryKind::Function)?;
        match entry.as_function::<A, R>() {
            Some(function) => Ok(function.call(instance, args)),
            None => Err(self.mismatch::<fn(A) -> R>(entry)),
        }
    }
}

impl<'a, O> IntoIterator for &'a ClassDescriptor<O> {
    type Item = &'a DescriptorEntry<O>;
    type IntoIter = core::slice::Iter<'a, DescriptorEntry<O>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<O: 'static> fmt::Debug for ClassDescriptor<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDescriptor")
            .field("name", &self.name)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::{DescribeError, Descriptor};
    use crate::info::EntryKind;
    use crate::member;

    struct Sample {
        a: i32,
        b: String,
    }

    impl Sample {
        fn concat(&self, suffix: String) -> String {
            format!("{}{suffix}", self.b)
        }
    }

    fn sample() -> crate::descriptor::ClassDescriptor<Sample> {
        Descriptor::class::<Sample>("Sample")
            .member(member!(Sample, a), "a")
            .function(Sample::concat, "concat", ["suffix"])
            .member(member!(Sample, b), "b")
            .build()
    }

    #[test]
    fn keeps_declaration_order() {
        let descriptor = sample();
        let names = descriptor.iter().map(|e| e.name()).collect::<Vec<_>>();

        assert_eq!(names, ["a", "concat", "b"]);
        assert_eq!(descriptor.info().len(), 3);
        assert_eq!(descriptor.entry_at(1).unwrap().kind(), EntryKind::Function);
    }

    #[test]
    fn missing_entry() {
        let descriptor = sample();
        let value = Sample { a: 1, b: String::new() };

        let err = descriptor.get::<i32>(&value, "c").unwrap_err();
        assert_eq!(
            err,
            DescribeError::MissingEntry {
                class: "Sample",
                name: "c".to_owned()
            }
        );
        assert_eq!(err.to_string(), "class `Sample` has no entry named `c`");
    }

    #[test]
    fn type_mismatch() {
        let descriptor = sample();
        let mut value = Sample { a: 1, b: String::new() };

        assert!(matches!(
            descriptor.set(&mut value, "a", 1_u8),
            Err(DescribeError::TypeMismatch { name: "a", .. })
        ));
        assert!(matches!(
            descriptor.invoke::<(i32,), String>(&mut value, "concat", (1,)),
            Err(DescribeError::TypeMismatch { name: "concat", .. })
        ));
        assert_eq!(value.a, 1);
    }

    #[test]
    fn typed_lookups() {
        let descriptor = sample();
        let mut value = Sample { a: 1, b: "x".to_owned() };

        assert!(descriptor.member::<i32>("a").is_some());
        assert!(descriptor.member::<u32>("a").is_none());
        assert!(descriptor.function::<(String,), String>("concat").is_some());

        let out = descriptor.invoke::<(String,), String>(&mut value, "concat", ("y".to_owned(),));
        assert_eq!(out.as_deref(), Ok("xy"));
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let descriptor = Descriptor::class::<Sample>("Sample")
            .member(member!(Sample, a), "v")
            .member(member!(Sample, b), "v")
            .build();
        let value = Sample { a: 5, b: String::new() };

        assert_eq!(descriptor.len(), 2);
        assert_eq!(descriptor.get::<i32>(&value, "v"), Ok(&5));
    }

    #[test]
    fn debug_lists_entries() {
        assert_eq!(
            format!("{:?}", sample()),
            r#"ClassDescriptor { name: "Sample", entries: [Member("a"), Function("concat", ["suffix"]), Member("b")] }"#
        );
    }
}
