use thiserror::Error;

use crate::info::EntryKind;

/// An error occurred when an entry of a
/// [`ClassDescriptor`](crate::descriptor::ClassDescriptor) is looked up by name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescribeError {
    #[error("class `{class}` has no entry named `{name}`")]
    MissingEntry { class: &'static str, name: String },
    #[error("entry `{name}` of class `{class}` is a {found}, not a {expected}")]
    EntryKind {
        class: &'static str,
        name: &'static str,
        expected: EntryKind,
        found: EntryKind,
    },
    #[error("entry `{name}` of class `{class}` does not match the requested type `{expected}`")]
    TypeMismatch {
        class: &'static str,
        name: &'static str,
        expected: &'static str,
    },
}
