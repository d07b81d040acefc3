//! Descriptors: names bound to typed accessors of a class.
//!
//! - [`MemberDescriptor`]: a data member, bound through a [`MemberAccessor`].
//! - [`MemberFunctionDescriptor`]: a member function and its parameter names.
//! - [`DescriptorEntry`]: either of the above, type-erased except for the owner.
//! - [`ClassDescriptor`]: the ordered entries of one class.
//! - [`Descriptor`]: builds a [`ClassDescriptor`] from a list of entries.
//!
//! Malformed descriptors are rejected at compile time.
//!
//! A member type that is neither primitive nor described:
//!
//! ```compile_fail
//! use ds_describe::{member, descriptor::Descriptor};
//!
//! struct Foo {
//!     bytes: Vec<u8>,
//! }
//!
//! let _ = Descriptor::class::<Foo>("Foo").member(member!(Foo, bytes), "bytes");
//! ```
//!
//! An accessor of another owner type:
//!
//! ```compile_fail
//! use ds_describe::{member, descriptor::Descriptor};
//!
//! struct Foo {
//!     a: i32,
//! }
//!
//! struct Bar {
//!     b: i32,
//! }
//!
//! let _ = Descriptor::make_class_descriptor::<Foo, _>(
//!     "Foo",
//!     ((member!(Foo, a), "a"), (member!(Bar, b), "b")),
//! );
//! ```
//!
//! An entry of the wrong shape, here an accessor with argument names:
//!
//! ```compile_fail
//! use ds_describe::{member, descriptor::Descriptor};
//!
//! struct Foo {
//!     a: i32,
//! }
//!
//! let _ = Descriptor::make_class_descriptor::<Foo, _>("Foo", ((member!(Foo, a), "a", ["x"]),));
//! ```
//!
//! or a function without them:
//!
//! ```compile_fail
//! use ds_describe::descriptor::Descriptor;
//!
//! struct Foo;
//!
//! impl Foo {
//!     fn get(&self) -> i32 {
//!         1
//!     }
//! }
//!
//! let _ = Descriptor::make_class_descriptor::<Foo, _>("Foo", ((Foo::get, "get"),));
//! ```
//!
//! A parameter-name array whose length differs from the function's arity:
//!
//! ```compile_fail
//! use ds_describe::descriptor::Descriptor;
//!
//! struct Foo;
//!
//! impl Foo {
//!     fn add(&self, a: i32, b: i32) -> i32 {
//!         a + b
//!     }
//! }
//!
//! // Two parameters, one name.
//! let _ = Descriptor::class::<Foo>("Foo").function(Foo::add, "add", ["a"]);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod class;
mod entry;
mod error;
mod function;
mod member;

// -----------------------------------------------------------------------------
// Exports

pub use builder::{ClassDescriptorBuilder, Descriptor, EntryList, IntoEntry};
pub use builder::{FunctionEntry, MemberEntry};
pub use class::ClassDescriptor;
pub use entry::{DescriptorEntry, ErasedFunction, ErasedMember};
pub use error::DescribeError;
pub use function::{Arguments, Exclusive, MemberFunction, Shared};
pub use function::{MemberFunctionDescriptor, Receiver};
pub use member::{MemberAccessor, MemberDescriptor};
