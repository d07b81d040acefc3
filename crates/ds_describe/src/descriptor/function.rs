use core::fmt;

use crate::info::{ArgumentInfo, FunctionInfo, Type, Typed};

// -----------------------------------------------------------------------------
// Arguments

/// A tuple of member function parameters, up to 8 elements.
///
/// `Names` is an array with one name per parameter, so a wrong number of
/// parameter names is a type error.
pub trait Arguments: Sized + 'static {
    /// `[&'static str; N]` where `N` is the arity.
    type Names: AsRef<[&'static str]> + Copy + Send + Sync + 'static;

    /// The arity.
    const COUNT: usize;

    /// Builds the [`ArgumentInfo`] of every parameter, in order.
    fn argument_infos(names: &Self::Names) -> Box<[ArgumentInfo]>;
}

macro_rules! impl_arguments {
    ($n:literal: [$($i:tt: $p:ident),*]) => {
        impl<$($p: Typed),*> Arguments for ($($p,)*) {
            type Names = [&'static str; $n];

            const COUNT: usize = $n;

            #[allow(unused_variables, reason = "unused for the empty tuple")]
            fn argument_infos(names: &Self::Names) -> Box<[ArgumentInfo]> {
                Box::new([$(ArgumentInfo::new::<$p>(names[$i])),*])
            }
        }
    };
}

ds_utils::range_invoke!(impl_arguments, 8: P);

// -----------------------------------------------------------------------------
// MemberFunction

/// Marker for functions taking `&self`.
pub struct Shared;

/// Marker for functions taking `&mut self`.
pub struct Exclusive;

/// A boxed member function, tagged with its receiver.
pub enum Receiver<O, A, R> {
    Shared(Box<dyn Fn(&O, A) -> R + Send + Sync>),
    Exclusive(Box<dyn Fn(&mut O, A) -> R + Send + Sync>),
}

/// A function callable as a member function of `O`.
///
/// Implemented for every `Fn(&O, P0, ..) -> R` and `Fn(&mut O, P0, ..) -> R`
/// with up to 8 parameters, method paths such as `Point::shift` included.
/// `Marker` only keeps the implementations apart and is always inferred.
pub trait MemberFunction<O, Marker>: Send + Sync + 'static {
    /// The parameter tuple, the receiver excluded.
    type Arguments: Arguments;
    /// The return type.
    type Return: 'static;

    /// Boxes the function.
    fn into_receiver(self) -> Receiver<O, Self::Arguments, Self::Return>;
}

macro_rules! impl_member_function {
    ($n:literal: [$($p:ident),*]) => {
        impl<O, R, F, $($p),*> MemberFunction<O, (Shared, fn($($p),*) -> R)> for F
        where
            O: 'static,
            R: 'static,
            $($p: Typed,)*
            F: Fn(&O, $($p),*) -> R + Send + Sync + 'static,
        {
            type Arguments = ($($p,)*);
            type Return = R;

            #[allow(non_snake_case, reason = "parameters are named after their types")]
            fn into_receiver(self) -> Receiver<O, Self::Arguments, R> {
                Receiver::Shared(Box::new(move |owner: &O, ($($p,)*): ($($p,)*)| {
                    self(owner, $($p),*)
                }))
            }
        }

        impl<O, R, F, $($p),*> MemberFunction<O, (Exclusive, fn($($p),*) -> R)> for F
        where
            O: 'static,
            R: 'static,
            $($p: Typed,)*
            F: Fn(&mut O, $($p),*) -> R + Send + Sync + 'static,
        {
            type Arguments = ($($p,)*);
            type Return = R;

            #[allow(non_snake_case, reason = "parameters are named after their types")]
            fn into_receiver(self) -> Receiver<O, Self::Arguments, R> {
                Receiver::Exclusive(Box::new(move |owner: &mut O, ($($p,)*): ($($p,)*)| {
                    self(owner, $($p),*)
                }))
            }
        }
    };
}

ds_utils::range_invoke!(impl_member_function, 8);

// -----------------------------------------------------------------------------
// MemberFunctionDescriptor

/// Binds a member function to a display name and its parameter names.
///
/// # Examples
///
/// ```
/// use ds_describe::descriptor::MemberFunctionDescriptor;
///
/// struct Account {
///     balance: i64,
/// }
///
/// impl Account {
///     fn deposit(&mut self, amount: i64) -> i64 {
///         self.balance += amount;
///         self.balance
///     }
///
///     fn balance(&self) -> i64 {
///         self.balance
///     }
/// }
///
/// let deposit = MemberFunctionDescriptor::new(Account::deposit, "deposit", ["amount"]);
/// let balance = MemberFunctionDescriptor::new(Account::balance, "balance", []);
/// let mut account = Account { balance: 10 };
///
/// assert_eq!(deposit.call(&mut account, (5,)), 15);
/// assert_eq!(deposit.call_shared(&account, (5,)), None);
/// assert_eq!(balance.call_shared(&account, ()), Some(15));
/// assert_eq!(deposit.argument_name(0), "amount");
/// assert_eq!(balance.argument_count(), 0);
/// ```
pub struct MemberFunctionDescriptor<O, A: Arguments, R> {
    name: &'static str,
    argument_names: A::Names,
    receiver: Receiver<O, A, R>,
}

impl<O: 'static, A: Arguments, R: 'static> MemberFunctionDescriptor<O, A, R> {
    /// Binds `function` to `name` and one name per parameter.
    pub fn new<F, M>(function: F, name: &'static str, argument_names: A::Names) -> Self
    where
        F: MemberFunction<O, M, Arguments = A, Return = R>,
    {
        Self {
            name,
            argument_names,
            receiver: function.into_receiver(),
        }
    }

    /// Returns the display name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the function on `instance`.
    ///
    /// The return value is forwarded unchanged, panics propagate.
    pub fn call(&self, instance: &mut O, args: A) -> R {
        match &self.receiver {
            Receiver::Shared(function) => function(&*instance, args),
            Receiver::Exclusive(function) => function(instance, args),
        }
    }

    /// Invokes a `&self` function through a shared reference.
    ///
    /// Returns `None` if the function takes `&mut self`.
    pub fn call_shared(&self, instance: &O, args: A) -> Option<R> {
        match &self.receiver {
            Receiver::Shared(function) => Some(function(instance, args)),
            Receiver::Exclusive(_) => None,
        }
    }

    /// Returns `true` if the function takes `&self`.
    #[inline]
    pub const fn is_shared(&self) -> bool {
        matches!(self.receiver, Receiver::Shared(_))
    }

    /// Returns the name of the parameter at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than [`argument_count`](Self::argument_count).
    pub fn argument_name(&self, index: usize) -> &'static str {
        match self.argument_names.as_ref().get(index) {
            Some(&name) => name,
            None => panic!(
                "argument index {index} out of range for `{}` with {} arguments",
                self.name,
                A::COUNT,
            ),
        }
    }

    /// Returns all parameter names in order.
    #[inline]
    pub fn argument_names(&self) -> &[&'static str] {
        self.argument_names.as_ref()
    }

    /// Returns the number of parameters, the receiver excluded.
    #[inline]
    pub const fn argument_count(&self) -> usize {
        A::COUNT
    }

    /// Returns the [`FunctionInfo`] of this function.
    pub fn info(&self) -> FunctionInfo {
        FunctionInfo::new(
            self.name,
            A::argument_infos(&self.argument_names),
            Type::of::<R>(),
            self.is_shared(),
        )
    }
}

impl<O, A: Arguments, R> fmt::Debug for MemberFunctionDescriptor<O, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemberFunctionDescriptor")
            .field("name", &self.name)
            .field("argument_names", &self.argument_names.as_ref())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::MemberFunctionDescriptor;

    struct Counter {
        value: i32,
    }

    impl Counter {
        fn add(&mut self, a: i32, b: i32) -> i32 {
            self.value += a + b;
            self.value
        }

        fn checked_div(&self, by: i32) -> Result<i32, &'static str> {
            self.value.checked_div(by).ok_or("division by zero")
        }

        fn explode(&self) {
            panic!("boom");
        }
    }

    #[test]
    fn forwards_return_value() {
        let add = MemberFunctionDescriptor::new(Counter::add, "add", ["a", "b"]);
        let mut counter = Counter { value: 1 };

        assert_eq!(add.call(&mut counter, (2, 3)), 6);
        assert_eq!(add.argument_names(), ["a", "b"]);
        assert!(!add.is_shared());
    }

    #[test]
    fn forwards_result_unchanged() {
        let div = MemberFunctionDescriptor::new(Counter::checked_div, "checked_div", ["by"]);
        let mut counter = Counter { value: 8 };

        assert_eq!(div.call(&mut counter, (2,)), Ok(4));
        assert_eq!(div.call(&mut counter, (0,)), Err("division by zero"));
        assert!(div.is_shared());
    }

    #[test]
    #[should_panic(expected = "boom")]
    fn propagates_panics() {
        let explode = MemberFunctionDescriptor::new(Counter::explode, "explode", []);
        explode.call(&mut Counter { value: 0 }, ());
    }

    #[test]
    #[should_panic(expected = "argument index 2 out of range")]
    fn argument_name_out_of_range() {
        let add = MemberFunctionDescriptor::new(Counter::add, "add", ["a", "b"]);
        add.argument_name(2);
    }

    #[test]
    fn closures_with_explicit_receiver() {
        let double = MemberFunctionDescriptor::new(|c: &Counter| c.value * 2, "double", []);
        assert_eq!(double.call_shared(&Counter { value: 21 }, ()), Some(42));
    }

    #[test]
    fn info_lists_arguments() {
        let add = MemberFunctionDescriptor::new(Counter::add, "add", ["a", "b"]);
        let info = add.info();

        assert_eq!(info.name(), "add");
        assert_eq!(info.argument_count(), 2);
        assert!(info.argument(0).unwrap().ty().is::<i32>());
        assert!(info.returns().is::<i32>());
    }
}
