use std::any::Any;
use std::borrow::Cow;

use crate::info::{PrimitiveInfo, PrimitiveKind, TypeInfo, Typed};
use crate::{Value, ValueRef};

macro_rules! impl_primitive {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Typed for $ty {
                fn type_info() -> &'static TypeInfo {
                    static INFO: TypeInfo =
                        TypeInfo::Primitive(PrimitiveInfo::new::<$ty>(PrimitiveKind::$kind));
                    &INFO
                }
            }
        )+
    };
}

impl_primitive!(Int => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_primitive!(Bool => bool);
impl_primitive!(Char => char);
impl_primitive!(String => String, &'static str, Box<str>, Cow<'static, str>);

macro_rules! impl_int_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Value for $ty {
                #[inline]
                fn value_ref(&self) -> ValueRef<'_> {
                    ValueRef::Int(*self as i128)
                }

                #[inline]
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+
    };
}

impl_int_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

macro_rules! impl_str_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Value for $ty {
                #[inline]
                fn value_ref(&self) -> ValueRef<'_> {
                    ValueRef::String(&**self)
                }

                #[inline]
                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+
    };
}

impl_str_value!(String, &'static str, Box<str>, Cow<'static, str>);

impl Value for bool {
    #[inline]
    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Bool(*self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Value for char {
    #[inline]
    fn value_ref(&self) -> ValueRef<'_> {
        ValueRef::Char(*self)
    }

    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use crate::info::{PrimitiveKind, Typed};
    use crate::{Value, ValueRef};

    fn kind<T: Typed>() -> PrimitiveKind {
        T::type_info().as_primitive().unwrap().kind()
    }

    #[test]
    fn closed_kind_set() {
        assert_eq!(kind::<u64>(), PrimitiveKind::Int);
        assert_eq!(kind::<isize>(), PrimitiveKind::Int);
        assert_eq!(kind::<bool>(), PrimitiveKind::Bool);
        assert_eq!(kind::<char>(), PrimitiveKind::Char);
        assert_eq!(kind::<&'static str>(), PrimitiveKind::String);
        assert_eq!(kind::<Cow<'static, str>>(), PrimitiveKind::String);
    }

    #[test]
    fn ints_widen_losslessly() {
        assert!(matches!(u64::MAX.value_ref(), ValueRef::Int(v) if v == u64::MAX as i128));
        assert!(matches!(i128::MIN.value_ref(), ValueRef::Int(i128::MIN)));
        assert!(matches!((-3_i8).value_ref(), ValueRef::Int(-3)));
    }

    #[test]
    fn strings_borrow() {
        let boxed: Box<str> = Box::from("boxed");
        assert!(matches!(boxed.value_ref(), ValueRef::String("boxed")));
        assert!(matches!(Cow::Borrowed("cow").value_ref(), ValueRef::String("cow")));
    }
}
