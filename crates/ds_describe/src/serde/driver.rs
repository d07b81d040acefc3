use serde_core::ser::{Error, SerializeStruct};
use serde_core::{Serialize, Serializer};

use crate::info::EntryInfo;
use crate::{Object, Value, ValueRef};

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializes a described value with any `serde` serializer.
///
/// # Examples
///
/// ```
/// use ds_describe::derive::Describe;
/// use ds_describe::serde::SerializeDriver;
///
/// #[derive(Describe)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let p = Point { x: 3, y: 4 };
/// let json = serde_json::to_string(&SerializeDriver::new(&p)).unwrap();
///
/// assert_eq!(json, r#"{"x":3,"y":4}"#);
/// ```
#[derive(Clone, Copy)]
pub struct SerializeDriver<'a> {
    value: &'a dyn Value,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a driver for `value`.
    #[inline]
    pub const fn new(value: &'a dyn Value) -> Self {
        Self { value }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.value_ref() {
            ValueRef::Char(c) => serializer.serialize_char(c),
            ValueRef::Bool(b) => serializer.serialize_bool(b),
            ValueRef::String(s) => serializer.serialize_str(s),
            ValueRef::Int(i) => {
                if let Ok(i) = i64::try_from(i) {
                    serializer.serialize_i64(i)
                } else if let Ok(u) = u64::try_from(i) {
                    serializer.serialize_u64(u)
                } else {
                    serializer.serialize_i128(i)
                }
            }
            ValueRef::Object(object) => serialize_object(object, serializer),
        }
    }
}

fn serialize_object<S: Serializer>(object: &dyn Object, serializer: S) -> Result<S::Ok, S::Error> {
    let class = object.class_info();
    let mut state = serializer.serialize_struct(class.name(), class.members().count())?;

    for (index, entry) in class.iter().enumerate() {
        let EntryInfo::Member(member) = entry else {
            continue;
        };
        let Some(value) = object.member_value(index) else {
            return Err(S::Error::custom(format_args!(
                "member `{}` of `{}` has no value",
                member.name(),
                class.name(),
            )));
        };
        state.serialize_field(member.name(), &SerializeDriver::new(value))?;
    }

    state.end()
}

#[cfg(test)]
mod tests {
    use super::SerializeDriver;
    use crate::derive::Describe;

    #[derive(Describe)]
    #[describe(function(area))]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn area(&self) -> i32 {
            self.x * self.y
        }
    }

    #[derive(Describe)]
    #[describe(name = "Label")]
    struct Tag {
        text: String,
        initial: char,
        visible: bool,
        id: u64,
        at: Point,
    }

    fn tag() -> Tag {
        Tag {
            text: "origin".to_owned(),
            initial: 'o',
            visible: true,
            id: u64::MAX,
            at: Point { x: 3, y: 4 },
        }
    }

    #[test]
    fn to_json() {
        let tag = tag();
        let json = serde_json::to_string(&SerializeDriver::new(&tag)).unwrap();

        assert_eq!(
            json,
            r#"{"text":"origin","initial":"o","visible":true,"id":18446744073709551615,"at":{"x":3,"y":4}}"#
        );
        assert_eq!(tag.at.area(), 12);
    }

    #[test]
    fn to_ron() {
        let p = Point { x: 3, y: 4 };
        let ron = ron::to_string(&SerializeDriver::new(&p)).unwrap();
        assert_eq!(ron, "(x:3,y:4)");
    }

    #[test]
    fn json_value_tree() {
        let tag = tag();
        let value = serde_json::to_value(SerializeDriver::new(&tag)).unwrap();

        assert_eq!(value["at"]["y"], 4);
        assert_eq!(value["initial"], "o");
        assert!(value.get("area").is_none());
    }

    #[test]
    fn matches_serde_derive() {
        #[derive(serde::Serialize)]
        struct PointTwin {
            x: i32,
            y: i32,
        }

        let p = Point { x: -3, y: 7 };
        let twin = PointTwin { x: -3, y: 7 };

        assert_eq!(
            serde_json::to_string(&SerializeDriver::new(&p)).unwrap(),
            serde_json::to_string(&twin).unwrap(),
        );
        assert_eq!(
            ron::to_string(&SerializeDriver::new(&p)).unwrap(),
            ron::to_string(&twin).unwrap(),
        );
    }

    #[test]
    fn primitives() {
        let json = |value: &dyn crate::Value| serde_json::to_string(&SerializeDriver::new(value)).unwrap();

        assert_eq!(json(&-8_i16), "-8");
        assert_eq!(json(&'z'), r#""z""#);
        assert_eq!(json(&"a\"b"), r#""a\"b""#);
    }
}
