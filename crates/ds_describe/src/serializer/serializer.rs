use core::fmt;
use std::io;

use super::{FormatSupplier, JsonFormat};
use crate::info::{ClassInfo, EntryInfo, TypeInfo, Typed};
use crate::{Object, Value, ValueRef};

// -----------------------------------------------------------------------------
// Serializer

/// Walks values and type structures, writing through a [`FormatSupplier`].
///
/// `F` may be a concrete supplier or `&dyn FormatSupplier`. The serializer
/// holds no other state and performs no escaping of its own, so one instance
/// can serve any number of threads.
///
/// Writing fails only when the sink fails.
///
/// # Examples
///
/// ```
/// use ds_describe::derive::Describe;
/// use ds_describe::serializer::{FormatSupplier, JsonFormat, PlainFormat, Serializer};
///
/// #[derive(Describe)]
/// #[describe(function(rename, args(name)))]
/// struct Player {
///     name: String,
///     alive: bool,
/// }
///
/// impl Player {
///     fn rename(&mut self, name: String) {
///         self.name = name;
///     }
/// }
///
/// let player = Player { name: "Ana".into(), alive: true };
///
/// let format: &dyn FormatSupplier = if cfg!(debug_assertions) { &PlainFormat } else { &JsonFormat };
/// let text = Serializer::new(format).to_string(&player);
/// assert!(text.contains("Ana"));
///
/// let extended = Serializer::default().extended_structure_to_string::<Player>();
/// assert_eq!(
///     extended,
///     concat!(
///         r#"{"ClassName":"Player","#,
///         r#""Members":{"name":"STRING","alive":"BOOLEAN"},"#,
///         r#""Functions":{"rename":{"Arguments":{"name":"STRING"}}}}"#,
///     ),
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Serializer<F = JsonFormat> {
    format: F,
}

impl Default for Serializer<JsonFormat> {
    #[inline]
    fn default() -> Self {
        Self::new(JsonFormat)
    }
}

impl<F: FormatSupplier> Serializer<F> {
    /// Creates a serializer writing with `format`.
    #[inline]
    pub const fn new(format: F) -> Self {
        Self { format }
    }

    /// Returns the format supplier.
    #[inline]
    pub const fn format(&self) -> &F {
        &self.format
    }

    // -------------------------------------------------------------------------
    // Value mode

    /// Writes the value of `value`.
    ///
    /// Primitives are written by the supplier. Objects write their members in
    /// declaration order, recursing into described members, functions are
    /// skipped.
    pub fn serialize(&self, out: &mut dyn fmt::Write, value: &dyn Value) -> fmt::Result {
        match value.value_ref() {
            ValueRef::Char(c) => self.format.write_char(out, c),
            ValueRef::Int(i) => self.format.write_int(out, i),
            ValueRef::Bool(b) => self.format.write_bool(out, b),
            ValueRef::String(s) => self.format.write_string(out, s),
            ValueRef::Object(object) => self.serialize_object(out, object),
        }
    }

    fn serialize_object(&self, out: &mut dyn fmt::Write, object: &dyn Object) -> fmt::Result {
        let class = object.class_info();

        crate::cfg::debug! {
            log::trace!("serialize value of `{}`", class.ty());
        }

        out.write_str(self.format.object_start())?;

        let mut first = true;
        for (index, entry) in class.iter().enumerate() {
            let EntryInfo::Member(member) = entry else {
                continue;
            };
            let value = object
                .member_value(index)
                .expect("every member entry of a class info has a value");

            self.write_separator(out, &mut first)?;
            self.format.write_name(out, member.name())?;
            self.serialize(out, value)?;
        }

        out.write_str(self.format.object_end())
    }

    /// Writes `value` into a new [`String`].
    pub fn to_string(&self, value: &dyn Value) -> String {
        let mut out = String::new();
        self.serialize(&mut out, value)
            .expect("a formatting trait implementation returned an error when the underlying stream did not");
        out
    }

    /// Writes the value of `value` into an [`io::Write`].
    ///
    /// The output is not buffered, wrap `writer` in a [`io::BufWriter`] when
    /// writing to a file or a socket.
    pub fn serialize_io(&self, writer: impl io::Write, value: &dyn Value) -> io::Result<()> {
        let mut adapter = IoAdapter {
            inner: writer,
            error: Ok(()),
        };

        match self.serialize(&mut adapter, value) {
            Ok(()) => Ok(()),
            Err(_) => match adapter.error {
                Err(error) => Err(error),
                Ok(()) => Err(io::Error::other("formatter error")),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Structure mode

    /// Writes the structure of `T`, member names and type tags.
    ///
    /// Described members expand into their own structure object.
    #[inline]
    pub fn serialize_structure<T: Typed>(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.serialize_type_info(out, T::type_info())
    }

    /// Writes the structure described by `info`.
    ///
    /// A primitive writes its type tag only.
    pub fn serialize_type_info(&self, out: &mut dyn fmt::Write, info: &TypeInfo) -> fmt::Result {
        match info {
            TypeInfo::Primitive(primitive) => out.write_str(self.format.type_tag(primitive.kind())),
            TypeInfo::Class(class) => self.serialize_class_members(out, class),
        }
    }

    fn serialize_class_members(&self, out: &mut dyn fmt::Write, class: &ClassInfo) -> fmt::Result {
        crate::cfg::debug! {
            log::trace!("serialize structure of `{}`", class.ty());
        }

        out.write_str(self.format.object_start())?;

        let mut first = true;
        for member in class.members() {
            self.write_separator(out, &mut first)?;
            self.format.write_name(out, member.name())?;
            self.serialize_type_info(out, member.type_info())?;
        }

        out.write_str(self.format.object_end())
    }

    /// Writes the structure of `T` into a new [`String`].
    pub fn structure_to_string<T: Typed>(&self) -> String {
        let mut out = String::new();
        self.serialize_structure::<T>(&mut out)
            .expect("a formatting trait implementation returned an error when the underlying stream did not");
        out
    }

    // -------------------------------------------------------------------------
    // Extended structure mode

    /// Writes the extended structure of `T`: its class name, its members and
    /// its functions with their arguments.
    ///
    /// Nested classes, in members and in arguments, are written as plain
    /// structure objects.
    #[inline]
    pub fn serialize_structure_extended<T: Typed>(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.serialize_type_info_extended(out, T::type_info())
    }

    /// Writes the extended structure described by `info`.
    ///
    /// A primitive writes its type tag only.
    pub fn serialize_type_info_extended(
        &self,
        out: &mut dyn fmt::Write,
        info: &TypeInfo,
    ) -> fmt::Result {
        let class = match info {
            TypeInfo::Primitive(primitive) => {
                return out.write_str(self.format.type_tag(primitive.kind()));
            }
            TypeInfo::Class(class) => *class,
        };

        let format = &self.format;
        let separator = format.separator();

        out.write_str(format.object_start())?;

        format.write_name(out, format.class_name_key())?;
        format.write_string(out, class.name())?;
        out.write_str(separator)?;

        format.write_name(out, format.members_key())?;
        self.serialize_class_members(out, class)?;
        out.write_str(separator)?;

        format.write_name(out, format.functions_key())?;
        out.write_str(format.object_start())?;

        let mut first = true;
        for function in class.functions() {
            self.write_separator(out, &mut first)?;
            format.write_name(out, function.name())?;

            out.write_str(format.object_start())?;
            format.write_name(out, format.arguments_key())?;
            out.write_str(format.object_start())?;

            let mut first_argument = true;
            for argument in function.arguments() {
                self.write_separator(out, &mut first_argument)?;
                format.write_name(out, argument.name())?;
                self.serialize_type_info(out, argument.type_info())?;
            }

            out.write_str(format.object_end())?;
            out.write_str(format.object_end())?;
        }

        out.write_str(format.object_end())?;
        out.write_str(format.object_end())
    }

    /// Writes the extended structure of `T` into a new [`String`].
    pub fn extended_structure_to_string<T: Typed>(&self) -> String {
        let mut out = String::new();
        self.serialize_structure_extended::<T>(&mut out)
            .expect("a formatting trait implementation returned an error when the underlying stream did not");
        out
    }

    // -------------------------------------------------------------------------
    // Helpers

    #[inline]
    fn write_separator(&self, out: &mut dyn fmt::Write, first: &mut bool) -> fmt::Result {
        if *first {
            *first = false;
            Ok(())
        } else {
            out.write_str(self.format.separator())
        }
    }
}

// -----------------------------------------------------------------------------
// IoAdapter

/// Bridges [`fmt::Write`] to [`io::Write`], keeping the first I/O error.
struct IoAdapter<W> {
    inner: W,
    error: io::Result<()>,
}

impl<W: io::Write> fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(error) => {
                self.error = Err(error);
                Err(fmt::Error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::fmt;
    use std::io;

    use super::Serializer;
    use crate::derive::Describe;
    use crate::serializer::{FormatSupplier, JsonFormat, PlainFormat};

    // Lists a member that it never hands out.
    struct Detached;

    impl crate::info::Typed for Detached {
        fn type_info() -> &'static crate::info::TypeInfo {
            static CELL: crate::impls::NonGenericTypeInfoCell = crate::impls::NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| crate::info::TypeInfo::Class(detached_info()))
        }
    }

    fn detached_info() -> &'static crate::info::ClassInfo {
        use crate::info::{ClassInfo, EntryInfo, MemberInfo};

        static INFO: std::sync::OnceLock<ClassInfo> = std::sync::OnceLock::new();
        INFO.get_or_init(|| {
            let entries = [EntryInfo::Member(MemberInfo::new::<i32>("lost"))];
            ClassInfo::new::<Detached>("Detached", Box::new(entries))
        })
    }

    impl crate::Value for Detached {
        fn value_ref(&self) -> crate::ValueRef<'_> {
            crate::ValueRef::Object(self)
        }

        fn as_any(&self) -> &dyn core::any::Any {
            self
        }
    }

    impl crate::Object for Detached {
        fn class_info(&self) -> &'static crate::info::ClassInfo {
            detached_info()
        }

        fn member_value(&self, _index: usize) -> Option<&dyn crate::Value> {
            None
        }
    }

    #[derive(Describe)]
    #[describe(function(length_squared), function(translate, args(dx, dy)))]
    struct Point {
        x: i32,
        y: i32,
    }

    impl Point {
        fn length_squared(&self) -> i32 {
            self.x * self.x + self.y * self.y
        }

        fn translate(&mut self, dx: i32, dy: i32) {
            self.x += dx;
            self.y += dy;
        }
    }

    #[derive(Describe)]
    struct Outer {
        p: Point,
    }

    #[derive(Describe)]
    struct Settings {
        flag: bool,
        title: String,
        mark: char,
        #[describe(rename = "Level")]
        level: u64,
        #[describe(skip)]
        #[allow(dead_code)]
        cache: Vec<u8>,
    }

    fn settings() -> Settings {
        Settings {
            flag: true,
            title: "a \"quoted\" title".to_owned(),
            mark: 'm',
            level: 9,
            cache: vec![1, 2, 3],
        }
    }

    #[test]
    fn point_values() {
        let p = Point { x: 3, y: 4 };
        assert_eq!(Serializer::default().to_string(&p), r#"{"x":3,"y":4}"#);
        assert_eq!(p.length_squared(), 25);
    }

    #[test]
    fn primitive_values() {
        let json = Serializer::default().to_string(&settings());
        assert!(json.contains(r#""flag":true"#));
        assert_eq!(
            json,
            r#"{"flag":true,"title":"a \"quoted\" title","mark":m,"Level":9}"#
        );

        assert_eq!(Serializer::default().to_string(&-5_i8), "-5");
        assert_eq!(Serializer::default().to_string(&"text"), r#""text""#);
    }

    #[test]
    fn nested_values() {
        let serializer = Serializer::default();
        let outer = Outer {
            p: Point { x: 1, y: 2 },
        };

        let text = serializer.to_string(&outer);
        assert_eq!(text, r#"{"p":{"x":1,"y":2}}"#);

        let nested = serializer.to_string(&outer.p);
        assert_eq!(text, format!(r#"{{"p":{nested}}}"#));
    }

    #[test]
    fn values_differ_only_in_values() {
        let serializer = Serializer::default();
        let a = serializer.to_string(&Point { x: 3, y: 4 });
        let b = serializer.to_string(&Point { x: -10, y: 200 });

        let strip = |s: &str| s.replace(|c: char| c.is_ascii_digit() || c == '-', "");
        assert_eq!(strip(&a), strip(&b));
        assert_eq!(a, serializer.to_string(&Point { x: 3, y: 4 }));
    }

    #[test]
    fn functions_are_skipped() {
        let mut p = Point { x: 0, y: 0 };
        p.translate(1, 1);
        let text = Serializer::default().to_string(&p);

        assert!(!text.contains("length_squared"));
        assert!(!text.contains("translate"));
    }

    #[test]
    fn structure() {
        let serializer = Serializer::default();

        assert_eq!(
            serializer.structure_to_string::<Point>(),
            r#"{"x":"INT","y":"INT"}"#
        );
        assert_eq!(
            serializer.structure_to_string::<Outer>(),
            r#"{"p":{"x":"INT","y":"INT"}}"#
        );
        assert_eq!(
            serializer.structure_to_string::<Settings>(),
            r#"{"flag":"BOOLEAN","title":"STRING","mark":"CHAR","Level":"INT"}"#
        );
        assert_eq!(serializer.structure_to_string::<bool>(), r#""BOOLEAN""#);
    }

    #[test]
    fn structure_names_match_value_names() {
        let serializer = Serializer::default();
        let names = |text: String| {
            text.split('"')
                .skip(1)
                .step_by(2)
                .filter(|s| s.chars().all(|c| c.is_ascii_lowercase()))
                .map(str::to_owned)
                .collect::<Vec<_>>()
        };

        let values = names(serializer.to_string(&Point { x: 5, y: 6 }));
        let structure = names(serializer.structure_to_string::<Point>());
        assert_eq!(values, ["x", "y"]);
        assert_eq!(values, structure);
    }

    #[test]
    fn extended_structure() {
        let serializer = Serializer::default();

        assert_eq!(
            serializer.extended_structure_to_string::<Point>(),
            concat!(
                r#"{"ClassName":"Point","Members":{"x":"INT","y":"INT"},"#,
                r#""Functions":{"length_squared":{"Arguments":{}},"#,
                r#""translate":{"Arguments":{"dx":"INT","dy":"INT"}}}}"#,
            )
        );
        assert_eq!(
            serializer.extended_structure_to_string::<Outer>(),
            r#"{"ClassName":"Outer","Members":{"p":{"x":"INT","y":"INT"}},"Functions":{}}"#
        );
    }

    #[test]
    fn plain_format() {
        let serializer = Serializer::new(PlainFormat);
        let outer = Outer {
            p: Point { x: 1, y: 2 },
        };

        assert_eq!(serializer.to_string(&outer), "{p = {x = 1, y = 2}}");
        assert_eq!(
            serializer.to_string(&settings()),
            r#"{flag = true, title = "a \"quoted\" title", mark = 'm', Level = 9}"#
        );
        assert_eq!(serializer.structure_to_string::<Point>(), "{x = int, y = int}");
    }

    #[test]
    fn dynamic_format() {
        let formats: [&dyn FormatSupplier; 2] = [&JsonFormat, &PlainFormat];
        let p = Point { x: 7, y: 8 };

        let texts = formats.map(|format| Serializer::new(format).to_string(&p));
        assert_eq!(texts, [r#"{"x":7,"y":8}"#, "{x = 7, y = 8}"]);
    }

    #[test]
    fn io_sink() {
        struct Failing;

        impl io::Write for Failing {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let serializer = Serializer::default();
        let p = Point { x: 3, y: 4 };

        let mut bytes = Vec::new();
        serializer.serialize_io(&mut bytes, &p).unwrap();
        assert_eq!(bytes, br#"{"x":3,"y":4}"#);

        let error = serializer.serialize_io(Failing, &p).unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn fmt_sink_error() {
        struct Full;

        impl fmt::Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let result = Serializer::default().serialize(&mut Full, &Point { x: 0, y: 0 });
        assert_eq!(result, Err(fmt::Error));
    }

    #[test]
    #[should_panic(expected = "every member entry of a class info has a value")]
    fn member_without_value() {
        Serializer::default().to_string(&Detached);
    }
}
