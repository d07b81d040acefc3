/// Calls the target macro once per arity, from `0` up to the given number.
///
/// The number cannot exceed `8`.
///
/// # Example
///
/// ```ignore
/// range_invoke!(my_macro, 3);
/// // eq to
/// my_macro!(0: []);
/// my_macro!(1: [P0]);
/// my_macro!(2: [P0, P1]);
/// my_macro!(3: [P0, P1, P2]);
///
/// range_invoke!(my_macro, 3: P);
/// // eq to
/// my_macro!(0: []);
/// my_macro!(1: [0: P0]);
/// my_macro!(2: [0: P0, 1: P1]);
/// my_macro!(3: [0: P0, 1: P1, 2: P2]);
/// ```
#[macro_export]
macro_rules! range_invoke {
    ($(#[$meta:meta])* $macro:ident, 0: P) => {
        $(#[$meta])* $macro!(0: []);
    };
    ($(#[$meta:meta])* $macro:ident, 0) => {
        $(#[$meta])* $macro!(0: []);
    };
    ($(#[$meta:meta])* $macro:ident, 1: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 0: P);
        $(#[$meta])* $macro!(1: [0: P0]);
    };
    ($(#[$meta:meta])* $macro:ident, 1) => {
        $crate::range_invoke!($(#[$meta])* $macro, 0);
        $(#[$meta])* $macro!(1: [P0]);
    };
    ($(#[$meta:meta])* $macro:ident, 2: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 1: P);
        $(#[$meta])* $macro!(2: [0: P0, 1: P1]);
    };
    ($(#[$meta:meta])* $macro:ident, 2) => {
        $crate::range_invoke!($(#[$meta])* $macro, 1);
        $(#[$meta])* $macro!(2: [P0, P1]);
    };
    ($(#[$meta:meta])* $macro:ident, 3: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 2: P);
        $(#[$meta])* $macro!(3: [0: P0, 1: P1, 2: P2]);
    };
    ($(#[$meta:meta])* $macro:ident, 3) => {
        $crate::range_invoke!($(#[$meta])* $macro, 2);
        $(#[$meta])* $macro!(3: [P0, P1, P2]);
    };
    ($(#[$meta:meta])* $macro:ident, 4: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 3: P);
        $(#[$meta])* $macro!(4: [0: P0, 1: P1, 2: P2, 3: P3]);
    };
    ($(#[$meta:meta])* $macro:ident, 4) => {
        $crate::range_invoke!($(#[$meta])* $macro, 3);
        $(#[$meta])* $macro!(4: [P0, P1, P2, P3]);
    };
    ($(#[$meta:meta])* $macro:ident, 5: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 4: P);
        $(#[$meta])* $macro!(5: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4]);
    };
    ($(#[$meta:meta])* $macro:ident, 5) => {
        $crate::range_invoke!($(#[$meta])* $macro, 4);
        $(#[$meta])* $macro!(5: [P0, P1, P2, P3, P4]);
    };
    ($(#[$meta:meta])* $macro:ident, 6: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 5: P);
        $(#[$meta])* $macro!(6: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5]);
    };
    ($(#[$meta:meta])* $macro:ident, 6) => {
        $crate::range_invoke!($(#[$meta])* $macro, 5);
        $(#[$meta])* $macro!(6: [P0, P1, P2, P3, P4, P5]);
    };
    ($(#[$meta:meta])* $macro:ident, 7: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 6: P);
        $(#[$meta])* $macro!(7: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6]);
    };
    ($(#[$meta:meta])* $macro:ident, 7) => {
        $crate::range_invoke!($(#[$meta])* $macro, 6);
        $(#[$meta])* $macro!(7: [P0, P1, P2, P3, P4, P5, P6]);
    };
    ($(#[$meta:meta])* $macro:ident, 8: P) => {
        $crate::range_invoke!($(#[$meta])* $macro, 7: P);
        $(#[$meta])* $macro!(8: [0: P0, 1: P1, 2: P2, 3: P3, 4: P4, 5: P5, 6: P6, 7: P7]);
    };
    ($(#[$meta:meta])* $macro:ident, 8) => {
        $crate::range_invoke!($(#[$meta])* $macro, 7);
        $(#[$meta])* $macro!(8: [P0, P1, P2, P3, P4, P5, P6, P7]);
    };
}

#[cfg(test)]
mod tests {
    macro_rules! count {
        ($n:literal: [$($p:ident),*]) => {
            const _: () = assert!(<[&str]>::len(&[$(stringify!($p)),*]) == $n);
        };
    }

    macro_rules! indexed {
        ($n:literal: [$($i:tt: $p:ident),*]) => {
            const _: () = assert!(<[usize]>::len(&[$($i),*]) == $n);
        };
    }

    crate::range_invoke!(count, 8);
    crate::range_invoke!(indexed, 8: P);
}
