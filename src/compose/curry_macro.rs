//! Per-arity curry macros for heterogeneous argument types.
//!
//! The [`Curried`](crate::compose::Curried) engine requires all arguments
//! to share one type. When the argument types differ and the arity is
//! fixed at the call site, these macros convert the function into nested
//! unary closures instead.
//!
//! The generated closures share the function and captured arguments behind
//! `std::rc::Rc`, so a partial application can be called any number of
//! times and non-`Copy` arguments work correctly. The closures implement
//! `Fn` and compose with [`compose!`](crate::compose!) and
//! [`pipe!`](crate::pipe!).

/// Converts a 2-argument function into nested unary closures.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` that returns a
/// closure taking `b`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funcomb::curry2;
///
/// fn repeat(text: &str, count: usize) -> String { text.repeat(count) }
///
/// let curried = curry2!(repeat);
/// let echo = curried("ha");
///
/// // The partial application is reusable.
/// assert_eq!(echo(2), "haha");
/// assert_eq!(echo(3), "hahaha");
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into nested unary closures.
///
/// Given `f(a, b, c) -> d`, returns closures taking one argument at a
/// time; each intermediate step is reusable.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use funcomb::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let percent = curry3!(clamp)(0)(100);
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-3), 0);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

#[cfg(test)]
mod tests {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    #[test]
    fn test_curry2_heterogeneous_arguments() {
        fn describe(label: &str, value: f64) -> String {
            format!("{label}: {value}")
        }

        let curried = curry2!(describe);
        let speed = curried("speed");
        assert_eq!(speed(3.5), "speed: 3.5");
    }

    #[test]
    fn test_curry2_partial_reusable() {
        let from_hundred = curry2!(subtract)(100);
        assert_eq!(from_hundred(30), 70);
        assert_eq!(from_hundred(99), 1);
    }

    #[test]
    fn test_curry3_full_application() {
        let interpolate =
            |prefix: String, middle: &str, suffix: char| format!("{prefix}{middle}{suffix}");
        let curried = curry3!(interpolate);
        assert_eq!(curried(String::from("a"))("b")('c'), "abc");
    }
}
