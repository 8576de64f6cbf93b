//! The `curry!` macro for converting a binary function to curried form.
//!
//! The macro shares the function and the first argument through
//! `std::rc::Rc` so the curried function and its partial applications can
//! be called repeatedly, even for argument types that do not implement
//! `Copy`. A plain function cannot express this shape because `impl
//! Trait` is not allowed in the return position of an `Fn` bound.

/// Converts a 2-argument function into a curried form.
///
/// Given `f(a, b) -> c`, returns a closure that takes `a` and returns
/// another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`] (so partial
///   applications can be reused)
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use bbmap::curry;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Reusable partial application
///
/// ```
/// use bbmap::curry;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry!(multiply);
/// let double = curried(2);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(double(7), 14);
/// ```
///
/// ## With closures
///
/// ```
/// use bbmap::curry;
///
/// let join = |prefix: String, suffix: String| format!("{prefix}{suffix}");
/// let curried = curry!(join);
/// let greet = curried("hello, ".to_string());
///
/// assert_eq!(greet("world".to_string()), "hello, world");
/// ```
#[macro_export]
macro_rules! curry {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            let first = ::std::rc::Rc::new(first);
            move |second| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&first)),
                    second,
                )
            }
        }
    }};
}
