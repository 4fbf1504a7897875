/// A callback that turns a `T` into a `U`.
///
/// Implemented for every `FnOnce(T) -> U`, so plain closures and function items fit.
pub trait Transformer<T, U>: FnOnce(T) -> U {}

impl<T, U, F> Transformer<T, U> for F where F: FnOnce(T) -> U {}

/// A callback that takes nothing and produces a `T`.
pub trait Producer<T>: FnOnce() -> T {}

impl<T, F> Producer<T> for F where F: FnOnce() -> T {}

/// A callback that inspects a `T` and answers yes or no.
///
/// The value is borrowed so the caller keeps ownership of it.
pub trait Predicate<T>: FnOnce(&T) -> bool {}

impl<T, F> Predicate<T> for F where F: FnOnce(&T) -> bool {}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply<T, U>(value: T, f: impl Transformer<T, U>) -> U {
        f(value)
    }

    fn produce<T>(f: impl Producer<T>) -> T {
        f()
    }

    fn check<T>(value: &T, f: impl Predicate<T>) -> bool {
        f(value)
    }

    fn double(x: i32) -> i32 {
        x * 2
    }

    #[test]
    fn closures_and_fn_items_are_transformers() {
        assert_eq!(apply(21, double), 42);
        assert_eq!(apply("abc", |s: &str| s.len()), 3);
    }

    #[test]
    fn producers_move_captured_state_out() {
        let owned = String::from("moved");
        assert_eq!(produce(move || owned), "moved");
    }

    #[test]
    fn predicates_borrow_the_value() {
        let value = vec![1, 2, 3];
        assert!(check(&value, |v: &Vec<i32>| v.len() == 3));
        assert_eq!(value.len(), 3);
    }
}
