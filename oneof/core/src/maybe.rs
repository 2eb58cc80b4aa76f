//! Presence/absence values.

use crate::error::contract_violation;
use crate::outcome::Outcome;

/// Either a payload (`Some`) or nothing (`None`).
///
/// ```
/// use oneof_core::Maybe;
///
/// assert_eq!(Maybe::Some(1).map(|x| x + 1).unwrap_or(0), 2);
/// assert_eq!(Maybe::<i32>::None.map(|x| x + 1).unwrap_or(0), 0);
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the payload.
    ///
    /// # Panics
    /// Panics if the value is `None`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => contract_violation("called `unwrap()` on a `None` value"),
        }
    }

    /// Returns the payload.
    ///
    /// # Panics
    /// Panics with `msg` if the value is `None`.
    #[track_caller]
    pub fn expect(self, msg: &'static str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => contract_violation(msg),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    pub fn unwrap_or_else<F: FnOnce() -> T>(self, op: F) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => op(),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Transforms the payload. `op` is not called on `None`.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(op(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains another optional step. `None` short-circuits without calling `op`.
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, op: F) -> Maybe<U> {
        match self {
            Self::Some(value) => op(value),
            Self::None => Maybe::None,
        }
    }

    /// Supplies a fallback when `None`. A `Some` passes through without calling `op`.
    pub fn or_else<F: FnOnce() -> Maybe<T>>(self, op: F) -> Maybe<T> {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => op(),
        }
    }

    /// Keeps the payload only if `predicate` accepts it.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Maybe<T> {
        if let Self::Some(value) = self {
            if predicate(&value) {
                return Self::Some(value);
            }
        }
        Self::None
    }

    /// Converts into an [`Outcome`], using `err` for `None`.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(err),
        }
    }

    pub fn ok_or_else<E, F: FnOnce() -> E>(self, op: F) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(op()),
        }
    }

    /// Moves the payload out, leaving `None` in its place.
    pub fn take(&mut self) -> Maybe<T> {
        std::mem::replace(self, Self::None)
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Invokes `on_some` with the payload, or `on_none` if there is none.
    pub fn match_with<R, F, G>(self, on_some: F, on_none: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce() -> R,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::test_support::init_logging;

    #[test]
    fn test_state_queries() {
        let some = Maybe::Some(1);
        let none = Maybe::<i32>::None;

        assert!(some.is_some() && !some.is_none());
        assert!(none.is_none() && !none.is_some());
        assert_eq!(Maybe::<i32>::default(), Maybe::None);
    }

    #[test]
    fn test_unwrap() {
        assert_eq!(Maybe::Some("x").unwrap(), "x");
    }

    #[test]
    #[should_panic(expected = "called `unwrap()` on a `None` value")]
    fn test_unwrap_on_none_panics() {
        init_logging();
        let _ = Maybe::<u8>::None.unwrap();
    }

    #[test]
    #[should_panic(expected = "slot must be filled")]
    fn test_expect_uses_caller_message() {
        init_logging();
        let _ = Maybe::<u8>::None.expect("slot must be filled");
    }

    #[test]
    fn test_map_then_unwrap_or() {
        assert_eq!(Maybe::Some(1).map(|x| x + 1).unwrap_or(0), 2);
        assert_eq!(Maybe::<i32>::None.map(|x| x + 1).unwrap_or(0), 0);
        assert_eq!(Maybe::<i32>::None.unwrap_or_else(|| 5), 5);
        assert_eq!(Maybe::<String>::None.unwrap_or_default(), "");
    }

    #[test]
    fn test_map_skips_none() {
        let calls = Cell::new(0);
        let mapped = Maybe::<i32>::None.map(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert_eq!(mapped, Maybe::None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_and_then() {
        let half = |x: u32| match x % 2 {
            0 => Maybe::Some(x / 2),
            _ => Maybe::None,
        };

        assert_eq!(Maybe::Some(8).and_then(half).and_then(half), Maybe::Some(2));
        assert_eq!(Maybe::Some(6).and_then(half).and_then(half), Maybe::None);

        let calls = Cell::new(0);
        let chained = Maybe::<u32>::None.and_then(|x| {
            calls.set(calls.get() + 1);
            half(x)
        });
        assert_eq!(chained, Maybe::None);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_or_else_and_filter() {
        assert_eq!(Maybe::None.or_else(|| Maybe::Some(3)), Maybe::Some(3));
        assert_eq!(Maybe::Some(4).filter(|x| *x > 3), Maybe::Some(4));
        assert_eq!(Maybe::Some(2).filter(|x| *x > 3), Maybe::None);
    }

    #[test]
    fn test_ok_or() {
        assert_eq!(Maybe::Some(1).ok_or("missing"), Outcome::Ok(1));
        assert_eq!(Maybe::<i32>::None.ok_or("missing"), Outcome::Err("missing"));
        assert_eq!(Maybe::<i32>::None.ok_or_else(|| 7u8), Outcome::Err(7));
    }

    #[test]
    fn test_match_with() {
        let describe = |m: Maybe<i32>| m.match_with(|n| format!("some {n}"), || "none".to_owned());

        assert_eq!(describe(Maybe::Some(3)), "some 3");
        assert_eq!(describe(Maybe::None), "none");
    }

    #[test]
    fn test_take_leaves_none() {
        let mut slot = Maybe::Some(String::from("a"));

        assert_eq!(slot.take(), Maybe::Some(String::from("a")));
        assert_eq!(slot, Maybe::None);
    }

    #[test]
    fn test_projections() {
        let mut value = Maybe::Some(1);
        if let Maybe::Some(n) = value.as_mut() {
            *n += 1;
        }
        assert_eq!(value.as_ref(), Maybe::Some(&2));
    }

    #[test]
    fn test_std_round_trip() {
        assert_eq!(Maybe::<i32>::from(Some(1)), Maybe::Some(1));
        assert_eq!(Maybe::<u8>::None.into_option(), None);
        assert_eq!(Maybe::<i32>::from(5), Maybe::Some(5));
    }
}
