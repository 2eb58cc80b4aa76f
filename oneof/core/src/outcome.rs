//! Success/failure values.

use crate::container::OneOf;
use crate::error::contract_violation;
use crate::list::{Cons, Nil};
use crate::maybe::Maybe;

/// Either a success payload (`Ok`) or an error payload (`Err`).
///
/// Error payloads are plain data: they are never inspected, formatted or logged here, and
/// carry no trait bounds.
///
/// ```
/// use oneof_core::Outcome;
///
/// fn parse(s: &str) -> Outcome<i32, &'static str> {
///     s.parse::<i32>().map_err(|_| "not a number").into()
/// }
///
/// let doubled = parse("21").map(|n| n * 2);
/// assert_eq!(doubled, Outcome::Ok(42));
///
/// let positive = parse("-3").and_then(|n| match n > 0 {
///     true => Outcome::Ok(n),
///     false => Outcome::Err("negative"),
/// });
/// assert_eq!(positive, Outcome::Err("negative"));
/// ```
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E = String> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Position of the active state: 0 for `Ok`, 1 for `Err`.
    pub fn index(&self) -> usize {
        match self {
            Self::Ok(_) => 0,
            Self::Err(_) => 1,
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics if the value is an `Err`.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => contract_violation("called `unwrap()` on an `Err` outcome"),
        }
    }

    /// Returns the success payload.
    ///
    /// # Panics
    /// Panics with `msg` if the value is an `Err`.
    #[track_caller]
    pub fn expect(self, msg: &'static str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => contract_violation(msg),
        }
    }

    /// Returns the error payload.
    ///
    /// # Panics
    /// Panics if the value is an `Ok`.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(_) => contract_violation("called `unwrap_err()` on an `Ok` outcome"),
            Self::Err(err) => err,
        }
    }

    #[track_caller]
    pub fn expect_err(self, msg: &'static str) -> E {
        match self {
            Self::Ok(_) => contract_violation(msg),
            Self::Err(err) => err,
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => op(err),
        }
    }

    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Transforms the success payload. `op` is not called on an `Err`.
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(op(value)),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Transforms the error payload. `op` is not called on an `Ok`.
    pub fn map_err<G, F: FnOnce(E) -> G>(self, op: F) -> Outcome<T, G> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(op(err)),
        }
    }

    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, op: F) -> U {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(_) => default,
        }
    }

    /// Chains another fallible step onto a success. An `Err` short-circuits without
    /// calling `op`.
    pub fn and_then<U, F: FnOnce(T) -> Outcome<U, E>>(self, op: F) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Attempts recovery from an error. An `Ok` passes through without calling `op`.
    pub fn or_else<G, F: FnOnce(E) -> Outcome<T, G>>(self, op: F) -> Outcome<T, G> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => op(err),
        }
    }

    /// Keeps the success payload, discarding any error.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Keeps the error payload, discarding any success.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(err) => Maybe::Some(err),
        }
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Invokes `on_ok` or `on_err` according to the active state.
    pub fn match_with<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(err) => on_err(err),
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }

    /// Converts into the general container, `Ok` at position 0 and `Err` at position 1.
    pub fn into_one_of(self) -> OneOf<Cons<T, Cons<E, Nil>>> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(err) => Err(err),
        }
    }
}

// Positions are spelled out rather than inferred, so this also holds when `T == E`.
impl<T, E> From<Outcome<T, E>> for OneOf<Cons<T, Cons<E, Nil>>> {
    fn from(value: Outcome<T, E>) -> Self {
        OneOf::from_inner(match value {
            Outcome::Ok(value) => Cons::Inl(value),
            Outcome::Err(err) => Cons::Inr(Cons::Inl(err)),
        })
    }
}
