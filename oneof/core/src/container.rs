//! The variant container.

use std::any::type_name;
use std::fmt::{self, Debug};

use crate::dispatch::Dispatch;
use crate::error::TypeMismatch;
use crate::list::{AltList, Cons, Member, ToMut, ToRef};

/// Names the container type for a set of alternatives.
///
/// ```
/// use oneof_core::OneOf;
///
/// let value: OneOf![i32, String] = OneOf::new(5i32);
/// assert_eq!(value.index(), 0);
/// ```
#[macro_export]
macro_rules! OneOf {
    ($($alt:ty),* $(,)?) => {
        $crate::OneOf<$crate::Alts![$($alt),*]>
    };
}

/// Holds exactly one value out of a closed set of alternative types.
///
/// The set is fixed by the list type `L` (see [`OneOf!`](crate::OneOf!)). Typed accessors take
/// the alternative type plus a position that is left to inference:
///
/// ```
/// use oneof_core::OneOf;
///
/// let value: OneOf![i32, String, bool] = OneOf::new(String::from("hi"));
///
/// assert!(value.is::<String, _>());
/// assert!(!value.is::<i32, _>());
/// assert_eq!(value.get_if::<String, _>().map(String::as_str), Some("hi"));
/// assert!(value.get::<bool, _>().is_err());
/// ```
///
/// Asking for a type outside the set does not build:
///
/// ```compile_fail
/// use oneof_core::OneOf;
///
/// let value: OneOf![i32, String] = OneOf::new(1i32);
/// value.is::<f64, _>();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OneOf<L> {
    inner: L,
}

impl<L: AltList> OneOf<L> {
    /// Number of alternatives in the set.
    pub const ALTERNATIVES: usize = L::LEN;

    /// Stores `value`, activating the alternative of its type.
    pub fn new<T, I>(value: T) -> Self
    where
        L: Member<T, I>,
    {
        Self {
            inner: <L as Member<T, I>>::inject(value),
        }
    }

    /// Wraps an already built alternative list.
    pub fn from_inner(inner: L) -> Self {
        Self { inner }
    }

    /// Unwraps into the native nested enum, for use with a plain `match`.
    pub fn into_inner(self) -> L {
        self.inner
    }

    /// Zero-based position of the active alternative.
    ///
    /// Walks the nested list down to the active alternative. The depth is bounded by the
    /// number of alternatives, which the type fixes, so the cost never depends on the
    /// stored value.
    pub fn index(&self) -> usize {
        self.inner.index()
    }

    /// Whether the active alternative is `T`.
    pub fn is<T, I>(&self) -> bool
    where
        L: Member<T, I>,
    {
        self.index() == <L as Member<T, I>>::INDEX
    }

    /// Borrows the active value as a `T`.
    ///
    /// Fails if `T` is not the active alternative; check with [`is`](Self::is) first or use
    /// [`get_if`](Self::get_if).
    pub fn get<T, I>(&self) -> Result<&T, TypeMismatch>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::get(&self.inner).ok_or_else(|| self.mismatch::<T, I>())
    }

    pub fn get_mut<T, I>(&mut self) -> Result<&mut T, TypeMismatch>
    where
        L: Member<T, I>,
    {
        let actual = self.index();
        <L as Member<T, I>>::get_mut(&mut self.inner)
            .ok_or_else(|| mismatch::<L, T, I>(actual))
    }

    /// Borrows the active value as a `T`, or `None` if another alternative is active.
    pub fn get_if<T, I>(&self) -> Option<&T>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::get(&self.inner)
    }

    pub fn get_if_mut<T, I>(&mut self) -> Option<&mut T>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::get_mut(&mut self.inner)
    }

    /// Moves the active value out as a `T`, handing the container back if `T` is not active.
    pub fn take<T, I>(self) -> Result<T, Self>
    where
        L: Member<T, I>,
    {
        <L as Member<T, I>>::take(self.inner).map_err(Self::from_inner)
    }

    /// Replaces the active value. The previous value is dropped before `value` is installed.
    pub fn set<T, I>(&mut self, value: T)
    where
        L: Member<T, I>,
    {
        *self = Self::new(value);
    }

    /// Replaces the active value, returning the previous container instead of dropping it.
    pub fn replace<T, I>(&mut self, value: T) -> Self
    where
        L: Member<T, I>,
    {
        std::mem::replace(self, Self::new(value))
    }

    /// Invokes the handler for the active alternative and returns its result.
    ///
    /// `handlers` must hold exactly one handler per alternative, in declaration order; see
    /// [`dispatch`](crate::dispatch).
    pub fn match_with<F, R>(self, handlers: F) -> R
    where
        L: Dispatch<F, R>,
    {
        self.inner.dispatch(handlers)
    }

    fn mismatch<T, I>(&self) -> TypeMismatch
    where
        L: Member<T, I>,
    {
        mismatch::<L, T, I>(self.index())
    }
}

impl<L> OneOf<L> {
    /// Borrows the container as a container of shared references.
    pub fn as_ref<'a>(&'a self) -> OneOf<<L as ToRef<'a>>::Output>
    where
        L: ToRef<'a>,
    {
        OneOf {
            inner: self.inner.to_ref(),
        }
    }

    /// Borrows the container as a container of exclusive references.
    pub fn as_mut<'a>(&'a mut self) -> OneOf<<L as ToMut<'a>>::Output>
    where
        L: ToMut<'a>,
    {
        OneOf {
            inner: self.inner.to_mut(),
        }
    }
}

fn mismatch<L, T, I>(actual_index: usize) -> TypeMismatch
where
    L: Member<T, I>,
{
    TypeMismatch::new(type_name::<T>(), <L as Member<T, I>>::INDEX, actual_index)
}

/// Defaults to the first alternative holding its own default value.
impl<H: Default, T> Default for OneOf<Cons<H, T>> {
    fn default() -> Self {
        Self {
            inner: Cons::Inl(H::default()),
        }
    }
}

impl<L: AltList + Debug> Debug for OneOf<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneOf")
            .field("index", &self.index())
            .field("value", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use oneof_macros::alternative;

    use crate::handlers;

    use super::*;

    #[alternative]
    struct Circle {
        radius: u32,
    }

    #[alternative]
    struct Rect {
        width: u32,
        height: u32,
    }

    #[alternative]
    struct Empty;

    type Shape = OneOf![Circle, Rect, Empty];

    #[test]
    fn test_construction_sets_discriminant() {
        let circle: Shape = OneOf::new(Circle::new(2));
        let rect: Shape = OneOf::new(Rect::new(3, 4));
        let empty: Shape = OneOf::new(Empty);

        assert_eq!(Shape::ALTERNATIVES, 3);
        assert_eq!(circle.index(), 0);
        assert_eq!(rect.index(), 1);
        assert_eq!(empty.index(), 2);

        assert!(circle.is::<Circle, _>());
        assert!(!circle.is::<Rect, _>());
        assert!(!circle.is::<Empty, _>());

        assert!(!rect.is::<Circle, _>());
        assert!(rect.is::<Rect, _>());
        assert!(!rect.is::<Empty, _>());

        assert!(!empty.is::<Circle, _>());
        assert!(!empty.is::<Rect, _>());
        assert!(empty.is::<Empty, _>());
    }

    #[test]
    fn test_get_if_tracks_is() {
        let shape: Shape = OneOf::new(Rect::new(3, 4));

        assert_eq!(shape.get_if::<Circle, _>().is_some(), shape.is::<Circle, _>());
        assert_eq!(shape.get_if::<Rect, _>().is_some(), shape.is::<Rect, _>());
        assert_eq!(shape.get_if::<Empty, _>().is_some(), shape.is::<Empty, _>());
        assert_eq!(shape.get_if::<Rect, _>(), Some(&Rect::new(3, 4)));
    }

    #[test]
    fn test_get_reports_mismatch() {
        let shape: Shape = OneOf::new(Circle::new(1));

        assert_eq!(shape.get::<Circle, _>(), Ok(&Circle::new(1)));

        let err = shape.get::<Rect, _>().unwrap_err();
        assert_eq!(err.expected_index(), 1);
        assert_eq!(err.actual_index(), 0);
        assert!(err.expected().ends_with("Rect"));
    }

    #[test]
    fn test_inspection_is_idempotent() {
        let shape: Shape = OneOf::new(Rect::new(5, 6));
        let before = shape.clone();

        for _ in 0..3 {
            assert!(shape.is::<Rect, _>());
            assert!(shape.get_if::<Circle, _>().is_none());
            assert!(shape.get::<Empty, _>().is_err());
            assert_eq!(shape.index(), 1);
        }
        assert_eq!(shape, before);
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut shape: Shape = OneOf::new(Circle::new(1));

        shape.get_mut::<Circle, _>().unwrap().radius = 9;
        assert!(shape.get_mut::<Rect, _>().is_err());
        assert!(shape.get_if_mut::<Empty, _>().is_none());

        assert_eq!(shape.get_if::<Circle, _>(), Some(&Circle::new(9)));
    }

    #[test]
    fn test_equality() {
        let a: Shape = OneOf::new(Circle::new(1));
        let b: Shape = OneOf::new(Circle::new(1));
        let c: Shape = OneOf::new(Circle::new(2));
        let d: Shape = OneOf::new(Empty);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_default_activates_first_alternative() {
        let value = <OneOf![u8, String]>::default();
        assert_eq!(value.index(), 0);
        assert_eq!(value.get_if::<u8, _>(), Some(&0));

        #[derive(Default)]
        struct Slot {
            value: OneOf![String, u8],
        }

        let slot = Slot::default();
        assert_eq!(slot.value.get_if::<String, _>().map(String::as_str), Some(""));
    }

    #[test]
    fn test_take() {
        let shape: Shape = OneOf::new(Rect::new(1, 2));

        let shape = shape.take::<Circle, _>().unwrap_err();
        assert_eq!(shape.take::<Rect, _>(), Ok(Rect::new(1, 2)));
    }

    #[test]
    fn test_set_releases_previous_value() {
        let tracker = Rc::new(());
        let mut value: OneOf![Rc<()>, u8] = OneOf::new(Rc::clone(&tracker));
        assert_eq!(Rc::strong_count(&tracker), 2);

        value.set(7u8);
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert_eq!(value.index(), 1);
        assert_eq!(value.get_if::<u8, _>(), Some(&7));
    }

    #[test]
    fn test_replace_returns_previous() {
        let mut value: OneOf![i32, String] = OneOf::new(1i32);

        let previous = value.replace(String::from("two"));
        assert_eq!(previous.get_if::<i32, _>(), Some(&1));
        assert_eq!(value.get_if::<String, _>().map(String::as_str), Some("two"));
    }

    #[test]
    fn test_borrowed_views() {
        let mut value: OneOf![i32, String] = OneOf::new(String::from("abc"));

        let len = value
            .as_ref()
            .match_with(handlers![|_: &i32| 0usize, |s: &String| s.len()]);
        assert_eq!(len, 3);

        value
            .as_mut()
            .match_with(handlers![|n: &mut i32| *n += 1, |s: &mut String| s.push('d')]);
        assert_eq!(value.get_if::<String, _>().map(String::as_str), Some("abcd"));
    }

    #[test]
    fn test_match_with_invokes_active_handler_only() {
        let calls = Cell::new(0);
        let shape: Shape = OneOf::new(Rect::new(3, 4));

        let area = shape.match_with(handlers![
            |c: Circle| {
                calls.set(calls.get() + 1);
                3 * c.radius * c.radius
            },
            |r: Rect| r.width * r.height,
            |_: Empty| {
                calls.set(calls.get() + 1);
                0
            },
        ]);

        assert_eq!(area, 12);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_native_match() {
        use crate::list::Cons;

        let value: OneOf![i32, bool] = OneOf::new(true);
        let text = match value.into_inner() {
            Cons::Inl(n) => n.to_string(),
            Cons::Inr(Cons::Inl(b)) => b.to_string(),
            Cons::Inr(Cons::Inr(nil)) => match nil {},
        };
        assert_eq!(text, "true");
    }

    #[test]
    fn test_debug() {
        let value: OneOf![i32, String] = OneOf::new(String::from("x"));
        assert_eq!(format!("{value:?}"), "OneOf { index: 1, value: \"x\" }");
    }
}
