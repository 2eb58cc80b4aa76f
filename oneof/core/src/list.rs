//! Type-level alternative lists.
//!
//! A closed set of alternatives `A, B, C` is represented as the nested native enum
//! `Cons<A, Cons<B, Cons<C, Nil>>>`. Exactly one `Inl` is ever reachable, so the active
//! alternative and its position are always consistent by construction.

use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// A non-empty alternative list.
///
/// `Inl` means the head alternative is active; `Inr` means the active alternative lies
/// somewhere in the tail.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cons<H, T> {
    Inl(H),
    Inr(T),
}

/// The empty alternative list. Uninhabited, so it can never be the active position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nil {}

/// Position of the head alternative.
#[derive(Debug, Clone, Copy, Default)]
pub struct Here;

/// Position one past `I`.
#[derive(Debug, Clone, Copy, Default)]
pub struct There<I>(PhantomData<I>);

/// Builds the alternative list for a set of types.
///
/// ```
/// use oneof_core::{Alts, Cons, Nil};
///
/// type Expected = Cons<u8, Cons<String, Nil>>;
/// let _: Option<Alts![u8, String]> = None::<Expected>;
/// ```
#[macro_export]
macro_rules! Alts {
    () => { $crate::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::Alts![$($rest),*]>
    };
}

/// Operations every alternative list supports regardless of payload types.
pub trait AltList: Sized {
    /// Number of alternatives in the list.
    const LEN: usize;

    /// Zero-based position of the active alternative. Recurses at most `LEN` levels.
    fn index(&self) -> usize;
}

impl AltList for Nil {
    const LEN: usize = 0;

    fn index(&self) -> usize {
        match *self {}
    }
}

impl<H, T: AltList> AltList for Cons<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn index(&self) -> usize {
        match self {
            Cons::Inl(_) => 0,
            Cons::Inr(tail) => 1 + tail.index(),
        }
    }
}

/// Implemented by a list that contains `T` at position `I`.
///
/// `I` is normally left for the compiler to infer. If `T` is not in the list there is no
/// implementation; if `T` appears more than once the position is ambiguous. Both are
/// rejected at build time.
pub trait Member<T, I>: AltList {
    /// Zero-based position of `T` within the list.
    const INDEX: usize;

    /// Wraps `value` as the active alternative.
    fn inject(value: T) -> Self;

    fn get(&self) -> Option<&T>;

    fn get_mut(&mut self) -> Option<&mut T>;

    /// Moves the payload out, or hands the list back unchanged if `T` is not active.
    fn take(self) -> Result<T, Self>;
}

impl<T, Tail: AltList> Member<T, Here> for Cons<T, Tail> {
    const INDEX: usize = 0;

    fn inject(value: T) -> Self {
        Cons::Inl(value)
    }

    fn get(&self) -> Option<&T> {
        match self {
            Cons::Inl(value) => Some(value),
            Cons::Inr(_) => None,
        }
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Cons::Inl(value) => Some(value),
            Cons::Inr(_) => None,
        }
    }

    fn take(self) -> Result<T, Self> {
        match self {
            Cons::Inl(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl<H, T, Tail, I> Member<T, There<I>> for Cons<H, Tail>
where
    Tail: Member<T, I>,
{
    const INDEX: usize = 1 + <Tail as Member<T, I>>::INDEX;

    fn inject(value: T) -> Self {
        Cons::Inr(<Tail as Member<T, I>>::inject(value))
    }

    fn get(&self) -> Option<&T> {
        match self {
            Cons::Inl(_) => None,
            Cons::Inr(tail) => <Tail as Member<T, I>>::get(tail),
        }
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Cons::Inl(_) => None,
            Cons::Inr(tail) => <Tail as Member<T, I>>::get_mut(tail),
        }
    }

    fn take(self) -> Result<T, Self> {
        match self {
            Cons::Inl(head) => Err(Cons::Inl(head)),
            Cons::Inr(tail) => <Tail as Member<T, I>>::take(tail).map_err(Cons::Inr),
        }
    }
}

/// Projects a list to a list of shared references to its alternatives.
pub trait ToRef<'a> {
    type Output: AltList;

    fn to_ref(&'a self) -> Self::Output;
}

impl<'a> ToRef<'a> for Nil {
    type Output = Nil;

    fn to_ref(&'a self) -> Nil {
        match *self {}
    }
}

impl<'a, H: 'a, T: ToRef<'a>> ToRef<'a> for Cons<H, T> {
    type Output = Cons<&'a H, T::Output>;

    fn to_ref(&'a self) -> Self::Output {
        match self {
            Cons::Inl(head) => Cons::Inl(head),
            Cons::Inr(tail) => Cons::Inr(tail.to_ref()),
        }
    }
}

/// Projects a list to a list of exclusive references to its alternatives.
pub trait ToMut<'a> {
    type Output: AltList;

    fn to_mut(&'a mut self) -> Self::Output;
}

impl<'a> ToMut<'a> for Nil {
    type Output = Nil;

    fn to_mut(&'a mut self) -> Nil {
        match *self {}
    }
}

impl<'a, H: 'a, T: ToMut<'a>> ToMut<'a> for Cons<H, T> {
    type Output = Cons<&'a mut H, T::Output>;

    fn to_mut(&'a mut self) -> Self::Output {
        match self {
            Cons::Inl(head) => Cons::Inl(head),
            Cons::Inr(tail) => Cons::Inr(tail.to_mut()),
        }
    }
}

// Prints only the active payload; the nesting is an encoding detail.
impl<H: Debug, T: Debug> Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cons::Inl(head) => head.fmt(f),
            Cons::Inr(tail) => tail.fmt(f),
        }
    }
}
