//! Exhaustive dispatch over the active alternative.
//!
//! A handler set is a heterogeneous list holding one handler per alternative, in the order
//! the alternatives were declared. The set is checked against the alternative list by the
//! trait system, so a missing handler, an extra handler, or a handler taking the wrong type
//! is a build error rather than a runtime failure:
//!
//! ```
//! use oneof_core::{handlers, OneOf};
//!
//! let value: OneOf![u8, String, bool] = OneOf::new(false);
//! let text = value.match_with(handlers![
//!     |n: u8| format!("byte {n}"),
//!     |s: String| s,
//!     |b: bool| format!("flag {b}"),
//! ]);
//! assert_eq!(text, "flag false");
//! ```
//!
//! Leaving an alternative uncovered does not build:
//!
//! ```compile_fail
//! use oneof_core::{handlers, OneOf};
//!
//! let value: OneOf![u8, String, bool] = OneOf::new(false);
//! let text = value.match_with(handlers![
//!     |n: u8| format!("byte {n}"),
//!     |s: String| s,
//! ]);
//! ```
//!
//! Neither does a handler for a type outside the set:
//!
//! ```compile_fail
//! use oneof_core::{handlers, OneOf};
//!
//! let value: OneOf![u8, bool] = OneOf::new(false);
//! let n = value.match_with(handlers![|n: u8| n as u32, |c: char| c as u32]);
//! ```
//!
//! Nor does a handler left over once every alternative is covered:
//!
//! ```compile_fail
//! use oneof_core::{handlers, OneOf};
//!
//! let value: OneOf![u8, bool] = OneOf::new(false);
//! let n = value.match_with(handlers![
//!     |n: u8| n as u32,
//!     |b: bool| b as u32,
//!     |c: char| c as u32,
//! ]);
//! ```
//!
//! Handlers are matched by position, so the right types in the wrong order are rejected:
//!
//! ```compile_fail
//! use oneof_core::{handlers, OneOf};
//!
//! let value: OneOf![u8, bool] = OneOf::new(false);
//! let n = value.match_with(handlers![|b: bool| b as u32, |n: u8| n as u32]);
//! ```

use crate::container::OneOf;
use crate::list::{AltList, Cons, Nil};

/// A non-empty handler list.
#[derive(Debug, Clone, Copy)]
pub struct HCons<F, Rest> {
    pub head: F,
    pub tail: Rest,
}

/// The empty handler list.
#[derive(Debug, Clone, Copy, Default)]
pub struct HNil;

/// Builds a handler list for [`OneOf::match_with`].
#[macro_export]
macro_rules! handlers {
    () => { $crate::dispatch::HNil };
    ($head:expr $(, $rest:expr)* $(,)?) => {
        $crate::dispatch::HCons {
            head: $head,
            tail: $crate::handlers!($($rest),*),
        }
    };
}

/// Implemented by an alternative list when `Handlers` covers it exactly, each handler
/// returning `R`.
pub trait Dispatch<Handlers, R> {
    fn dispatch(self, handlers: Handlers) -> R;
}

impl<R> Dispatch<HNil, R> for Nil {
    fn dispatch(self, _: HNil) -> R {
        match self {}
    }
}

impl<H, T, F, Rest, R> Dispatch<HCons<F, Rest>, R> for Cons<H, T>
where
    F: FnOnce(H) -> R,
    T: Dispatch<Rest, R>,
{
    fn dispatch(self, handlers: HCons<F, Rest>) -> R {
        match self {
            Cons::Inl(head) => (handlers.head)(head),
            Cons::Inr(tail) => tail.dispatch(handlers.tail),
        }
    }
}

/// Invokes the handler for the active alternative of `value`.
pub fn dispatch<L, F, R>(value: OneOf<L>, handlers: F) -> R
where
    L: AltList + Dispatch<F, R>,
{
    value.match_with(handlers)
}
