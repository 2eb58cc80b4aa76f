//! Closed-set tagged unions built from native enums.
//!
//! - [`OneOf`] holds exactly one value out of a fixed set of alternative types, with typed
//!   inspection ([`OneOf::is`], [`OneOf::get`], [`OneOf::get_if`]).
//! - [`dispatch`] matches a [`OneOf`] against one handler per alternative; coverage is
//!   checked at build time.
//! - [`Outcome`] and [`Maybe`] are the success/failure and presence/absence
//!   specializations, with combinators for chaining fallible or optional steps.

mod container;
pub mod dispatch;
pub mod error;
pub mod list;
mod maybe;
mod outcome;

pub use crate::container::OneOf;
pub use crate::error::TypeMismatch;
pub use crate::list::{Cons, Here, Nil, There};
pub use crate::maybe::Maybe;
pub use crate::outcome::Outcome;

#[cfg(feature = "macros")]
pub use oneof_macros::alternative;

#[cfg(test)]
pub(crate) mod test_support {
    /// Routes `log` output through the test harness's captured stdout.
    pub fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }
}
