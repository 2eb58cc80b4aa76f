use thiserror::Error;

/// Error returned when a typed access names an alternative that is not active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bad variant access: expected {expected} (alternative {expected_index}), found alternative {actual_index}")]
pub struct TypeMismatch {
    expected: &'static str,
    expected_index: usize,
    actual_index: usize,
}

impl TypeMismatch {
    pub fn new(expected: &'static str, expected_index: usize, actual_index: usize) -> Self {
        Self {
            expected,
            expected_index,
            actual_index,
        }
    }

    /// Name of the requested alternative type.
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Position of the requested alternative.
    pub fn expected_index(&self) -> usize {
        self.expected_index
    }

    /// Position of the alternative that was actually active.
    pub fn actual_index(&self) -> usize {
        self.actual_index
    }
}

/// Reports a broken usage contract (e.g. `unwrap()` on the wrong state) and aborts the
/// current thread. The message is fixed; payloads are never formatted.
#[cold]
#[track_caller]
pub(crate) fn contract_violation(msg: &'static str) -> ! {
    log::error!("{msg}");
    panic!("{msg}")
}
