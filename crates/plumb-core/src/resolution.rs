//! Control-flow signal for chained handler dispatch.

use serde::{Deserialize, Serialize};

/// Outcome of one handler hook invocation.
///
/// This is not an error channel: [`ResolutionResult::Handled`] means "stop
/// dispatching further handlers for this attribute/element",
/// [`ResolutionResult::NotHandled`] means "continue to the next handler in
/// the chain". A handler that does not recognize its input returns
/// `NotHandled`, never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResolutionResult {
    /// Defer to the next handler in chain order.
    #[default]
    NotHandled,
    /// Fully handled; stop dispatching.
    Handled,
}

impl ResolutionResult {
    /// True iff the operation was handled.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        matches!(self, Self::Handled)
    }
}

impl From<bool> for ResolutionResult {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Handled
        } else {
            Self::NotHandled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_handled() {
        assert_eq!(ResolutionResult::default(), ResolutionResult::NotHandled);
        assert!(!ResolutionResult::NotHandled.is_handled());
        assert!(ResolutionResult::Handled.is_handled());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(ResolutionResult::from(true), ResolutionResult::Handled);
        assert_eq!(ResolutionResult::from(false), ResolutionResult::NotHandled);
    }
}
