//! Strategy construction errors.

use thiserror::Error;

use crate::SplitOptions;

/// A split configuration that has no built-in strategy.
///
/// Raised when the strategy is created, before any buffer is scanned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// The options cannot be honored for this element type (for example,
    /// `TRIM_ENTRIES` over integers, which have no notion of whitespace).
    #[error("split options {options:?} are not supported for element type `{element}`")]
    Unsupported {
        element: &'static str,
        options: SplitOptions,
    },
}
