//! Search error types.

use thiserror::Error;
use waygrid_core::Point;

/// Precondition violations of [`search`](crate::search).
///
/// A goal that cannot be reached is *not* an error — it is reported as
/// `Ok(None)`. Only malformed invocations land here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start point {0} is outside the canvas bounds")]
    StartOutOfBounds(Point),
    #[error("end point {0} is outside the canvas bounds")]
    EndOutOfBounds(Point),
}
