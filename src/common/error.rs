//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Configuration errors are raised before any simulation state exists; the
/// simulation loop itself cannot fail.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a trace or writing a report.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Frame count outside the accepted range.
    #[error("Invalid frame count {capacity}: must range from {min} to {max}")]
    InvalidCapacity {
        capacity: usize,
        min: usize,
        max: usize,
    },

    /// Capacity sweep parameters that cannot produce a run.
    #[error("Invalid frame sweep: {0}")]
    InvalidSweep(String),

    /// Policy name not recognised on the command line.
    #[error("Unknown replacement policy '{0}': pick fifo, lru or random")]
    UnknownPolicy(String),

    /// A trace token that is not a non-negative integer.
    ///
    /// `position` is the 1-based index of the token in the trace.
    #[error("Invalid page reference '{token}' at position {position}")]
    InvalidReference { position: usize, token: String },
}
