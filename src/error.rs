//! Errors surfaced by fallible constructors.
//!
//! Pulling from a sequence never fails: end of sequence is the only absence
//! signal. The one place an error can be reported is when a source has to
//! acquire an external resource up front, see [`try_lines`](crate::build::try_lines).

use std::path::PathBuf;

/// Error type for sequence constructors.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
