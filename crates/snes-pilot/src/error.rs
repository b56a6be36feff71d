//! Session failure taxonomy.

use std::io;
use std::path::PathBuf;

/// Failure modes of session operations.
///
/// All of these are local, synchronous failures with no automatic retry.
/// Retrying (say, re-loading once a file appears) is caller policy.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The ROM path did not resolve to readable bytes.
    #[error("ROM not found or unreadable: {path}: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The core refused the image. The machine state is undefined
    /// afterwards, so the session reports itself unloaded.
    #[error("core rejected ROM image: {rom}")]
    LoadRejected { rom: String },

    /// A stepping, input, or capture operation ran with no active ROM.
    #[error("no ROM loaded")]
    NotLoaded,

    /// Frame counts must be positive. Rejected before any core
    /// interaction.
    #[error("frame count must be a positive integer")]
    InvalidFrameCount,

    /// The capture pipeline could not produce an image. Session state is
    /// unaffected.
    #[error("frame encoding failed: {0}")]
    Encoding(#[from] png::EncodingError),
}
