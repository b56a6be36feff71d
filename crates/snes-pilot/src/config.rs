//! Session configuration.

/// Default number of priming frames after a load or reset.
///
/// Enough for the core to populate a first displayable frame on typical
/// titles.
pub const DEFAULT_PRIMING_FRAMES: u32 = 5;

/// Session configuration.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Frames advanced after a load or reset before the first capture.
    pub priming_frames: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            priming_frames: DEFAULT_PRIMING_FRAMES,
        }
    }
}
