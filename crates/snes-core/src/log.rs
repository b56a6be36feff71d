//! Logger capability for core implementations.
//!
//! Cores receive a logger at construction instead of reaching for ambient
//! globals. Hosts decide where the messages go.

/// A logging sink a core implementation writes diagnostics to.
pub trait CoreLog {
    /// Emit one diagnostic message.
    fn log(&self, message: &str);
}

/// A logger that discards everything.
pub struct NullLog;

impl CoreLog for NullLog {
    fn log(&self, _message: &str) {}
}
