//! `CoreLog` adapter for the `log` facade.

use snes_core::CoreLog;

/// Forwards core diagnostics to `log::debug!`.
///
/// Hand this to a core implementation at construction; the host's chosen
/// `log` sink then receives the core's messages under the `snes-core`
/// target.
pub struct FacadeLog;

impl CoreLog for FacadeLog {
    fn log(&self, message: &str) {
        log::debug!(target: "snes-core", "{message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usable_through_the_capability_trait() {
        let sink: &dyn CoreLog = &FacadeLog;
        sink.log("reset vector read");
    }
}
