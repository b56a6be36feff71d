//! The emulation session: load → step → query lifecycle.
//!
//! One session per process, created empty at startup and alive for the
//! process lifetime. The session is the sole owner of the core handle;
//! every mutating operation takes `&mut self`, so exclusive ownership is
//! the serialization mechanism — hosts that serve concurrent requests
//! wrap the session in a mutex and operations queue there. Nothing
//! suspends mid-operation, and frame counts are validated up front, so
//! there is no timeout or cancellation machinery.

use std::path::Path;

use snes_cartridge::RomImage;
use snes_core::{Button, SnesCore};

use crate::capture::{FrameCapture, FrameImage};
use crate::config::SessionConfig;
use crate::error::SessionError;

/// The single mutable control object over one emulation core.
pub struct Session {
    core: Box<dyn SnesCore>,
    capture: FrameCapture,
    config: SessionConfig,
    rom_identifier: Option<String>,
    loaded: bool,
}

impl Session {
    /// Create an empty session owning `core`.
    #[must_use]
    pub fn new(core: Box<dyn SnesCore>) -> Self {
        Self::with_config(core, SessionConfig::default())
    }

    /// Create an empty session with explicit configuration.
    #[must_use]
    pub fn with_config(core: Box<dyn SnesCore>, config: SessionConfig) -> Self {
        Self {
            core,
            capture: FrameCapture::new(),
            config,
            rom_identifier: None,
            loaded: false,
        }
    }

    /// Load a ROM from disk, replacing any prior machine state entirely.
    ///
    /// The image is normalized (copier prefix stripped) and its mapping
    /// detected before it reaches the core. On success the machine is
    /// hard-reset, primed for the configured number of frames, and a
    /// fresh capture is returned.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotFound`] if the path is unreadable; the prior
    /// loaded/unloaded state is untouched. [`SessionError::LoadRejected`]
    /// if the core refuses the image; the machine state is undefined at
    /// that point, so the session becomes unloaded rather than keeping
    /// stale state.
    pub fn load(&mut self, path: &Path) -> Result<FrameImage, SessionError> {
        let raw = std::fs::read(path).map_err(|source| SessionError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let image = RomImage::from_bytes(raw);
        let mapping = image.mapping();
        log::debug!(
            "loading {} ({mapping:?}, {} bytes)",
            path.display(),
            image.len()
        );

        if !self.core.load_rom(image.bytes(), mapping.is_hirom()) {
            self.loaded = false;
            self.rom_identifier = None;
            return Err(SessionError::LoadRejected {
                rom: path.display().to_string(),
            });
        }

        self.core.reset(true);
        self.prime();
        self.loaded = true;
        self.rom_identifier = Some(path.display().to_string());
        log::info!("loaded {}", path.display());

        self.capture.capture(self.core.as_mut())
    }

    /// Run exactly one full-fidelity frame and return a capture.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoaded`] if no ROM is loaded.
    pub fn advance_frame(&mut self) -> Result<FrameImage, SessionError> {
        self.require_loaded()?;
        self.core.run_frame(false);
        self.capture.capture(self.core.as_mut())
    }

    /// Run exactly `frames` full-fidelity frames with no captures.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoaded`] if no ROM is loaded;
    /// [`SessionError::InvalidFrameCount`] for a zero count, before any
    /// core interaction.
    pub fn wait_frames(&mut self, frames: u32) -> Result<(), SessionError> {
        self.require_loaded()?;
        Self::require_positive(frames)?;
        for _ in 0..frames {
            self.core.run_frame(false);
        }
        Ok(())
    }

    /// Hold a button for `hold_frames` frames, then return the rendered
    /// frame immediately after release.
    ///
    /// Intermediate frames during the hold are observationally unneeded,
    /// so they run with video generation disabled; one final
    /// full-fidelity frame after release makes the returned capture
    /// complete. A hold of 1 therefore still advances two frames.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoaded`] if no ROM is loaded;
    /// [`SessionError::InvalidFrameCount`] for a zero hold.
    pub fn press_button(
        &mut self,
        button: Button,
        hold_frames: u32,
    ) -> Result<FrameImage, SessionError> {
        self.require_loaded()?;
        Self::require_positive(hold_frames)?;
        self.hold(button, hold_frames);
        self.core.run_frame(false);
        self.capture.capture(self.core.as_mut())
    }

    /// Mirror externally observed input onto the core, best-effort.
    ///
    /// Used for passive observers rather than authoritative commands: no
    /// trailing rendered frame, no capture, and silently a no-op when no
    /// ROM is loaded or the hold is zero.
    pub fn mirror_button(&mut self, button: Button, hold_frames: u32) {
        if !self.loaded || hold_frames == 0 {
            return;
        }
        self.hold(button, hold_frames);
    }

    /// Capture the current screen without advancing time.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoaded`] if no ROM is loaded.
    pub fn current_screen(&mut self) -> Result<FrameImage, SessionError> {
        self.require_loaded()?;
        self.capture.capture(self.core.as_mut())
    }

    /// Reset the loaded machine and re-run the priming frames.
    ///
    /// # Errors
    ///
    /// [`SessionError::NotLoaded`] if no ROM is loaded.
    pub fn reset(&mut self, hard: bool) -> Result<(), SessionError> {
        self.require_loaded()?;
        self.core.reset(hard);
        self.prime();
        Ok(())
    }

    /// Whether a ROM is currently loaded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Identifier (path) of the currently loaded ROM, if any.
    #[must_use]
    pub fn rom_identifier(&self) -> Option<&str> {
        self.rom_identifier.as_deref()
    }

    /// Press, fast-step the hold, release.
    fn hold(&mut self, button: Button, hold_frames: u32) {
        self.core.set_button_pressed(button.code());
        for _ in 0..hold_frames {
            self.core.run_frame(true);
        }
        self.core.set_button_released(button.code());
    }

    /// Full-fidelity frames after load/reset, up to a first displayable
    /// frame.
    fn prime(&mut self) {
        for _ in 0..self.config.priming_frames {
            self.core.run_frame(false);
        }
    }

    fn require_loaded(&self) -> Result<(), SessionError> {
        if self.loaded {
            Ok(())
        } else {
            Err(SessionError::NotLoaded)
        }
    }

    fn require_positive(frames: u32) -> Result<(), SessionError> {
        if frames == 0 {
            Err(SessionError::InvalidFrameCount)
        } else {
            Ok(())
        }
    }
}
