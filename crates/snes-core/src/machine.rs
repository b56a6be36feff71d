//! The stepping-core capability contract.

/// Native output canvas width in pixels (SNES hi-res canvas).
pub const SCREEN_WIDTH: u32 = 512;

/// Native output canvas height in pixels (both interlace fields).
pub const SCREEN_HEIGHT: u32 = 480;

/// A cycle-stepped SNES emulation core.
///
/// The control layer owns exactly one core and drives it exclusively
/// through these operations. Nothing here exposes machine internals:
/// the core is an opaque box that loads, steps, takes input, and exports
/// pixels.
pub trait SnesCore {
    /// Load a normalized (copier-header-free) ROM image.
    ///
    /// `high_mapping` selects HiROM address decoding; `false` means LoROM.
    /// Returns `false` if the core rejects the image. After a rejected
    /// load the machine state is undefined.
    fn load_rom(&mut self, rom: &[u8], high_mapping: bool) -> bool;

    /// Reset the machine. A hard reset is equivalent to a power cycle.
    fn reset(&mut self, hard: bool);

    /// Advance the machine by exactly one frame.
    ///
    /// With `skip_video` set the core skips video-buffer generation for
    /// the frame. Machine state advances identically either way; only the
    /// rendered output is affected.
    fn run_frame(&mut self, skip_video: bool);

    /// Assert a controller button down. Codes come from [`Button::code`].
    ///
    /// [`Button::code`]: crate::Button::code
    fn set_button_pressed(&mut self, code: u8);

    /// Release a controller button.
    fn set_button_released(&mut self, code: u8);

    /// Export the current frame into `buffer` as RGBA8.
    ///
    /// The buffer is `SCREEN_WIDTH * SCREEN_HEIGHT * 4` bytes. Exporting
    /// has no effect on machine state.
    fn set_pixels(&mut self, buffer: &mut [u8]);
}
