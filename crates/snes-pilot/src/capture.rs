//! Frame capture: raw core pixel state → encoded PNG still.

use std::fs;
use std::io;
use std::path::Path;

use snes_core::{SCREEN_HEIGHT, SCREEN_WIDTH, SnesCore};

use crate::error::SessionError;

/// An encoded still of the emulated screen (512×480 RGBA, PNG).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    png: Vec<u8>,
}

impl FrameImage {
    /// Canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        SCREEN_WIDTH
    }

    /// Canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        SCREEN_HEIGHT
    }

    /// The encoded PNG bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.png
    }

    /// Consume the image, yielding the encoded PNG bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.png
    }

    /// Write the encoded PNG to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.png)
    }
}

/// Converts the core's pixel export into a [`FrameImage`].
///
/// Owns one fixed-size RGBA buffer, reused across captures. Capturing has
/// no effect on machine state: two captures with no intervening step
/// produce byte-identical output.
pub struct FrameCapture {
    rgba: Vec<u8>,
}

impl FrameCapture {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rgba: vec![0; (SCREEN_WIDTH * SCREEN_HEIGHT * 4) as usize],
        }
    }

    /// Fill the pixel buffer from the core and encode it as a PNG.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Encoding`] if the encoder fails. A failed
    /// capture never yields a partial image.
    pub fn capture(&mut self, core: &mut dyn SnesCore) -> Result<FrameImage, SessionError> {
        core.set_pixels(&mut self.rgba);

        let mut png_buf = Vec::new();
        let mut encoder = png::Encoder::new(&mut png_buf, SCREEN_WIDTH, SCREEN_HEIGHT);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.rgba)?;
        writer.finish()?;

        Ok(FrameImage { png: png_buf })
    }
}

impl Default for FrameCapture {
    fn default() -> Self {
        Self::new()
    }
}
