//! SNES cartridge image normalization and mapping detection.
//!
//! Dumps may carry a legacy 512-byte copier prefix, which is stripped
//! before any header inspection. Mapping detection distinguishes the two
//! incompatible layouts (LoROM and HiROM) by running the internal-header
//! checksum-complement consistency check against both candidate header
//! regions, with a speed-nibble tie-break when both look valid.
//!
//! Detection is pure: identical bytes always yield identical results, and
//! truncated or empty input degrades to LoROM rather than failing.

/// Length of the legacy copier prefix some dump tools prepend.
pub const COPIER_HEADER_LEN: usize = 512;

/// LoROM internal header: complement word, checksum word, minimum length.
const LOROM_COMPLEMENT: usize = 0x7FDC;
const LOROM_CHECKSUM: usize = 0x7FDE;
const LOROM_MIN_LEN: usize = 0x7FE0;

/// HiROM internal header: same fields, one mirror page up.
const HIROM_COMPLEMENT: usize = 0xFFDC;
const HIROM_CHECKSUM: usize = 0xFFDE;
const HIROM_MIN_LEN: usize = 0xFFE0;

/// ROM speed/type byte in the HiROM header region.
const HIROM_SPEED: usize = 0xFFD5;

/// Cartridge address-mapping scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    LoRom,
    HiRom,
}

impl Mapping {
    /// Whether the core should use HiROM address decoding.
    #[must_use]
    pub const fn is_hirom(self) -> bool {
        matches!(self, Self::HiRom)
    }
}

/// A normalized cartridge image: copier prefix stripped, mapping detected.
///
/// Immutable once constructed. The mapping is derived exactly once, here;
/// it is never recomputed downstream.
#[derive(Debug, Clone)]
pub struct RomImage {
    data: Vec<u8>,
    mapping: Mapping,
}

impl RomImage {
    /// Normalize a raw dump and detect its mapping.
    ///
    /// Never fails: a short or empty buffer yields a LoROM image with
    /// whatever bytes remain after stripping.
    #[must_use]
    pub fn from_bytes(mut raw: Vec<u8>) -> Self {
        if raw.len() % 1024 == COPIER_HEADER_LEN {
            raw.drain(..COPIER_HEADER_LEN);
        }
        let mapping = detect_mapping(&raw);
        Self { data: raw, mapping }
    }

    /// The detected address-mapping scheme.
    #[must_use]
    pub fn mapping(&self) -> Mapping {
        self.mapping
    }

    /// The normalized image bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Length of the normalized image in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Consume the image, yielding the normalized bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Detect the mapping of an already-stripped image.
///
/// A header region validates when its 16-bit complement and checksum words
/// sum to 0xFFFF. If only HiROM validates the image is HiROM; if both
/// validate, the high nibble of the HiROM-region speed/type byte breaks
/// the tie (3 selects HiROM). Everything else, including images too short
/// to hold either header, is LoROM.
///
/// The tie-break is a known-imperfect real-world heuristic; compatibility
/// depends on reproducing it bit-exactly, so it stays as is.
fn detect_mapping(rom: &[u8]) -> Mapping {
    let lorom_valid = checksum_consistent(rom, LOROM_COMPLEMENT, LOROM_CHECKSUM, LOROM_MIN_LEN);
    let hirom_valid = checksum_consistent(rom, HIROM_COMPLEMENT, HIROM_CHECKSUM, HIROM_MIN_LEN);

    match (lorom_valid, hirom_valid) {
        (_, false) => Mapping::LoRom,
        (false, true) => Mapping::HiRom,
        (true, true) => {
            if speed_code(rom, HIROM_SPEED) == Some(3) {
                Mapping::HiRom
            } else {
                Mapping::LoRom
            }
        }
    }
}

/// Whether `complement + checksum == 0xFFFF` for a candidate header region.
///
/// Regions shorter than `min_len` never validate.
fn checksum_consistent(rom: &[u8], complement: usize, checksum: usize, min_len: usize) -> bool {
    if rom.len() < min_len {
        return false;
    }
    let complement = read_u16_le(rom, complement);
    let checksum = read_u16_le(rom, checksum);
    complement.wrapping_add(checksum) == 0xFFFF
}

/// High nibble of the speed/type byte, or `None` if out of range.
fn speed_code(rom: &[u8], offset: usize) -> Option<u8> {
    rom.get(offset).map(|b| b >> 4)
}

fn read_u16_le(rom: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([rom[offset], rom[offset + 1]])
}
