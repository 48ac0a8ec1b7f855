//! Width-aware word helpers.
//!
//! Every register in this crate lives in a `u64` regardless of the CRC width.
//! These helpers keep the bits above `width` clear and move values between the
//! two orientations the engine uses.

/// Number of bits in the working word.
pub const WORD_BITS: u32 = u64::BITS;

/// Mask selecting the low `width` bits. `width` must be in `1..=64`.
#[inline]
#[must_use]
pub const fn mask(width: u8) -> u64 {
  u64::MAX >> (WORD_BITS - width as u32)
}

/// Reflect (bit-reverse) the low `width` bits of `value`.
///
/// Bits above `width` are ignored and come back cleared.
#[inline]
#[must_use]
pub const fn reflect(value: u64, width: u8) -> u64 {
  value.reverse_bits() >> (WORD_BITS - width as u32)
}

/// Read eight bytes as a little-endian word.
#[inline]
#[must_use]
pub fn load_le(bytes: &[u8; 8]) -> u64 {
  u64::from_le_bytes(*bytes)
}

/// Read eight bytes as a big-endian word.
#[inline]
#[must_use]
pub fn load_be(bytes: &[u8; 8]) -> u64 {
  u64::from_be_bytes(*bytes)
}
