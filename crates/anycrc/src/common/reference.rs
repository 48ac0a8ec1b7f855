//! Bitwise reference implementation for every width.
//!
//! This module is the canonical "source of truth" for CRC computation. It
//! simulates the textbook shift register one message bit at a time, directly
//! from the raw [`CrcParams`], without tables and without the word-alignment
//! tricks the fast paths use:
//!
//! - **Obviously correct**: The loop mirrors the mathematical definition
//! - **Width-agnostic**: Works for 1..=64 bits, including widths that are not
//!   a multiple of 8
//! - **Bit-granular**: Accepts lengths in bits, so it also defines the meaning
//!   of partial trailing bytes
//!
//! All optimized kernels (byte-at-a-time, slice-by-16, combine) must produce
//! identical registers.
//!
//! # Register Convention
//!
//! The register is the Rocksoft-model register: MSB-first, the value that
//! `refout` would reflect. Reflected input (`refin`) only changes the order in
//! which bits are taken out of each byte.
//!
//! These are intentionally slow (~8 operations per bit). Use for verification,
//! test oracles, and tiny inputs.

use crate::{CrcParams, common::bits};

/// Feed one message bit into a Rocksoft register.
#[inline]
#[must_use]
pub const fn step(poly: u64, width: u8, register: u64, bit: bool) -> u64 {
  let top = 1u64 << (width - 1);
  let feedback = ((register & top) != 0) ^ bit;
  let shifted = (register << 1) & bits::mask(width);
  if feedback { shifted ^ poly } else { shifted }
}

/// Bitwise CRC over whole bytes.
///
/// # Returns
///
/// The updated register (caller applies `finalize` when done).
#[must_use]
pub fn crc_bitwise(params: &CrcParams, register: u64, data: &[u8]) -> u64 {
  crc_bitwise_bits(params, register, data, data.len().saturating_mul(8))
}

/// Bitwise CRC over the first `bit_len` bits of `data`.
///
/// Bit `j` of the message is taken from byte `j / 8`: for reflected-input
/// models starting at that byte's least significant bit, otherwise starting at
/// its most significant bit.
///
/// `bit_len` is clamped to the bits available in `data`.
#[must_use]
pub fn crc_bitwise_bits(params: &CrcParams, register: u64, data: &[u8], bit_len: usize) -> u64 {
  let m = bits::mask(params.width);
  let poly = params.poly & m;
  let mut reg = register & m;

  let mut remaining = bit_len;
  for &byte in data {
    if remaining == 0 {
      break;
    }
    let take = remaining.min(8);
    for pos in 0..take {
      let bit = if params.refin {
        (byte >> pos) & 1
      } else {
        (byte >> (7 - pos)) & 1
      };
      reg = step(poly, params.width, reg, bit != 0);
    }
    remaining -= take;
  }
  reg
}

#[cfg(test)]
mod tests {
  use super::*;

  const CHECK: &[u8] = b"123456789";

  fn finalize(p: &CrcParams, reg: u64) -> u64 {
    let r = if p.refout { bits::reflect(reg, p.width) } else { reg };
    r ^ p.xorout
  }

  #[test]
  fn test_crc32_check() {
    let p = CrcParams::CRC32_ISO_HDLC;
    assert_eq!(finalize(&p, crc_bitwise(&p, p.init, CHECK)), 0xCBF4_3926);
  }

  #[test]
  fn test_crc16_arc_check() {
    let p = CrcParams::CRC16_ARC;
    assert_eq!(finalize(&p, crc_bitwise(&p, p.init, CHECK)), 0xBB3D);
  }

  #[test]
  fn test_crc5_usb_check() {
    let p = CrcParams::CRC5_USB;
    assert_eq!(finalize(&p, crc_bitwise(&p, p.init, CHECK)), 0x19);
  }

  #[test]
  fn test_crc12_umts_check() {
    let p = CrcParams::CRC12_UMTS;
    assert_eq!(finalize(&p, crc_bitwise(&p, p.init, CHECK)), 0xDAF);
  }

  #[test]
  fn test_crc64_xz_check() {
    let p = CrcParams::CRC64_XZ;
    assert_eq!(finalize(&p, crc_bitwise(&p, p.init, CHECK)), 0x995D_C9BB_DF19_39FA);
  }

  #[test]
  fn test_empty_is_identity() {
    let p = CrcParams::CRC24_OPENPGP;
    assert_eq!(crc_bitwise(&p, 0x12_3456, &[]), 0x12_3456);
    assert_eq!(crc_bitwise_bits(&p, 0x12_3456, CHECK, 0), 0x12_3456);
  }

  #[test]
  fn test_bits_split_matches_whole() {
    for p in [CrcParams::CRC16_IBM_3740, CrcParams::CRC32_ISO_HDLC, CrcParams::CRC5_USB] {
      let whole = crc_bitwise(&p, p.init, CHECK);
      let first = crc_bitwise_bits(&p, p.init, CHECK, 8 * 4);
      assert_eq!(crc_bitwise(&p, first, &CHECK[4..]), whole);
    }
  }

  #[test]
  fn test_bit_len_clamped() {
    let p = CrcParams::CRC8_MAXIM_DOW;
    assert_eq!(crc_bitwise_bits(&p, 0, CHECK, 1000), crc_bitwise(&p, 0, CHECK));
  }
}
