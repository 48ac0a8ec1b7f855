//! CRC combination operations.
//!
//! This module implements the combine operation for CRC registers, which
//! computes `reg(A || B)` from `reg(A)`, `reg(B)`, and `len(B)` in O(log n)
//! time.
//!
//! # Mathematical Background
//!
//! CRC can be expressed as polynomial arithmetic in GF(2). Appending `n` zero
//! bits to a register multiplies it by `x^n` modulo the generator polynomial,
//! and a register is affine in its starting value, so
//!
//! ```text
//! reg(A || B) = (reg(A) ^ init) * x^len(B) mod P  ^  reg(B)
//! ```
//!
//! when `reg(B)` was computed on its own from `init`. `x^len(B)` comes from the
//! model's table of repeated squares, one multiplication per set bit of the
//! length.
//!
//! The operation is associative but not commutative: fold chunk registers
//! left to right in their original order.

use crate::Model;

/// Combine two registers, `len_b` given in bytes.
///
/// `reg_a` is the register after processing `A` (from any starting value),
/// `reg_b` the register after processing `B` independently from
/// [`Model::init_register`]. Returns the register after processing `A || B`.
///
/// A zero `len_b` returns `reg_a` unchanged.
///
/// # Examples
///
/// ```
/// use anycrc::{CrcParams, Model, combine, compute};
///
/// let model = Model::new(CrcParams::CRC32_ISO_HDLC)?;
/// let (a, b) = b"123456789".split_at(4);
/// let reg_a = compute(&model, model.init_register(), a);
/// let reg_b = compute(&model, model.init_register(), b);
/// let reg = combine(&model, reg_a, reg_b, b.len() as u64);
/// assert_eq!(model.finalize(reg), 0xCBF4_3926);
/// # Ok::<(), anycrc::Error>(())
/// ```
#[must_use]
pub fn combine(model: &Model, reg_a: u64, reg_b: u64, len_b: u64) -> u64 {
  if len_b == 0 {
    return reg_a;
  }
  let gf = model.gf();
  // x^(8n) = (x^n)^8, which avoids overflowing the bit count.
  let mut xp = model.combine_table().x_pow(gf, len_b);
  for _ in 0..3 {
    xp = gf.mul(xp, xp);
  }
  join(model, gf.mul(xp, head(model, reg_a)), reg_b)
}

/// Combine two registers, `len_b` given in bits.
///
/// Same as [`combine`] for a `B` produced by
/// [`compute_bits`](crate::compute_bits).
#[must_use]
pub fn combine_bits(model: &Model, reg_a: u64, reg_b: u64, len_b: u64) -> u64 {
  if len_b == 0 {
    return reg_a;
  }
  let a = model.combine_table().shift(model.gf(), head(model, reg_a), len_b);
  join(model, a, reg_b)
}

/// `reg_a ^ init` in polynomial layout, ready to be shifted past `B`.
#[inline]
fn head(model: &Model, reg_a: u64) -> u64 {
  model.to_poly(reg_a ^ model.init_register())
}

#[inline]
fn join(model: &Model, shifted_a: u64, reg_b: u64) -> u64 {
  model.poly_to_register(shifted_a ^ model.to_poly(reg_b))
}

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;
  use crate::{CrcParams, compute, compute_bits};

  fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(37).wrapping_add(11)).collect()
  }

  fn params() -> [CrcParams; 7] {
    [
      CrcParams::CRC32_ISO_HDLC,
      CrcParams::CRC16_IBM_3740,
      CrcParams::CRC24_OPENPGP,
      CrcParams::CRC5_USB,
      CrcParams::CRC12_UMTS,
      CrcParams::CRC64_NVME,
      CrcParams::new(1, 1, 1, false, false, 0),
    ]
  }

  #[test]
  fn test_combine_matches_sequential() {
    for p in params() {
      let m = Model::new(p).unwrap();
      let data = pattern(300);
      let expected = compute(&m, m.init_register(), &data);
      for split in [0, 1, 8, 15, 16, 17, 150, 299, 300] {
        let (a, b) = data.split_at(split);
        let ra = compute(&m, m.init_register(), a);
        let rb = compute(&m, m.init_register(), b);
        assert_eq!(combine(&m, ra, rb, b.len() as u64), expected, "{p:?} split={split}");
      }
    }
  }

  #[test]
  fn test_combine_bits_matches_chained() {
    for p in params() {
      let m = Model::new(p).unwrap();
      let a = pattern(9);
      let b = pattern(7);
      for (la, lb) in [(1usize, 1usize), (3, 13), (8, 8), (13, 50), (72, 3), (71, 56)] {
        let ra = compute_bits(&m, m.init_register(), &a, la);
        let rb = compute_bits(&m, m.init_register(), &b, lb);
        let expected = compute_bits(&m, ra, &b, lb);
        assert_eq!(combine_bits(&m, ra, rb, lb as u64), expected, "{p:?} la={la} lb={lb}");
      }
    }
  }

  #[test]
  fn test_combine_bits_every_short_length() {
    let zeros = [0u8; 9];
    for p in params() {
      let m = Model::new(p).unwrap();
      let ra = compute(&m, m.init_register(), b"abc");
      for n in 1..=72usize {
        let rb = compute_bits(&m, m.init_register(), &zeros, n);
        let expected = compute_bits(&m, ra, &zeros, n);
        assert_eq!(combine_bits(&m, ra, rb, n as u64), expected, "{p:?} n={n}");
      }
    }
  }

  #[test]
  fn test_zero_length_returns_first() {
    let m = Model::new(CrcParams::CRC16_IBM_3740).unwrap();
    assert_eq!(combine(&m, 0x1234, 0x5678, 0), 0x1234);
    assert_eq!(combine_bits(&m, 0x1234, 0x5678, 0), 0x1234);
  }

  #[test]
  fn test_combine_is_not_commutative() {
    let m = Model::new(CrcParams::CRC32_ISO_HDLC).unwrap();
    let a = b"hello, ";
    let b = b"world!!";
    let ra = compute(&m, m.init_register(), a);
    let rb = compute(&m, m.init_register(), b);
    let forward = combine(&m, ra, rb, b.len() as u64);
    let swapped = combine(&m, rb, ra, a.len() as u64);
    assert_ne!(forward, swapped);
  }

  #[test]
  fn test_byte_and_bit_lengths_agree() {
    let m = Model::new(CrcParams::CRC64_XZ).unwrap();
    for n in [1u64, 9, 1 << 20, 1 << 37] {
      assert_eq!(combine(&m, 0xDEAD, 0xBEEF, n), combine_bits(&m, 0xDEAD, 0xBEEF, 8 * n));
    }
    // Byte counts whose bit count overflows u64 are still accepted.
    let _ = combine(&m, 0xDEAD, 0xBEEF, u64::MAX);
  }
}
