//! GF(2) polynomial arithmetic for CRC combination.
//!
//! When you have `crc(A)` and `crc(B)`, you can compute `crc(A || B)` without
//! reprocessing `A`. Appending `n` zero bits to a register is multiplication
//! by `x^n` modulo the generator polynomial `P(x)`, so
//!
//! ```text
//! reg(A || B) = (reg(A) ^ init) * x^len(B) mod P  ^  reg(B)
//! ```
//!
//! where `reg(B)` was computed on its own starting from `init`.
//!
//! # Representation
//!
//! Values are width-bit polynomials in the low bits of a `u64`. For reflected
//! models bit `width - 1` holds the `x^0` coefficient (the reflected layout),
//! otherwise bit 0 does.
//!
//! # Combine Table
//!
//! `x^(2^k) mod P` is tabulated by repeated squaring, so `x^n` for any `n` is
//! the product of at most 64 table entries picked by the set bits of `n`. The
//! sequence of squares eventually repeats; the table stops at the first
//! repeat and records where the cycle returns to, which keeps it short for
//! narrow polynomials.

use alloc::vec::Vec;

use crate::{Error, common::bits};

/// Arithmetic modulo a CRC polynomial, in one of the two bit orders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2 {
  /// Polynomial sans `x^width`, low-aligned, reflected if `rev`.
  poly: u64,
  width: u8,
  rev: bool,
}

impl Gf2 {
  /// Arithmetic for a low-aligned working polynomial.
  #[must_use]
  pub const fn new(poly: u64, width: u8, rev: bool) -> Self {
    Self { poly, width, rev }
  }

  #[inline]
  const fn top(&self) -> u64 {
    1u64 << (self.width - 1)
  }

  /// The polynomial `1` (`x^0`).
  #[inline]
  #[must_use]
  pub const fn one(&self) -> u64 {
    if self.rev { self.top() } else { 1 }
  }

  /// Multiply `v` by `x` modulo `P`.
  #[inline]
  #[must_use]
  pub const fn mul_x(&self, v: u64) -> u64 {
    if self.rev {
      if v & 1 != 0 { (v >> 1) ^ self.poly } else { v >> 1 }
    } else {
      let shifted = (v << 1) & bits::mask(self.width);
      if v & self.top() != 0 { shifted ^ self.poly } else { shifted }
    }
  }

  /// Return `a(x) * b(x) mod P(x)`.
  #[must_use]
  pub const fn mul(&self, mut a: u64, mut b: u64) -> u64 {
    let m = bits::mask(self.width);
    let top = self.top();
    let mut prod = 0u64;
    a &= m;
    if self.rev {
      while a != 0 {
        if a & top != 0 {
          prod ^= b;
        }
        a = (a << 1) & m;
        b = self.mul_x(b);
      }
    } else {
      while a != 0 {
        if a & 1 != 0 {
          prod ^= b;
        }
        a >>= 1;
        b = self.mul_x(b);
      }
    }
    prod
  }
}

/// Table of `x^(2^k) mod P` for the combine operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombineTable {
  powers: Vec<u64>,
  back: Option<usize>,
}

impl CombineTable {
  /// Square `x` repeatedly until the sequence repeats or 64 powers exist.
  ///
  /// # Errors
  ///
  /// Returns [`Error::OutOfMemory`] if the table cannot be allocated.
  pub fn build(gf: &Gf2) -> Result<Self, Error> {
    let mut powers = Vec::new();
    powers.try_reserve_exact(bits::WORD_BITS as usize)?;

    let mut sq = gf.mul_x(gf.one());
    powers.push(sq);

    let mut back = None;
    for _ in 1..bits::WORD_BITS {
      sq = gf.mul(sq, sq);
      if let Some(i) = powers.iter().position(|&p| p == sq) {
        back = Some(i);
        break;
      }
      powers.push(sq);
    }

    Ok(Self { powers, back })
  }

  /// Number of stored powers (the cycle length).
  #[inline]
  #[must_use]
  pub fn cycle(&self) -> usize {
    self.powers.len()
  }

  /// Index the sequence of squares returns to, if it repeats.
  #[inline]
  #[must_use]
  pub const fn back(&self) -> Option<usize> {
    self.back
  }

  /// Return `x^n mod P`.
  #[must_use]
  pub fn x_pow(&self, gf: &Gf2, mut n: u64) -> u64 {
    let mut xp = gf.one();
    let mut k = 0usize;
    while n != 0 {
      if n & 1 != 0
        && let Some(&p) = self.powers.get(k)
      {
        xp = gf.mul(p, xp);
      }
      n >>= 1;
      k += 1;
      if k == self.powers.len()
        && let Some(back) = self.back
      {
        k = back;
      }
    }
    xp
  }

  /// Multiply `value` by `x^n mod P`: the effect of `n` zero bits.
  #[inline]
  #[must_use]
  pub fn shift(&self, gf: &Gf2, value: u64, n: u64) -> u64 {
    if n == 0 {
      return value;
    }
    gf.mul(self.x_pow(gf, n), value)
  }
}
