//! Computation entry points and kernel selection.
//!
//! Every entry point takes and returns a *register* (see [`Model`]): the value
//! before `refout` reflection and `xorout`. Chaining calls by passing the
//! previous result back in is therefore exactly the same as one call over the
//! concatenated input. [`finalize`] is applied once, at the end.
//!
//! # Kernel Selection
//!
//! ```text
//! len < slice_threshold  → byte-at-a-time
//! otherwise              → slice-by-16 (tail handled byte-at-a-time)
//! ```
//!
//! The crossover (and an optional forced kernel) come from [`crate::config`].
//! All kernels agree bit for bit, so selection never changes a result.

use crate::{
  Model,
  common::{portable, reference},
  config::{self, Force},
  input::Input,
};

/// A CRC computation algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
  /// One message bit per step, straight from the parameters. Slow; a test oracle.
  Bitwise,
  /// One byte per step via the byte table.
  Bytewise,
  /// Sixteen bytes per step via the slice tables.
  Slice16,
}

impl Algorithm {
  /// All algorithms, slowest first.
  pub const ALL: [Self; 3] = [Self::Bitwise, Self::Bytewise, Self::Slice16];

  /// Short, stable name.
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::Bitwise => "bitwise",
      Self::Bytewise => "bytewise",
      Self::Slice16 => "slice16",
    }
  }
}

#[inline]
fn select(len: usize) -> Algorithm {
  let cfg = config::get();
  match cfg.requested_force {
    Force::Bitwise => Algorithm::Bitwise,
    Force::Bytewise => Algorithm::Bytewise,
    Force::Slice16 => Algorithm::Slice16,
    Force::Auto if len < cfg.tunables.slice_threshold => Algorithm::Bytewise,
    Force::Auto => Algorithm::Slice16,
  }
}

/// Fold `data` into `register`.
///
/// Uses slice-by-16, falling back to byte-at-a-time for short inputs. An
/// empty `data` returns `register` unchanged.
///
/// # Examples
///
/// ```
/// use anycrc::{CrcParams, Model, compute};
///
/// let model = Model::new(CrcParams::CRC16_ARC)?;
/// let reg = compute(&model, model.init_register(), b"1234");
/// let reg = compute(&model, reg, b"56789");
/// assert_eq!(model.finalize(reg), 0xBB3D);
/// # Ok::<(), anycrc::Error>(())
/// ```
#[inline]
#[must_use]
pub fn compute(model: &Model, register: u64, data: &[u8]) -> u64 {
  if data.is_empty() {
    return register;
  }
  compute_with(model, select(data.len()), register, data)
}

/// Fold `data` into `register` with a specific algorithm.
#[must_use]
pub fn compute_with(model: &Model, algorithm: Algorithm, register: u64, data: &[u8]) -> u64 {
  if data.is_empty() {
    return register;
  }
  if algorithm == Algorithm::Bitwise {
    return reference::crc_bitwise(model.params(), register, data);
  }

  let work = model.to_work(register);
  let work = match (algorithm, model.rev()) {
    (Algorithm::Slice16, true) => portable::slice16_reflected(work, data, model.slice_tables()),
    (Algorithm::Slice16, false) => portable::slice16_normal(work, data, model.slice_tables()),
    (_, true) => portable::bytewise_reflected(work, data, model.byte_table()),
    (_, false) => portable::bytewise_normal(work, data, model.byte_table()),
  };
  model.work_to_register(work)
}

/// Fold the first `bit_len` bits of `data` into `register`.
///
/// Whole bytes go through [`compute`]. The bits of a trailing partial byte are
/// taken least-significant first for reflected models and most-significant
/// first otherwise.
///
/// # Panics
///
/// Panics if `bit_len` exceeds `8 * data.len()`. Use
/// [`BitSlice::new`](crate::BitSlice::new) to validate untrusted lengths.
#[must_use]
pub fn compute_bits(model: &Model, register: u64, data: &[u8], bit_len: usize) -> u64 {
  let available = data.len().saturating_mul(8);
  assert!(bit_len <= available, "bit length {bit_len} exceeds {available} available bits");

  let (whole, rest) = data.split_at(bit_len / 8);
  let register = compute(model, register, whole);

  let tail = (bit_len % 8) as u32;
  match rest.first() {
    Some(&byte) if tail != 0 => model.work_to_register(tail_bits(model, model.to_work(register), byte, tail)),
    _ => register,
  }
}

/// Shift the first `count` (1..=7) bits of `byte` into a working register.
fn tail_bits(model: &Model, mut work: u64, byte: u8, count: u32) -> u64 {
  let poly = model.work_poly();
  if model.rev() {
    work ^= u64::from(byte) & ((1u64 << count) - 1);
    for _ in 0..count {
      work = if work & 1 != 0 { (work >> 1) ^ poly } else { work >> 1 };
    }
  } else {
    let keep = !(0xFFu8 >> count);
    work ^= u64::from(byte & keep) << 56;
    for _ in 0..count {
      work = if work >> 63 != 0 { (work << 1) ^ poly } else { work << 1 };
    }
  }
  work
}

/// Fold a tagged [`Input`] into `register`.
#[inline]
#[must_use]
pub fn compute_input(model: &Model, register: u64, input: Input<'_>) -> u64 {
  match input {
    Input::Bytes(data) => compute(model, register, data),
    Input::Bits(bits) => compute_bits(model, register, bits.data(), bits.bit_len()),
  }
}

/// Apply `refout` reflection and then `xorout` to a register.
#[inline]
#[must_use]
pub const fn finalize(model: &Model, register: u64) -> u64 {
  model.finalize(register)
}
