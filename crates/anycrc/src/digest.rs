//! Finalized-checksum handles.
//!
//! The engine functions ([`compute`], [`combine`], ...) work on registers.
//! [`Crc`] wraps a shared [`Model`] and speaks finalized checksums instead,
//! the values protocols actually put on the wire. [`Digest`] is its streaming
//! counterpart and implements [`Checksum`] / [`ChecksumCombine`].

use alloc::sync::Arc;

use traits::{Checksum, ChecksumCombine};

use crate::{
  BitSlice, CrcParams, Error, Input, Model,
  combine::{combine, combine_bits},
  dispatch::{compute, compute_bits, compute_input},
  preset,
};

/// The standard check input.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// A CRC algorithm producing finalized checksums.
///
/// Cheap to clone: clones share the model.
///
/// # Examples
///
/// ```
/// use anycrc::{Crc, CrcParams};
///
/// let crc = Crc::new(CrcParams::CRC32_ISO_HDLC)?;
/// assert_eq!(crc.checksum(b"123456789"), 0xCBF4_3926);
///
/// // Continue from a previously finalized value.
/// let head = crc.checksum(b"1234");
/// assert_eq!(crc.resume(head, b"56789"), 0xCBF4_3926);
///
/// // Or combine independently computed parts.
/// let tail = crc.checksum(b"56789");
/// assert_eq!(crc.combine(head, tail, 5), 0xCBF4_3926);
/// # Ok::<(), anycrc::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crc {
  model: Arc<Model>,
}

impl Crc {
  /// Build a model for `params`.
  ///
  /// # Errors
  ///
  /// See [`Model::new`].
  pub fn new(params: CrcParams) -> Result<Self, Error> {
    Ok(Self::from_model(Arc::new(Model::new(params)?)))
  }

  /// Wrap an existing shared model.
  #[must_use]
  pub const fn from_model(model: Arc<Model>) -> Self {
    Self { model }
  }

  /// Build the model of a named preset or alias.
  ///
  /// # Errors
  ///
  /// [`Error::UnknownPreset`] for an unknown name, otherwise see
  /// [`Model::new`].
  pub fn preset(name: &str) -> Result<Self, Error> {
    Self::new(preset::find(name)?.params)
  }

  /// Fetch the model for `params` from a shared cache.
  ///
  /// # Errors
  ///
  /// See [`ModelCache::get`](crate::ModelCache::get).
  #[cfg(feature = "std")]
  pub fn cached(cache: &crate::ModelCache, params: CrcParams) -> Result<Self, Error> {
    cache.get(params).map(Self::from_model)
  }

  /// The underlying model.
  #[inline]
  #[must_use]
  pub fn model(&self) -> &Arc<Model> {
    &self.model
  }

  /// The model parameters.
  #[inline]
  #[must_use]
  pub fn params(&self) -> &CrcParams {
    self.model.params()
  }

  /// Checksum of `data`.
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> u64 {
    let m = &*self.model;
    m.finalize(compute(m, m.init_register(), data))
  }

  /// Checksum of the first `bit_len` bits of `data`.
  ///
  /// # Errors
  ///
  /// [`Error::BitLength`] if `bit_len` exceeds the bits in `data`.
  pub fn checksum_bits(&self, data: &[u8], bit_len: usize) -> Result<u64, Error> {
    Ok(self.checksum_input(Input::Bits(BitSlice::new(data, bit_len)?)))
  }

  /// Checksum of a tagged input.
  #[inline]
  #[must_use]
  pub fn checksum_input(&self, input: Input<'_>) -> u64 {
    let m = &*self.model;
    m.finalize(compute_input(m, m.init_register(), input))
  }

  /// Continue from `checksum`, a finalized value, over `data`.
  ///
  /// `resume(checksum(a), b) == checksum(a || b)`, and an empty `data` returns
  /// `checksum` unchanged.
  #[must_use]
  pub fn resume(&self, checksum: u64, data: &[u8]) -> u64 {
    let m = &*self.model;
    m.finalize(compute(m, m.resume(checksum), data))
  }

  /// [`resume`](Self::resume) over the first `bit_len` bits of `data`.
  ///
  /// # Errors
  ///
  /// [`Error::BitLength`] if `bit_len` exceeds the bits in `data`.
  pub fn resume_bits(&self, checksum: u64, data: &[u8], bit_len: usize) -> Result<u64, Error> {
    let bits = BitSlice::new(data, bit_len)?;
    let m = &*self.model;
    Ok(m.finalize(compute_bits(m, m.resume(checksum), bits.data(), bits.bit_len())))
  }

  /// Checksum of `A || B` from the checksums of `A` and `B` and the byte
  /// length of `B`.
  #[must_use]
  pub fn combine(&self, crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
    let m = &*self.model;
    m.finalize(combine(m, m.resume(crc_a), m.resume(crc_b), len_b))
  }

  /// Same as [`combine`](Self::combine) with the length of `B` in bits.
  #[must_use]
  pub fn combine_bits(&self, crc_a: u64, crc_b: u64, len_b: u64) -> u64 {
    let m = &*self.model;
    m.finalize(combine_bits(m, m.resume(crc_a), m.resume(crc_b), len_b))
  }

  /// Checksum of `"123456789"`.
  #[must_use]
  pub fn check(&self) -> u64 {
    self.checksum(CHECK_INPUT)
  }

  /// A fresh streaming hasher.
  #[must_use]
  pub fn digest(&self) -> Digest {
    self.digest_at(self.model.init_register())
  }

  /// A streaming hasher continuing from a finalized `checksum`.
  ///
  /// [`reset`](Checksum::reset) returns to this starting point.
  #[must_use]
  pub fn digest_from(&self, checksum: u64) -> Digest {
    self.digest_at(self.model.resume(checksum))
  }

  fn digest_at(&self, register: u64) -> Digest {
    Digest {
      model: Arc::clone(&self.model),
      start: register,
      register,
    }
  }
}

/// Streaming CRC hasher.
///
/// Holds a shared model and a plain register. Cloning forks the computation.
///
/// # Examples
///
/// ```
/// use anycrc::{Checksum, Crc, CrcParams};
///
/// let crc = Crc::new(CrcParams::CRC16_IBM_3740)?;
/// let mut digest = crc.digest();
/// digest.update(b"1234");
/// digest.update(b"56789");
/// assert_eq!(digest.finalize(), 0x29B1);
/// # Ok::<(), anycrc::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digest {
  model: Arc<Model>,
  start: u64,
  register: u64,
}

impl Digest {
  /// Fold the first `bit_len` bits of `data`.
  ///
  /// Bit-granular updates may leave the stream mid-byte; later updates
  /// continue from that bit position.
  ///
  /// # Errors
  ///
  /// [`Error::BitLength`] if `bit_len` exceeds the bits in `data`. The state
  /// is unchanged on error.
  pub fn update_bits(&mut self, data: &[u8], bit_len: usize) -> Result<(), Error> {
    let bits = BitSlice::new(data, bit_len)?;
    self.register = compute_bits(&self.model, self.register, bits.data(), bits.bit_len());
    Ok(())
  }

  /// Fold a tagged input.
  pub fn update_input(&mut self, input: Input<'_>) {
    self.register = compute_input(&self.model, self.register, input);
  }

  /// The current register (before `refout` and `xorout`).
  #[inline]
  #[must_use]
  pub const fn register(&self) -> u64 {
    self.register
  }

  /// The model in use.
  #[inline]
  #[must_use]
  pub fn model(&self) -> &Arc<Model> {
    &self.model
  }
}

impl Checksum for Digest {
  type Output = u64;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.register = compute(&self.model, self.register, data);
  }

  #[inline]
  fn finalize(&self) -> u64 {
    self.model.finalize(self.register)
  }

  #[inline]
  fn reset(&mut self) {
    self.register = self.start;
  }
}

impl ChecksumCombine for Digest {
  fn combine(&self, crc_a: u64, crc_b: u64, len_b: usize) -> u64 {
    let m = &*self.model;
    m.finalize(combine(m, m.resume(crc_a), m.resume(crc_b), len_b as u64))
  }
}
