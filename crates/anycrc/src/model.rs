//! Canonical CRC models.
//!
//! A [`Model`] is built once from raw [`CrcParams`] and is immutable
//! afterwards. It owns everything the kernels need: the slice-by-16 tables and
//! the combine table. Share it across threads by reference or `Arc`.
//!
//! # Working Orientation
//!
//! Callers see the Rocksoft register: MSB-first, `width` bits, a fresh
//! computation starts at `init`. Internally each model picks one of two
//! working forms so that one 8-bit table layout serves every width:
//!
//! ```text
//! refin (rev)   register reflected, low `width` bits of the u64, LSB-first
//! !refin        register in the top `width` bits of the u64 (<< shift), MSB-first
//! ```
//!
//! `shift = 64 - width` is how far the 64-bit virtual word extends past the
//! declared width. Conversion between the two forms happens once per engine
//! call, never per byte.

use alloc::boxed::Box;
use core::fmt;

use crate::{
  CrcParams, Error,
  common::{
    bits,
    combine::{CombineTable, Gf2},
    tables::{self, SliceTables},
  },
};

/// An immutable CRC variant with its derived lookup tables.
#[derive(Clone, PartialEq, Eq)]
pub struct Model {
  params: CrcParams,
  rev: bool,
  shift: u32,
  /// Polynomial in working orientation.
  work_poly: u64,
  gf: Gf2,
  tables: Box<SliceTables>,
  combine: CombineTable,
}

impl Model {
  /// Derive a model from raw parameters and build its tables.
  ///
  /// `poly`, `init` and `xorout` are masked to `width` bits.
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidWidth`] if `width` is outside `1..=64`
  /// - [`Error::OutOfMemory`] if table allocation fails
  pub fn new(params: CrcParams) -> Result<Self, Error> {
    let params = params.normalized()?;
    let rev = params.refin;
    let shift = bits::WORD_BITS - params.width as u32;

    let work_poly = if rev { params.poly_reflected() } else { params.poly << shift };
    let gf_poly = if rev { params.poly_reflected() } else { params.poly };
    let gf = Gf2::new(gf_poly, params.width, rev);

    let tables = tables::generate_slice_tables(work_poly, rev)?;
    let combine = CombineTable::build(&gf)?;

    tracing::debug!(
      width = params.width,
      poly = params.poly,
      refin = params.refin,
      refout = params.refout,
      combine_cycle = combine.cycle(),
      "built CRC model"
    );

    Ok(Self {
      params,
      rev,
      shift,
      work_poly,
      gf,
      tables,
      combine,
    })
  }

  /// The normalized parameters this model was built from.
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams {
    &self.params
  }

  /// Width in bits.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.params.width
  }

  /// Whether the polynomial was reflected for table construction.
  #[inline]
  #[must_use]
  pub const fn rev(&self) -> bool {
    self.rev
  }

  /// Bits by which the 64-bit virtual word exceeds `width`.
  #[inline]
  #[must_use]
  pub const fn shift(&self) -> u32 {
    self.shift
  }

  /// Mask selecting the low `width` bits.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u64 {
    bits::mask(self.params.width)
  }

  /// The byte table (working orientation).
  #[inline]
  #[must_use]
  pub fn byte_table(&self) -> &[u64; 256] {
    let [byte, ..] = &*self.tables;
    byte
  }

  /// The sixteen slice tables (working orientation).
  #[inline]
  #[must_use]
  pub fn slice_tables(&self) -> &SliceTables {
    &self.tables
  }

  /// Number of `x^(2^k)` powers stored for combine (the cycle length).
  #[inline]
  #[must_use]
  pub fn combine_cycle(&self) -> usize {
    self.combine.cycle()
  }

  /// Index the power sequence wraps back to, if it repeats.
  #[inline]
  #[must_use]
  pub const fn combine_back(&self) -> Option<usize> {
    self.combine.back()
  }

  #[inline]
  pub(crate) const fn combine_table(&self) -> &CombineTable {
    &self.combine
  }

  /// Register for a fresh computation.
  #[inline]
  #[must_use]
  pub const fn init_register(&self) -> u64 {
    self.params.init
  }

  /// Turn a register into the final checksum: reflect if `refout`, then XOR.
  #[inline]
  #[must_use]
  pub const fn finalize(&self, register: u64) -> u64 {
    let reg = register & self.mask();
    let out = if self.params.refout { bits::reflect(reg, self.params.width) } else { reg };
    out ^ self.params.xorout
  }

  /// The register that [`finalize`](Self::finalize)s to `checksum`.
  ///
  /// Lets a finalized checksum serve as the starting point of a continued
  /// computation.
  #[inline]
  #[must_use]
  pub const fn resume(&self, checksum: u64) -> u64 {
    let out = (checksum ^ self.params.xorout) & self.mask();
    if self.params.refout { bits::reflect(out, self.params.width) } else { out }
  }

  #[inline]
  pub(crate) const fn work_poly(&self) -> u64 {
    self.work_poly
  }

  #[inline]
  pub(crate) const fn gf(&self) -> &Gf2 {
    &self.gf
  }

  /// Register into working orientation.
  #[inline]
  pub(crate) const fn to_work(&self, register: u64) -> u64 {
    let reg = register & self.mask();
    if self.rev { bits::reflect(reg, self.params.width) } else { reg << self.shift }
  }

  /// Working orientation back into a register.
  #[inline]
  pub(crate) const fn work_to_register(&self, work: u64) -> u64 {
    if self.rev { bits::reflect(work, self.params.width) } else { work >> self.shift }
  }

  /// Register into the polynomial layout used by [`Gf2`].
  #[inline]
  pub(crate) const fn to_poly(&self, register: u64) -> u64 {
    let reg = register & self.mask();
    if self.rev { bits::reflect(reg, self.params.width) } else { reg }
  }

  /// [`Gf2`] layout back into a register.
  #[inline]
  pub(crate) const fn poly_to_register(&self, value: u64) -> u64 {
    if self.rev { bits::reflect(value, self.params.width) } else { value }
  }
}

impl fmt::Debug for Model {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Model")
      .field("params", &self.params)
      .field("rev", &self.rev)
      .field("shift", &self.shift)
      .field("combine_cycle", &self.combine.cycle())
      .field("combine_back", &self.combine.back())
      .finish_non_exhaustive()
  }
}

/// Build a model from its six raw parameters.
///
/// # Errors
///
/// See [`Model::new`].
///
/// # Examples
///
/// ```
/// use anycrc::{build_model, compute};
///
/// let model = build_model(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF)?;
/// let reg = compute(&model, model.init_register(), b"123456789");
/// assert_eq!(model.finalize(reg), 0xCBF4_3926);
/// # Ok::<(), anycrc::Error>(())
/// ```
pub fn build_model(width: u8, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64) -> Result<Model, Error> {
  Model::new(CrcParams::new(width, poly, init, refin, refout, xorout))
}
