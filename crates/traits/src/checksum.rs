//! Non-cryptographic checksum traits.
//!
//! - **Streaming**: Incremental updates for data that arrives in pieces
//! - **Parallelism**: Combine operation for parallel chunk processing

use core::fmt::Debug;

/// Streaming, non-cryptographic checksum.
///
/// # Usage
///
/// ```rust,ignore
/// use anycrc::{Crc, CrcParams};
/// use traits::Checksum;
///
/// let crc = Crc::new(CrcParams::CRC32_ISO_HDLC)?;
/// let mut hasher = crc.digest();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), crc.checksum(b"hello world"));
/// ```
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to the state it was created in
pub trait Checksum: Clone {
  /// The checksum output type.
  type Output: Copy + Eq + Debug + Default;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Update the hasher with multiple non-contiguous buffers.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each buffer
  /// in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the checksum of everything processed so far.
  ///
  /// Does not consume the hasher; further updates continue from the same state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);
}

/// Checksums that support combining.
///
/// Combine computes `crc(A || B)` from `crc(A)`, `crc(B)`, and `len(B)` without
/// re-reading either part. This is what makes chunked parallel computation
/// possible.
///
/// Combination is order-sensitive: `combine(a, b, len_b)` is the checksum of
/// `A || B`, not `B || A`.
pub trait ChecksumCombine: Checksum {
  /// Combine two checksums.
  ///
  /// # Arguments
  ///
  /// * `crc_a` - Checksum of the first part (A)
  /// * `crc_b` - Checksum of the second part (B), computed on its own
  /// * `len_b` - Length of the second part in bytes
  #[must_use]
  fn combine(&self, crc_a: Self::Output, crc_b: Self::Output, len_b: usize) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Additive toy checksum, enough to exercise the provided methods.
  #[derive(Clone, Default)]
  struct Sum(u32);

  impl Checksum for Sum {
    type Output = u32;

    fn update(&mut self, data: &[u8]) {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u32::from(b)));
    }

    fn finalize(&self) -> u32 {
      self.0
    }

    fn reset(&mut self) {
      self.0 = 0;
    }
  }

  impl ChecksumCombine for Sum {
    fn combine(&self, crc_a: u32, crc_b: u32, _len_b: usize) -> u32 {
      crc_a.wrapping_add(crc_b)
    }
  }

  #[test]
  fn vectored_matches_sequential() {
    let mut a = Sum::default();
    a.update_vectored(&[&b"ab"[..], &b""[..], &b"cde"[..]]);

    let mut b = Sum::default();
    b.update(b"abcde");

    assert_eq!(a.finalize(), b.finalize());
  }

  #[test]
  fn finalize_is_idempotent() {
    let mut s = Sum::default();
    s.update(b"xyz");
    assert_eq!(s.finalize(), s.finalize());
  }

  #[test]
  fn reset_restores_initial_state() {
    let mut s = Sum::default();
    s.update(b"xyz");
    s.reset();
    assert_eq!(s.finalize(), Sum::default().finalize());
  }

  #[test]
  fn combine_matches_concatenation() {
    let s = Sum::default();
    let mut a = Sum::default();
    a.update(b"hello ");
    let mut b = Sum::default();
    b.update(b"world");

    let mut ab = Sum::default();
    ab.update(b"hello world");

    assert_eq!(s.combine(a.finalize(), b.finalize(), 5), ab.finalize());
  }

  #[cfg(feature = "std")]
  #[test]
  fn io_slices_match_sequential() {
    let bufs = [std::io::IoSlice::new(b"ab"), std::io::IoSlice::new(b"cd")];
    let mut a = Sum::default();
    a.update_io_slices(&bufs);

    let mut b = Sum::default();
    b.update(b"abcd");

    assert_eq!(a.finalize(), b.finalize());
  }
}
