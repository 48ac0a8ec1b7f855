//! Tagged engine input.
//!
//! Bindings that accept several input representations resolve them once into
//! an [`Input`] before calling the engine. The bit-oriented variant is only
//! constructible through [`BitSlice::new`], which rejects lengths the buffer
//! cannot hold, so the engine itself never sees an invalid length.

use crate::Error;

/// A byte buffer together with a bit length that fits in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitSlice<'a> {
  data: &'a [u8],
  bit_len: usize,
}

impl<'a> BitSlice<'a> {
  /// The first `bit_len` bits of `data`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::BitLength`] if `bit_len > 8 * data.len()`.
  pub const fn new(data: &'a [u8], bit_len: usize) -> Result<Self, Error> {
    let available = data.len().saturating_mul(8);
    if bit_len > available {
      return Err(Error::BitLength {
        bits: bit_len,
        available,
      });
    }
    Ok(Self { data, bit_len })
  }

  /// Every bit of `data`.
  #[must_use]
  pub const fn from_bytes(data: &'a [u8]) -> Self {
    Self {
      data,
      bit_len: data.len().saturating_mul(8),
    }
  }

  /// Underlying buffer (may contain unused trailing bits).
  #[inline]
  #[must_use]
  pub const fn data(&self) -> &'a [u8] {
    self.data
  }

  /// Number of bits to process.
  #[inline]
  #[must_use]
  pub const fn bit_len(&self) -> usize {
    self.bit_len
  }

  /// Whether the length is a whole number of bytes.
  #[inline]
  #[must_use]
  pub const fn is_byte_aligned(&self) -> bool {
    self.bit_len.is_multiple_of(8)
  }
}

/// Input to the engine: whole bytes or a bit-granular slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input<'a> {
  /// Every bit of every byte.
  Bytes(&'a [u8]),
  /// A validated bit length.
  Bits(BitSlice<'a>),
}

impl<'a> Input<'a> {
  /// Length in bits.
  #[must_use]
  pub const fn bit_len(&self) -> usize {
    match self {
      Self::Bytes(data) => data.len().saturating_mul(8),
      Self::Bits(bits) => bits.bit_len(),
    }
  }

  /// Whether there is nothing to process.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.bit_len() == 0
  }

  /// The bytes of a byte-oriented input.
  ///
  /// For the byte-only entry points of a binding.
  ///
  /// # Errors
  ///
  /// Returns [`Error::BitLength`] for bit input that does not end on a byte
  /// boundary.
  pub fn as_bytes(&self) -> Result<&'a [u8], Error> {
    match *self {
      Self::Bytes(data) => Ok(data),
      Self::Bits(bits) if bits.is_byte_aligned() => match bits.data.split_at_checked(bits.bit_len / 8) {
        Some((whole, _)) => Ok(whole),
        None => Err(Error::BitLength {
          bits: bits.bit_len,
          available: bits.data.len().saturating_mul(8),
        }),
      },
      Self::Bits(bits) => Err(Error::BitLength {
        bits: bits.bit_len,
        available: (bits.bit_len / 8).saturating_mul(8),
      }),
    }
  }
}

impl<'a> From<&'a [u8]> for Input<'a> {
  fn from(data: &'a [u8]) -> Self {
    Self::Bytes(data)
  }
}

impl<'a> From<BitSlice<'a>> for Input<'a> {
  fn from(bits: BitSlice<'a>) -> Self {
    Self::Bits(bits)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bit_slice_bounds() {
    let data = [0u8; 3];
    assert!(BitSlice::new(&data, 24).is_ok());
    assert!(BitSlice::new(&data, 0).is_ok());
    assert_eq!(
      BitSlice::new(&data, 25).unwrap_err(),
      Error::BitLength { bits: 25, available: 24 }
    );
    assert!(BitSlice::new(&[], 1).is_err());
  }

  #[test]
  fn test_input_lengths() {
    let data = [1u8, 2, 3];
    assert_eq!(Input::from(&data[..]).bit_len(), 24);
    assert_eq!(Input::from(BitSlice::new(&data, 13).unwrap()).bit_len(), 13);
    assert!(Input::Bytes(&[]).is_empty());
    assert_eq!(BitSlice::from_bytes(&data).bit_len(), 24);
  }

  #[test]
  fn test_byte_alignment() {
    let data = [0u8; 2];
    assert!(BitSlice::new(&data, 0).unwrap().is_byte_aligned());
    assert!(BitSlice::new(&data, 16).unwrap().is_byte_aligned());
    assert!(!BitSlice::new(&data, 9).unwrap().is_byte_aligned());
  }

  #[test]
  fn test_as_bytes() {
    let data = [1u8, 2, 3];
    assert_eq!(Input::Bytes(&data).as_bytes(), Ok(&data[..]));
    assert_eq!(Input::Bits(BitSlice::new(&data, 16).unwrap()).as_bytes(), Ok(&data[..2]));

    let err = Input::Bits(BitSlice::new(&data, 13).unwrap()).as_bytes().unwrap_err();
    assert_eq!(err.kind(), crate::ErrorKind::TypeMismatch);
  }
}
