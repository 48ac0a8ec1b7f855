//! Error types for model construction and input validation.
//!
//! Errors only arise at the edges: building a [`Model`](crate::Model) from raw
//! parameters, or describing input that cannot be what it claims to be. Once a
//! model exists, computation and combination are infallible.

use core::fmt;

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// The CRC parameters are incomplete or out of range. Fix the input.
  Config,
  /// Table memory could not be allocated. There is no degraded mode.
  Resource,
  /// Input was handed over in a representation that cannot be processed
  /// as described (for example more bits than the buffer holds).
  TypeMismatch,
}

/// Error returned by model construction and input validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// A required CRC parameter was not provided.
  MissingParameter(&'static str),
  /// `width` is outside `1..=64`.
  InvalidWidth(u8),
  /// Allocating the lookup tables failed.
  OutOfMemory,
  /// A bit length exceeds the number of bits in the supplied buffer.
  BitLength {
    /// Requested number of bits.
    bits: usize,
    /// Bits actually available in the buffer.
    available: usize,
  },
  /// No preset or alias with the requested name exists.
  UnknownPreset,
}

impl Error {
  /// The taxonomy bucket this error belongs to.
  #[inline]
  #[must_use]
  pub const fn kind(&self) -> ErrorKind {
    match self {
      Self::MissingParameter(_) | Self::InvalidWidth(_) | Self::UnknownPreset => ErrorKind::Config,
      Self::OutOfMemory => ErrorKind::Resource,
      Self::BitLength { .. } => ErrorKind::TypeMismatch,
    }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::MissingParameter(name) => write!(f, "{name} value is not provided"),
      Self::InvalidWidth(width) => write!(f, "width {width} is outside the supported range 1..=64"),
      Self::OutOfMemory => f.write_str("out of memory while building CRC tables"),
      Self::BitLength { bits, available } => {
        write!(f, "bit length {bits} exceeds the {available} bits available in the buffer")
      }
      Self::UnknownPreset => f.write_str("CRC model not found"),
    }
  }
}

impl core::error::Error for Error {}

impl From<alloc::collections::TryReserveError> for Error {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::OutOfMemory
  }
}
