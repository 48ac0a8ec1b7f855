//! CRC computation for any parameterization up to 64 bits.
//!
//! This crate computes Cyclic Redundancy Checks for arbitrary models: any
//! width from 1 to 64 bits, any polynomial, any initial value, optional input
//! and output reflection and any final XOR mask. One generic engine serves
//! every model at table-driven speed.
//!
//! # Architecture
//!
//! | Layer | Items | Works on |
//! |-------|-------|----------|
//! | Parameters | [`CrcParams`], [`preset`] | raw `(width, poly, init, refin, refout, xorout)` |
//! | Model | [`Model`], [`build_model`], [`ModelCache`] | tables derived once per model |
//! | Engine | [`compute`], [`compute_bits`], [`compute_with`], [`finalize`] | registers |
//! | Combine | [`combine`], [`combine_bits`], [`parallel`] | registers |
//! | Handles | [`Crc`], [`Digest`] | finalized checksums |
//!
//! # Algorithms
//!
//! | [`Algorithm`] | Bytes/step | Use |
//! |---------------|------------|-----|
//! | `Bitwise` | 1/8 | reference oracle |
//! | `Bytewise` | 1 | short inputs |
//! | `Slice16` | 16 | everything else |
//!
//! All three produce identical registers for every model and input.
//!
//! # Example
//!
//! ```rust
//! use anycrc::{Checksum, Crc, CrcParams, build_model, combine, compute};
//!
//! // Engine level: registers in, registers out.
//! let model = build_model(5, 0x05, 0x1F, true, true, 0x1F)?;
//! let reg = compute(&model, model.init_register(), b"12345");
//! let reg = compute(&model, reg, b"6789");
//! assert_eq!(model.finalize(reg), 0x19);
//!
//! // Combine independently computed parts (useful for parallel processing).
//! let (a, b) = b"123456789".split_at(4);
//! let reg_a = compute(&model, model.init_register(), a);
//! let reg_b = compute(&model, model.init_register(), b);
//! assert_eq!(model.finalize(combine(&model, reg_a, reg_b, b.len() as u64)), 0x19);
//!
//! // Handle level: finalized checksums and streaming.
//! let crc = Crc::new(CrcParams::CRC32_ISO_HDLC)?;
//! let mut digest = crc.digest();
//! digest.update(b"1234");
//! digest.update(b"56789");
//! assert_eq!(digest.finalize(), 0xCBF4_3926);
//! # Ok::<(), anycrc::Error>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for tables). Disable
//! the `std` feature for embedded use; that removes [`ModelCache`],
//! [`parallel::compute_parallel`] and environment overrides:
//!
//! ```toml
//! [dependencies]
//! anycrc = { version = "0.3", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod common;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

#[cfg(feature = "std")]
mod cache;
mod combine;
pub mod config;
mod digest;
mod dispatch;
mod error;
mod input;
mod model;
pub mod parallel;
mod params;
pub mod preset;

#[doc(hidden)]
pub mod __internal {
  pub use crate::common::{
    bits::{mask, reflect},
    reference::{crc_bitwise, crc_bitwise_bits},
  };
}

#[cfg(feature = "std")]
pub use cache::ModelCache;
pub use combine::{combine, combine_bits};
pub use digest::{CHECK_INPUT, Crc, Digest};
pub use dispatch::{Algorithm, compute, compute_bits, compute_input, compute_with, finalize};
pub use error::{Error, ErrorKind};
pub use input::{BitSlice, Input};
pub use model::{Model, build_model};
pub use params::{CrcParams, ParamsBuilder};
// Re-export traits for convenience
pub use traits::{Checksum, ChecksumCombine};
