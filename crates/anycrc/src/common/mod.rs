//! Common building blocks for CRC computation.
//!
//! This module provides:
//! - Width-aware masking and reflection
//! - Runtime lookup table generation for any width
//! - Table-driven byte-at-a-time and slice-by-16 kernels
//! - GF(2) polynomial arithmetic for `combine()`
//! - The bitwise reference implementation

pub mod bits;
pub mod combine;
pub mod portable;
pub mod reference;
pub mod tables;
