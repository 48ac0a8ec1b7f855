//! Runtime CRC lookup table generation for any width.
//!
//! Tables are built once per model from the working-form polynomial:
//!
//! | Orientation | Register layout | Polynomial layout |
//! |-------------|-----------------|-------------------|
//! | reflected (`rev`) | low `width` bits, LSB-first | reflected, low-aligned |
//! | normal | top `width` bits of the `u64`, MSB-first | shifted up by `64 - width` |
//!
//! With the register parked at the edge of the word the incoming byte always
//! lines up with the table index, so one layout serves every width, including
//! widths below 8 or not a multiple of 8.
//!
//! # Table Strategy
//!
//! `tables[0]` is the classic byte table. `tables[k][b]` is the register after
//! processing byte `b` followed by `k` zero bytes, which is what slice-by-16
//! needs to fold sixteen bytes with sixteen independent lookups.

// SAFETY: All array indexing in this module uses bounded loop indices (0..256, 0..16)
// or a byte-sized value masked with `& 0xFF`.
#![allow(clippy::indexing_slicing)]

use alloc::{boxed::Box, vec::Vec};

use crate::Error;

/// Number of slice tables.
pub const SLICES: usize = 16;

/// The sixteen 256-entry tables, `tables[0]` being the byte table.
pub type SliceTables = [[u64; 256]; SLICES];

/// Generate a single byte-table entry.
///
/// Simulates eight register shifts of `index`, in the working orientation.
#[inline]
#[must_use]
pub const fn table_entry(poly: u64, rev: bool, index: u8) -> u64 {
  let mut crc;
  let mut i = 0;
  if rev {
    crc = index as u64;
    while i < 8 {
      crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
      i += 1;
    }
  } else {
    crc = (index as u64) << 56;
    while i < 8 {
      crc = if crc >> 63 != 0 { (crc << 1) ^ poly } else { crc << 1 };
      i += 1;
    }
  }
  crc
}

/// Generate the byte table.
///
/// # Arguments
///
/// * `poly` - Working-form polynomial (reflected if `rev`, else top-aligned)
/// * `rev` - Whether the model is processed LSB-first
#[must_use]
pub const fn generate_byte_table(poly: u64, rev: bool) -> [u64; 256] {
  let mut table = [0u64; 256];
  let mut i = 0usize;
  while i < 256 {
    table[i] = table_entry(poly, rev, i as u8);
    i += 1;
  }
  table
}

/// Advance a working register by one zero byte using the byte table.
#[inline]
#[must_use]
pub const fn advance_zero_byte(byte_table: &[u64; 256], rev: bool, crc: u64) -> u64 {
  if rev {
    (crc >> 8) ^ byte_table[(crc & 0xFF) as usize]
  } else {
    (crc << 8) ^ byte_table[(crc >> 56) as usize]
  }
}

/// Generate all sixteen slice tables on the heap.
///
/// # Errors
///
/// Returns [`Error::OutOfMemory`] if the 32 KiB table block cannot be allocated.
pub fn generate_slice_tables(poly: u64, rev: bool) -> Result<Box<SliceTables>, Error> {
  let mut tables: Vec<[u64; 256]> = Vec::new();
  tables.try_reserve_exact(SLICES)?;

  let byte_table = generate_byte_table(poly, rev);
  tables.push(byte_table);

  let mut prev = byte_table;
  for _ in 1..SLICES {
    let mut next = [0u64; 256];
    for (slot, &crc) in next.iter_mut().zip(prev.iter()) {
      *slot = advance_zero_byte(&byte_table, rev, crc);
    }
    tables.push(next);
    prev = next;
  }

  tables.into_boxed_slice().try_into().map_err(|_| Error::OutOfMemory)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::common::bits;

  const CRC32_REFLECTED: u64 = 0xEDB8_8320;

  #[test]
  fn test_crc32_byte_table_known_entries() {
    let t = generate_byte_table(CRC32_REFLECTED, true);
    assert_eq!(t[0], 0);
    assert_eq!(t[1], 0x7707_3096);
    assert_eq!(t[255], 0x2D02_EF8D);
  }

  #[test]
  fn test_normal_table_is_top_aligned() {
    // CRC-16/IBM-3740 polynomial 0x1021, parked at the top of the word.
    let t = generate_byte_table(0x1021u64 << 48, false);
    assert_eq!(t[1] >> 48, 0x1021);
    for entry in t {
      assert_eq!(entry & bits::mask(48), 0, "low bits must stay clear");
    }
  }

  #[test]
  fn test_slice_tables_consistency() {
    for (poly, rev) in [(CRC32_REFLECTED, true), (0x8005u64 << 48, false), (0x05u64 << 59, false)] {
      let tables = generate_slice_tables(poly, rev).unwrap();
      assert_eq!(tables[0], generate_byte_table(poly, rev));

      for k in 1..SLICES {
        for i in 0..256 {
          let prev = tables[k - 1][i];
          let expected = advance_zero_byte(&tables[0], rev, prev);
          assert_eq!(tables[k][i], expected, "table {k} entry {i}");
        }
      }
    }
  }

  #[test]
  fn test_narrow_reflected_entries_fit_width() {
    // CRC-5/USB: reflected 0x05 over 5 bits is 0x14.
    let t = generate_byte_table(0x14, true);
    for entry in t {
      assert!(entry <= 0x1F);
    }
  }
}
