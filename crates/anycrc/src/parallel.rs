//! Parallel CRC computation utilities.
//!
//! The combine operation computes `reg(A || B)` from `reg(A)`, `reg(B)`, and
//! `len(B)` in O(log n) time, so a buffer can be split into contiguous chunks,
//! each chunk folded independently from `init`, and the chunk registers merged
//! left to right.
//!
//! **Key insight**: the helpers without the `std` feature add no threading of
//! their own. Users bring their own parallelism (rayon, `std::thread`, tokio,
//! ...) and use these helpers to combine results. With `std`,
//! [`compute_parallel`] does the whole split/compute/join/fold on scoped
//! threads.
//!
//! # Example: Manual Parallelism
//!
//! ```
//! use anycrc::{CrcParams, Model, compute, parallel::combine_registers};
//!
//! let model = Model::new(CrcParams::CRC32_ISCSI)?;
//! let data = b"The quick brown fox jumps over the lazy dog";
//!
//! // Could run on any number of threads.
//! let parts: Vec<(u64, u64)> = data
//!   .chunks(16)
//!   .map(|chunk| (compute(&model, model.init_register(), chunk), chunk.len() as u64))
//!   .collect();
//!
//! let reg = combine_registers(&model, &parts);
//! assert_eq!(reg, compute(&model, model.init_register(), data));
//! # Ok::<(), anycrc::Error>(())
//! ```
//!
//! # Ordering
//!
//! Chunk registers must be combined in their original order. Reordering
//! produces a wrong checksum that looks perfectly plausible.

#[cfg(feature = "std")]
use alloc::vec::Vec;

use crate::{Model, combine::combine, dispatch::compute};

/// Register over the concatenation of `chunks`, computing each chunk
/// independently and combining.
///
/// Equivalent to one [`compute`] call from [`Model::init_register`] over the
/// concatenated data. No chunks means no data: the result is `init`.
#[inline]
#[must_use]
pub fn checksum_chunks(model: &Model, chunks: &[&[u8]]) -> u64 {
  checksum_iter(model, chunks.iter()).register()
}

/// Fold pre-computed `(register, byte_length)` pairs, in order.
///
/// Each register must have been computed from [`Model::init_register`]. An
/// empty slice yields `init`, the register of empty data.
#[inline]
#[must_use]
pub fn combine_registers(model: &Model, parts: &[(u64, u64)]) -> u64 {
  let mut iter = parts.iter();
  let Some(&(first, _)) = iter.next() else {
    return model.init_register();
  };

  let mut result = first;
  for &(reg, len) in iter {
    result = combine(model, result, reg, len);
  }
  result
}

/// Iterator adapter computing one register over chunked data.
///
/// This struct is created by [`checksum_iter`].
pub struct ChecksumIter<'m, I> {
  model: &'m Model,
  inner: I,
}

impl<I> ChecksumIter<'_, I>
where
  I: Iterator,
  I::Item: AsRef<[u8]>,
{
  /// Consume the iterator and return the combined register.
  ///
  /// # Example
  ///
  /// ```
  /// use anycrc::{CrcParams, Model, compute, parallel::checksum_iter};
  ///
  /// let model = Model::new(CrcParams::CRC64_XZ)?;
  /// let chunks = vec![b"hello ".to_vec(), b"world".to_vec()];
  /// let reg = checksum_iter(&model, chunks.iter()).register();
  /// assert_eq!(reg, compute(&model, model.init_register(), b"hello world"));
  /// # Ok::<(), anycrc::Error>(())
  /// ```
  #[inline]
  pub fn register(self) -> u64 {
    let model = self.model;
    let init = model.init_register();
    let mut iter = self.inner;

    let Some(first) = iter.next() else {
      return init;
    };
    let mut result = compute(model, init, first.as_ref());

    for chunk in iter {
      let data = chunk.as_ref();
      let reg = compute(model, init, data);
      result = combine(model, result, reg, data.len() as u64);
    }
    result
  }

  /// Consume the iterator and return the finalized checksum.
  #[inline]
  pub fn finalize(self) -> u64 {
    let model = self.model;
    model.finalize(self.register())
  }
}

/// Create a checksum iterator adapter over any iterator of byte slices.
#[inline]
pub fn checksum_iter<I>(model: &Model, iter: I) -> ChecksumIter<'_, I::IntoIter>
where
  I: IntoIterator,
  I::Item: AsRef<[u8]>,
{
  ChecksumIter {
    model,
    inner: iter.into_iter(),
  }
}

/// Fold `data` into `register` using scoped worker threads.
///
/// The buffer is cut into contiguous chunks of at least
/// `parallel_min_chunk` bytes (see [`crate::config`]), one per worker. Each
/// worker computes its chunk from `init`; the results are joined and folded
/// in chunk order. The result is identical to [`compute`].
///
/// Small inputs, or a single available thread, run inline.
///
/// # Panics
///
/// Propagates a panic from a worker thread.
#[cfg(feature = "std")]
#[must_use]
pub fn compute_parallel(model: &Model, register: u64, data: &[u8]) -> u64 {
  let tunables = crate::config::get().tunables;
  let threads = match tunables.parallel_max_threads {
    0 => std::thread::available_parallelism().map_or(1, core::num::NonZeroUsize::get),
    n => n,
  };
  let min_chunk = tunables.parallel_min_chunk.max(1);

  let workers = threads.min(data.len() / min_chunk);
  if workers <= 1 {
    return compute(model, register, data);
  }
  let chunk_len = data.len().div_ceil(workers);

  tracing::trace!(len = data.len(), workers, chunk_len, "parallel CRC dispatch");

  let parts: Vec<(u64, u64)> = std::thread::scope(|scope| {
    let handles: Vec<_> = data
      .chunks(chunk_len)
      .map(|chunk| {
        scope.spawn(move || (compute(model, model.init_register(), chunk), chunk.len() as u64))
      })
      .collect();

    handles
      .into_iter()
      .map(|handle| handle.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
      .collect()
  });

  let whole = combine_registers(model, &parts);
  combine(model, register, whole, data.len() as u64)
}

#[cfg(test)]
mod tests {
  use alloc::vec::Vec;

  use super::*;
  use crate::CrcParams;

  fn data(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(101).wrapping_add(3)).collect()
  }

  fn models() -> Vec<Model> {
    [
      CrcParams::CRC32_ISCSI,
      CrcParams::CRC16_IBM_3740,
      CrcParams::CRC12_UMTS,
      CrcParams::CRC5_USB,
      CrcParams::CRC64_NVME,
    ]
    .into_iter()
    .map(|p| Model::new(p).unwrap())
    .collect()
  }

  #[test]
  fn test_checksum_chunks_matches_direct() {
    let buf = data(1000);
    for m in models() {
      let direct = compute(&m, m.init_register(), &buf);
      for size in [1, 7, 16, 100, 999, 1000] {
        let chunks: Vec<&[u8]> = buf.chunks(size).collect();
        assert_eq!(checksum_chunks(&m, &chunks), direct, "{:?} size={size}", m.params());
      }
    }
  }

  #[test]
  fn test_checksum_chunks_empty() {
    for m in models() {
      assert_eq!(checksum_chunks(&m, &[]), m.init_register());
      let empty: &[u8] = &[];
      assert_eq!(checksum_chunks(&m, &[empty, empty]), m.init_register());
    }
  }

  #[test]
  fn test_combine_registers() {
    let m = Model::new(CrcParams::CRC32_ISO_HDLC).unwrap();
    let buf = b"hello world";
    let (a, b) = buf.split_at(6);
    let parts = [
      (compute(&m, m.init_register(), a), a.len() as u64),
      (compute(&m, m.init_register(), b), b.len() as u64),
    ];
    assert_eq!(combine_registers(&m, &parts), compute(&m, m.init_register(), buf));
    assert_eq!(combine_registers(&m, &[]), m.init_register());
  }

  #[test]
  fn test_reordered_parts_differ() {
    let m = Model::new(CrcParams::CRC32_ISO_HDLC).unwrap();
    let buf = data(48);
    let mut parts: Vec<(u64, u64)> = buf
      .chunks(16)
      .map(|c| (compute(&m, m.init_register(), c), c.len() as u64))
      .collect();
    let correct = combine_registers(&m, &parts);
    parts.swap(0, 2);
    assert_ne!(combine_registers(&m, &parts), correct);
  }

  #[test]
  fn test_checksum_iter_finalize() {
    let m = Model::new(CrcParams::CRC32_ISO_HDLC).unwrap();
    assert_eq!(checksum_iter(&m, b"123456789".chunks(2)).finalize(), 0xCBF4_3926);
    let owned: Vec<Vec<u8>> = Vec::new();
    assert_eq!(checksum_iter(&m, owned.iter()).register(), m.init_register());
  }

  #[cfg(feature = "std")]
  #[test]
  fn test_compute_parallel_matches_sequential() {
    let buf = data(3 * crate::config::DEFAULT_PARALLEL_MIN_CHUNK + 77);
    for m in models() {
      let carry = compute(&m, m.init_register(), b"prefix");
      assert_eq!(compute_parallel(&m, carry, &buf), compute(&m, carry, &buf));
      assert_eq!(compute_parallel(&m, carry, &buf[..10]), compute(&m, carry, &buf[..10]));
    }
  }
}
