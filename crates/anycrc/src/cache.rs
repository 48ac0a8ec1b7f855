//! Caller-owned model cache.
//!
//! Building a [`Model`] costs 16 table passes of 256 entries plus the combine
//! table. [`ModelCache`] memoizes models by parameter tuple so each distinct
//! tuple is built at most once, even when many threads ask for it at the same
//! time, and every caller receives the same `Arc<Model>`.
//!
//! # Locking
//!
//! ```text
//! slots: Mutex<HashMap<params, Arc<Slot>>>   held only to find/insert a slot
//! Slot:  Mutex<Option<Arc<Model>>>           held while that model builds
//! ```
//!
//! Builds for different tuples proceed in parallel; builds for the same tuple
//! serialize on the slot, and the losers find the winner's model. A failed
//! build leaves the slot empty so a later call can retry.

use alloc::sync::Arc;
use std::{
  collections::HashMap,
  sync::{
    Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
  },
};

use crate::{CrcParams, Error, Model};

type Slot = Mutex<Option<Arc<Model>>>;

/// Memoizes built models by their (normalized) parameters.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use anycrc::{CrcParams, ModelCache};
///
/// let cache = ModelCache::new();
/// let a = cache.get(CrcParams::CRC32_ISCSI)?;
/// let b = cache.get(CrcParams::CRC32_ISCSI)?;
/// assert!(Arc::ptr_eq(&a, &b));
/// assert_eq!(cache.builds(), 1);
/// # Ok::<(), anycrc::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ModelCache {
  slots: Mutex<HashMap<CrcParams, Arc<Slot>>>,
  builds: AtomicUsize,
}

impl ModelCache {
  /// An empty cache.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Return the model for `params`, building it on first use.
  ///
  /// Parameters that differ only in bits above `width` share one model.
  ///
  /// # Errors
  ///
  /// - [`Error::InvalidWidth`] for an unsupported width (nothing is cached)
  /// - [`Error::OutOfMemory`] if building the tables fails
  pub fn get(&self, params: CrcParams) -> Result<Arc<Model>, Error> {
    let key = params.normalized()?;
    let slot = self.slot(key);

    let mut entry = slot.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(model) = entry.as_ref() {
      return Ok(Arc::clone(model));
    }

    let model = Arc::new(Model::new(key)?);
    let n = self.builds.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::debug!(width = key.width, poly = key.poly, builds = n, "cached new CRC model");
    *entry = Some(Arc::clone(&model));
    Ok(model)
  }

  /// Same as [`get`](Self::get) from the six raw parameters.
  ///
  /// # Errors
  ///
  /// See [`get`](Self::get).
  pub fn build_model(
    &self,
    width: u8,
    poly: u64,
    init: u64,
    refin: bool,
    refout: bool,
    xorout: u64,
  ) -> Result<Arc<Model>, Error> {
    self.get(CrcParams::new(width, poly, init, refin, refout, xorout))
  }

  fn slot(&self, key: CrcParams) -> Arc<Slot> {
    let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(slots.entry(key).or_default())
  }

  /// Number of models built so far.
  #[must_use]
  pub fn builds(&self) -> usize {
    self.builds.load(Ordering::Relaxed)
  }

  /// Number of models currently cached.
  #[must_use]
  pub fn len(&self) -> usize {
    let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
    slots
      .values()
      .filter(|slot| slot.lock().unwrap_or_else(PoisonError::into_inner).is_some())
      .count()
  }

  /// Whether no model is cached.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Drop every cached model. Outstanding `Arc`s stay valid.
  pub fn clear(&self) {
    self.slots.lock().unwrap_or_else(PoisonError::into_inner).clear();
  }
}
