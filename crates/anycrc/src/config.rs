//! Runtime configuration (overrides + thresholds).
//!
//! This module centralizes the selection knobs of the engine:
//! - forced kernel selection
//! - the byte-at-a-time to slice-by-16 crossover
//! - chunking for parallel computation
//!
//! None of these affect results. Every kernel produces identical registers, so
//! the knobs only trade throughput.

/// Forced kernel selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Force {
  /// Use the default size-based selector.
  #[default]
  Auto,
  /// Force the bit-serial reference implementation.
  Bitwise,
  /// Force byte-at-a-time table lookups.
  Bytewise,
  /// Force slice-by-16 for every length.
  Slice16,
}

impl Force {
  /// Name accepted by `ANYCRC_FORCE`.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Bitwise => "bitwise",
      Self::Bytewise => "bytewise",
      Self::Slice16 => "slice16",
    }
  }
}

/// Selection tunables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tunables {
  /// Bytes where slice-by-16 becomes faster than byte-at-a-time.
  pub slice_threshold: usize,
  /// Smallest chunk handed to a worker by the parallel helpers.
  pub parallel_min_chunk: usize,
  /// Upper bound on worker threads (0 = available parallelism).
  pub parallel_max_threads: usize,
}

/// Default slice-by-16 crossover.
pub const DEFAULT_SLICE_THRESHOLD: usize = 64;

/// Default minimum parallel chunk (256 KiB).
pub const DEFAULT_PARALLEL_MIN_CHUNK: usize = 256 * 1024;

impl Default for Tunables {
  fn default() -> Self {
    Self {
      slice_threshold: DEFAULT_SLICE_THRESHOLD,
      parallel_min_chunk: DEFAULT_PARALLEL_MIN_CHUNK,
      parallel_max_threads: 0,
    }
  }
}

/// Full runtime configuration (after applying overrides).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Config {
  /// Requested force mode.
  pub requested_force: Force,
  /// Thresholds used by the selector.
  pub tunables: Tunables,
}

#[derive(Clone, Copy, Debug, Default)]
struct Overrides {
  force: Force,
  slice_threshold: Option<usize>,
  parallel_min_chunk: Option<usize>,
  parallel_max_threads: Option<usize>,
}

#[cfg(feature = "std")]
fn parse_force(value: &str) -> Option<Force> {
  let value = value.trim();
  if value.eq_ignore_ascii_case("auto") {
    return Some(Force::Auto);
  }
  if value.eq_ignore_ascii_case("bitwise") || value.eq_ignore_ascii_case("reference") {
    return Some(Force::Bitwise);
  }
  if value.eq_ignore_ascii_case("bytewise") || value.eq_ignore_ascii_case("table") {
    return Some(Force::Bytewise);
  }
  if value.eq_ignore_ascii_case("slice16") || value.eq_ignore_ascii_case("slice") {
    return Some(Force::Slice16);
  }
  None
}

#[cfg(feature = "std")]
fn read_env_overrides() -> Overrides {
  fn parse_usize(name: &str) -> Option<usize> {
    let value = std::env::var(name).ok()?;
    let value = value.trim();
    if value.is_empty() {
      return None;
    }
    value.parse::<usize>().ok()
  }

  let force = std::env::var("ANYCRC_FORCE").ok().and_then(|v| parse_force(&v));
  if let Ok(raw) = std::env::var("ANYCRC_FORCE")
    && force.is_none()
  {
    tracing::warn!(value = %raw, "ignoring unrecognized ANYCRC_FORCE");
  }

  Overrides {
    force: force.unwrap_or(Force::Auto),
    slice_threshold: parse_usize("ANYCRC_SLICE_THRESHOLD"),
    parallel_min_chunk: parse_usize("ANYCRC_PARALLEL_MIN_CHUNK"),
    parallel_max_threads: parse_usize("ANYCRC_PARALLEL_THREADS"),
  }
}

#[cfg(feature = "std")]
fn overrides() -> Overrides {
  use std::sync::OnceLock;
  static OVERRIDES: OnceLock<Overrides> = OnceLock::new();
  *OVERRIDES.get_or_init(read_env_overrides)
}

#[cfg(not(feature = "std"))]
fn overrides() -> Overrides {
  Overrides::default()
}

fn apply(ov: Overrides) -> Config {
  let base = Tunables::default();

  let mut parallel_min_chunk = ov.parallel_min_chunk.unwrap_or(base.parallel_min_chunk);
  // A zero-sized chunk would never make progress.
  if parallel_min_chunk == 0 {
    parallel_min_chunk = 1;
  }

  Config {
    requested_force: ov.force,
    tunables: Tunables {
      slice_threshold: ov.slice_threshold.unwrap_or(base.slice_threshold),
      parallel_min_chunk,
      parallel_max_threads: ov.parallel_max_threads.unwrap_or(base.parallel_max_threads),
    },
  }
}

/// Get the effective configuration.
#[inline]
#[must_use]
pub fn get() -> Config {
  apply(overrides())
}
