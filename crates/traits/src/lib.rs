//! Checksum traits for the anycrc workspace.
//!
//! This crate provides the small set of traits that streaming checksum types
//! conform to. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Checksum`] | Streaming update / finalize / reset |
//! | [`ChecksumCombine`] | O(log n) merge of checksums over adjacent data |
//!
//! Unlike fixed-algorithm checksum crates, the algorithm behind an anycrc
//! hasher is chosen at run time (width, polynomial, reflection, ...), so the
//! traits here are implemented by *instances* that carry their parameters
//! rather than by zero-sized marker types.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;

pub use checksum::{Checksum, ChecksumCombine};
