//! Parallel checksum computation using combine.
//!
//! CRC registers are combinable: given crc(A), crc(B) and len(B) we can
//! compute crc(A || B) without touching the data again. This enables
//! splitting large inputs across threads.
//!
//! Run with: `cargo run --example parallel -p anycrc`

use std::{sync::Arc, thread};

use anycrc::{ChecksumCombine, Crc, CrcParams, Model, ModelCache, combine, compute, parallel};

fn main() -> Result<(), anycrc::Error> {
  println!("=== Parallel Checksum Examples ===\n");

  combine_basics()?;
  threaded_example()?;
  builtin_parallel()?;
  Ok(())
}

/// Basic combine demonstration on finalized checksums.
fn combine_basics() -> Result<(), anycrc::Error> {
  println!("--- Combine Basics ---\n");

  let crc = Crc::new(CrcParams::CRC32_ISO_HDLC)?;
  let data = b"hello world";
  let (part_a, part_b) = data.split_at(6);

  let crc_a = crc.checksum(part_a);
  let crc_b = crc.checksum(part_b);
  let combined = crc.combine(crc_a, crc_b, part_b.len() as u64);
  println!("Combined:           0x{combined:08X}");
  println!("Full data checksum: 0x{:08X}", crc.checksum(data));
  assert_eq!(combined, crc.checksum(data));

  // The same through the trait, on a streaming digest.
  let digest = crc.digest();
  assert_eq!(digest.combine(crc_a, crc_b, part_b.len()), combined);
  println!();
  Ok(())
}

/// Manual threading with a shared cached model.
fn threaded_example() -> Result<(), anycrc::Error> {
  println!("--- Threaded Computation ---\n");

  let cache = ModelCache::new();
  let model: Arc<Model> = cache.get(CrcParams::CRC64_XZ)?;
  let data: Arc<[u8]> = (0..1_000_000u32).map(|i| (i % 251) as u8).collect();
  let chunk = data.len().div_ceil(4);

  let handles: Vec<_> = (0..4)
    .map(|i| {
      let model = Arc::clone(&model);
      let data = Arc::clone(&data);
      thread::spawn(move || {
        let start = (i * chunk).min(data.len());
        let end = ((i + 1) * chunk).min(data.len());
        let part = &data[start..end];
        (compute(&model, model.init_register(), part), part.len() as u64)
      })
    })
    .collect();

  let mut reg: Option<u64> = None;
  for handle in handles {
    let (part, len) = handle.join().expect("worker panicked");
    reg = Some(reg.map_or(part, |acc| combine(&model, acc, part, len)));
  }

  let serial = compute(&model, model.init_register(), &data);
  let reg = reg.unwrap_or(model.init_register());
  println!("4 threads: 0x{:016X}", model.finalize(reg));
  println!("serial:    0x{:016X}", model.finalize(serial));
  assert_eq!(reg, serial);
  println!();
  Ok(())
}

/// The crate's own scoped-thread splitter.
fn builtin_parallel() -> Result<(), anycrc::Error> {
  println!("--- compute_parallel ---\n");

  let model = Model::new(CrcParams::CRC32_ISCSI)?;
  let data = vec![0x5Au8; 8 << 20];
  let reg = parallel::compute_parallel(&model, model.init_register(), &data);
  assert_eq!(reg, compute(&model, model.init_register(), &data));
  println!("CRC-32C of 8 MiB: 0x{:08X}", model.finalize(reg));
  Ok(())
}
