//! Engine throughput per algorithm and width.
//!
//! Run: `cargo bench -p anycrc -- compute`
//!
//! This benchmarks:
//! - Each [`Algorithm`] directly (bitwise only at small sizes)
//! - The automatic dispatch path
//! - Multi-threaded computation on large buffers
//! - Model construction (table build cost)

use anycrc::{Algorithm, CrcParams, Model, compute, compute_with, parallel};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes.
const SIZES: [usize; 6] = [16, 64, 256, 4096, 65536, 1048576];

/// Smaller sizes for bitwise.
const BITWISE_SIZES: [usize; 3] = [16, 64, 256];

/// One reflected and one MSB-first model per interesting width.
const MODELS: [(&str, CrcParams); 5] = [
  ("crc5-usb", CrcParams::CRC5_USB),
  ("crc12-umts", CrcParams::CRC12_UMTS),
  ("crc24-openpgp", CrcParams::CRC24_OPENPGP),
  ("crc32-iscsi", CrcParams::CRC32_ISCSI),
  ("crc64-xz", CrcParams::CRC64_XZ),
];

fn bench_algorithms(c: &mut Criterion) {
  for (label, params) in MODELS {
    let model = Model::new(params).unwrap();
    let mut group = c.benchmark_group(format!("compute/{label}"));

    for algorithm in Algorithm::ALL {
      let sizes: &[usize] = if algorithm == Algorithm::Bitwise { &BITWISE_SIZES } else { &SIZES };
      for &size in sizes {
        let data = vec![0xA5u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &data, |b, data| {
          b.iter(|| core::hint::black_box(compute_with(&model, algorithm, model.init_register(), data)));
        });
      }
    }

    for size in SIZES {
      let data = vec![0xA5u8; size];
      group.throughput(Throughput::Bytes(size as u64));
      group.bench_with_input(BenchmarkId::new("auto", size), &data, |b, data| {
        b.iter(|| core::hint::black_box(compute(&model, model.init_register(), data)));
      });
    }

    group.finish();
  }
}

fn bench_parallel(c: &mut Criterion) {
  let model = Model::new(CrcParams::CRC32_ISO_HDLC).unwrap();
  let mut group = c.benchmark_group("compute/parallel");
  group.sample_size(20);

  for size in [1usize << 20, 16 << 20] {
    let data = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_with_input(BenchmarkId::new("serial", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(compute(&model, model.init_register(), data)));
    });
    group.bench_with_input(BenchmarkId::new("threads", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(parallel::compute_parallel(&model, model.init_register(), data)));
    });
  }

  group.finish();
}

fn bench_model_build(c: &mut Criterion) {
  let mut group = c.benchmark_group("compute/model-build");
  for (label, params) in MODELS {
    group.bench_function(label, |b| b.iter(|| core::hint::black_box(Model::new(params).unwrap())));
  }
  group.finish();
}

criterion_group!(benches, bench_algorithms, bench_parallel, bench_model_build,);
criterion_main!(benches);
