//! Multi-threaded computation over buffers large enough to split.

use anycrc::{CrcParams, Model, compute, parallel};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut x = seed | 1;
  (0..len)
    .map(|_| {
      x ^= x << 13;
      x ^= x >> 7;
      x ^= x << 17;
      x as u8
    })
    .collect()
}

#[test]
fn large_buffers_match_serial() {
  // Several multiples of the default minimum chunk, plus an uneven tail.
  let data = gen_bytes(4 * 1024 * 1024 + 13, 0x9E37_79B9_7F4A_7C15);
  for p in [CrcParams::CRC32_ISO_HDLC, CrcParams::CRC12_UMTS, CrcParams::CRC64_XZ, CrcParams::CRC5_USB] {
    let m = Model::new(p).unwrap();
    let serial = compute(&m, m.init_register(), &data);
    assert_eq!(parallel::compute_parallel(&m, m.init_register(), &data), serial, "{p:?}");

    // Carry-in from an earlier prefix.
    let (head, tail) = data.split_at(1000);
    let carry = compute(&m, m.init_register(), head);
    assert_eq!(parallel::compute_parallel(&m, carry, tail), serial, "{p:?} carry");
  }
}

#[test]
fn empty_and_tiny_inputs() {
  let m = Model::new(CrcParams::CRC16_ARC).unwrap();
  assert_eq!(parallel::compute_parallel(&m, 0x1234, b""), 0x1234);
  assert_eq!(parallel::compute_parallel(&m, m.init_register(), b"x"), compute(&m, m.init_register(), b"x"));
}
