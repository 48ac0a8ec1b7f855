use anycrc::{
  Algorithm, Checksum, Crc, CrcParams, Model, build_model, combine, combine_bits, compute, compute_bits,
  compute_with, finalize, preset,
};

fn gen_bytes(len: usize, seed: u64) -> Vec<u8> {
  let mut out = vec![0u8; len];
  let mut x = seed | 1;
  for b in &mut out {
    x ^= x << 13;
    x ^= x >> 7;
    x ^= x << 17;
    *b = (x as u8).wrapping_add((x >> 8) as u8);
  }
  out
}

/// Textbook bit-serial CRC, written independently of the crate.
fn naive_crc(p: &CrcParams, data: &[u8]) -> u64 {
  let mask = u64::MAX >> (64 - p.width as u32);
  let top = 1u64 << (p.width - 1);
  let mut crc = p.init & mask;
  for &byte in data {
    for i in 0..8 {
      let bit = if p.refin { (byte >> i) & 1 } else { (byte >> (7 - i)) & 1 };
      let feedback = ((crc & top) != 0) ^ (bit != 0);
      crc = (crc << 1) & mask;
      if feedback {
        crc ^= p.poly & mask;
      }
    }
  }
  if p.refout {
    crc = crc.reverse_bits() >> (64 - p.width as u32);
  }
  (crc ^ p.xorout) & mask
}

fn models() -> Vec<Model> {
  let mut out: Vec<Model> = preset::all().iter().map(|p| Model::new(p.params).unwrap()).collect();
  // Widths the catalogue sample skips, with both reflections.
  for width in [1u8, 2, 9, 13, 23, 33, 47, 57, 63] {
    let poly = (0xA6F1_93C5_0B2D_7E49 & (u64::MAX >> (64 - width as u32))) | 1;
    out.push(build_model(width, poly, 0x5A5A_5A5A_5A5A_5A5A, true, false, 0x0F0F_0F0F_0F0F_0F0F).unwrap());
    out.push(build_model(width, poly, 0, false, true, 0).unwrap());
  }
  out
}

#[test]
fn known_answers() {
  let cases = [
    ((32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF), 0xCBF4_3926u64),
    ((16, 0x8005, 0x0000, true, true, 0x0000), 0xBB3D),
    ((5, 0x05, 0x1F, true, true, 0x1F), 0x19),
  ];
  for ((w, poly, init, refin, refout, xorout), check) in cases {
    let m = build_model(w, poly, init, refin, refout, xorout).unwrap();
    for algorithm in Algorithm::ALL {
      let reg = compute_with(&m, algorithm, m.init_register(), b"123456789");
      assert_eq!(finalize(&m, reg), check, "width={w} {}", algorithm.name());
    }
  }
}

#[test]
fn algorithms_agree_with_naive() {
  let lengths = [1usize, 2, 3, 7, 8, 15, 16, 17, 31, 32, 33, 63, 64, 255, 256, 1024];
  for m in models() {
    for &len in &lengths {
      let data = gen_bytes(len, 0x0123_4567_89AB_CDEF ^ len as u64);
      let naive = naive_crc(m.params(), &data);
      for algorithm in Algorithm::ALL {
        let reg = compute_with(&m, algorithm, m.init_register(), &data);
        assert_eq!(
          finalize(&m, reg),
          naive,
          "{:?} len={len} {}",
          m.params(),
          algorithm.name()
        );
      }
    }
  }
}

#[test]
fn zero_length_is_identity() {
  for m in models() {
    for carry in [0u64, 1, 0xDEAD_BEEF_CAFE_F00D & m.mask(), m.mask()] {
      assert_eq!(compute(&m, carry, b""), carry);
      assert_eq!(compute_bits(&m, carry, b"", 0), carry);
      assert_eq!(combine(&m, carry, 0x1234 & m.mask(), 0), carry);
      assert_eq!(combine_bits(&m, carry, 0x1234 & m.mask(), 0), carry);
    }
  }
}

#[test]
fn byte_at_a_time_resumability() {
  for m in models() {
    let data = gen_bytes(97, u64::from(m.width()));
    let whole = compute(&m, m.init_register(), &data);
    let mut reg = m.init_register();
    for byte in data.chunks(1) {
      reg = compute(&m, reg, byte);
    }
    assert_eq!(reg, whole, "{:?}", m.params());
  }
}

#[test]
fn chunking_invariance() {
  for m in models() {
    let data = gen_bytes(777, 0xD1B5_4A32_D192_ED03);
    let whole = compute(&m, m.init_register(), &data);
    for size in [1usize, 5, 16, 100, 776] {
      let mut acc: Option<u64> = None;
      for chunk in data.chunks(size) {
        let reg = compute(&m, m.init_register(), chunk);
        acc = Some(match acc {
          None => reg,
          Some(prev) => combine(&m, prev, reg, chunk.len() as u64),
        });
      }
      assert_eq!(acc, Some(whole), "{:?} chunk={size}", m.params());
    }
  }
}

#[test]
fn reordered_combine_is_wrong() {
  for p in [CrcParams::CRC32_ISO_HDLC, CrcParams::CRC16_IBM_3740, CrcParams::CRC64_XZ] {
    let m = Model::new(p).unwrap();
    let a = gen_bytes(40, 1);
    let b = gen_bytes(24, 2);
    let ra = compute(&m, m.init_register(), &a);
    let rb = compute(&m, m.init_register(), &b);
    let mut joined = a.clone();
    joined.extend_from_slice(&b);
    let correct = compute(&m, m.init_register(), &joined);
    assert_eq!(combine(&m, ra, rb, b.len() as u64), correct);
    assert_ne!(combine(&m, rb, ra, a.len() as u64), correct);
  }
}

#[test]
fn bits_agree_with_bytes() {
  for m in models() {
    let data = gen_bytes(33, 7);
    for len in [0usize, 1, 8, 16, 32, 33] {
      assert_eq!(
        compute_bits(&m, m.init_register(), &data[..len], len * 8),
        compute(&m, m.init_register(), &data[..len])
      );
    }
  }
}

#[test]
fn bit_chaining_across_byte_boundaries() {
  // 150 bits, then the rest: the second call starts mid-byte in the message
  // but at bit 0 of its own buffer, so repack the stream by hand.
  for m in models() {
    let data = gen_bytes(40, 99);
    let total = data.len() * 8;
    let expected = compute(&m, m.init_register(), &data);

    let head = compute_bits(&m, m.init_register(), &data, 150);
    let rest = shift_bits(&data, 150, m.params().refin);
    let reg = compute_bits(&m, head, &rest, total - 150);
    assert_eq!(reg, expected, "{:?}", m.params());
  }
}

/// Drop the first `skip` message bits, repacking so bit 0 of byte 0 is next.
fn shift_bits(data: &[u8], skip: usize, lsb_first: bool) -> Vec<u8> {
  let total = data.len() * 8;
  let bit = |j: usize| -> u8 {
    let byte = data[j / 8];
    if lsb_first { (byte >> (j % 8)) & 1 } else { (byte >> (7 - j % 8)) & 1 }
  };
  let mut out = vec![0u8; (total - skip).div_ceil(8)];
  for (k, j) in (skip..total).enumerate() {
    let b = bit(j);
    if lsb_first {
      out[k / 8] |= b << (k % 8);
    } else {
      out[k / 8] |= b << (7 - k % 8);
    }
  }
  out
}

#[test]
fn finalized_handles_match_engine() {
  for p in preset::all() {
    let crc = Crc::new(p.params).unwrap();
    assert_eq!(crc.check(), p.check, "{}", p.name);

    let data = gen_bytes(300, 5);
    let oneshot = crc.checksum(&data);
    for split in [0usize, 1, 150, 299, 300] {
      let (a, b) = data.split_at(split);

      let mut h = crc.digest();
      h.update(a);
      h.update(b);
      assert_eq!(h.finalize(), oneshot, "{} incremental split={split}", p.name);

      assert_eq!(crc.resume(crc.checksum(a), b), oneshot, "{} resume split={split}", p.name);
      assert_eq!(
        crc.combine(crc.checksum(a), crc.checksum(b), b.len() as u64),
        oneshot,
        "{} combine split={split}",
        p.name
      );
    }
  }
}
