//! Fuzz target for combine.
//!
//! Splits the data at arbitrary points, checksums each piece from `init`, and
//! checks that folding the pieces with combine reproduces the whole.

#![no_main]

use anycrc::{CrcParams, Model, combine, combine_bits, compute, compute_bits, parallel, preset};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  preset: u8,
  custom: Option<(u8, u64, u64, bool)>,
  data: Vec<u8>,
  splits: Vec<usize>,
  bit_cut: u16,
}

fuzz_target!(|input: Input| {
  let params = match input.custom {
    Some((width, poly, init, refin)) => CrcParams::new(width % 64 + 1, poly, init, refin, refin, 0),
    None => {
      let all = preset::all();
      match all.get(usize::from(input.preset) % all.len()) {
        Some(p) => p.params,
        None => return,
      }
    }
  };
  let Ok(model) = Model::new(params) else {
    return;
  };
  let data = &input.data;

  // Normalize splits to valid range and sort
  let max_split = data.len() + 1;
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % max_split).collect();
  splits.push(data.len());
  splits.sort_unstable();
  splits.dedup();

  let whole = compute(&model, model.init_register(), data);

  let mut parts = Vec::with_capacity(splits.len());
  let mut prev = 0;
  for &split in &splits {
    let chunk = &data[prev..split];
    parts.push((compute(&model, model.init_register(), chunk), chunk.len() as u64));
    prev = split;
  }
  assert_eq!(parallel::combine_registers(&model, &parts), whole);

  // A || (bit prefix of data)
  let b_bits = usize::from(input.bit_cut) % (data.len() * 8 + 1);
  let (head, _) = data.split_at(data.len() / 2);
  let ra = compute(&model, model.init_register(), head);
  let rb = compute_bits(&model, model.init_register(), data, b_bits);
  assert_eq!(
    combine_bits(&model, ra, rb, b_bits as u64),
    compute_bits(&model, ra, data, b_bits)
  );

  // Byte and bit lengths agree.
  if let Some(&(rb, len)) = parts.last() {
    assert_eq!(combine(&model, whole, rb, len), combine_bits(&model, whole, rb, len * 8));
  }
});
