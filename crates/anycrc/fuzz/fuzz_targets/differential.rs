//! Differential fuzzing: every algorithm against the bitwise reference.
//!
//! The fuzzer picks the model as well as the data, so this reaches widths,
//! polynomials and reflection combinations no preset covers.

#![no_main]

use anycrc::{Algorithm, CrcParams, Model, __internal, compute_bits, compute_with};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  width: u8,
  poly: u64,
  init: u64,
  refin: bool,
  refout: bool,
  xorout: u64,
  carry: u64,
  tail_bits: u8,
  data: Vec<u8>,
}

fuzz_target!(|input: Input| {
  let params = CrcParams::new(
    input.width % 64 + 1,
    input.poly,
    input.init,
    input.refin,
    input.refout,
    input.xorout,
  );
  let Ok(model) = Model::new(params) else {
    return;
  };
  let carry = input.carry & model.mask();
  let data = &input.data;

  let expected = __internal::crc_bitwise(model.params(), carry, data);
  for algorithm in Algorithm::ALL {
    let got = compute_with(&model, algorithm, carry, data);
    assert_eq!(got, expected, "{} {:?}", algorithm.name(), model.params());
  }

  // Drop up to 7 trailing bits.
  let bit_len = (data.len() * 8).saturating_sub(usize::from(input.tail_bits % 8));
  let expected = __internal::crc_bitwise_bits(model.params(), carry, data, bit_len);
  assert_eq!(compute_bits(&model, carry, data, bit_len), expected);

  assert_eq!(model.resume(model.finalize(carry)), carry);
});
