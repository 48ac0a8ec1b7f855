//! Basic usage: presets, custom models, streaming and bit-granular input.
//!
//! Run with: `cargo run --example basic -p anycrc`

use anycrc::{BitSlice, Checksum, Crc, CrcParams, Input, build_model, compute, preset};

fn main() -> Result<(), anycrc::Error> {
  println!("=== anycrc Basic Examples ===\n");

  preset_examples()?;
  custom_model()?;
  streaming_examples()?;
  bit_examples()?;
  Ok(())
}

/// Catalogue models by name.
fn preset_examples() -> Result<(), anycrc::Error> {
  println!("--- Presets ---\n");

  for name in ["CRC-32", "crc-32c", "CRC-64/XZ", "CRC-16/ARC", "CRC-5/USB", "CRC-12/UMTS"] {
    let p = preset::find(name)?;
    let crc = Crc::new(p.params)?;
    let digits = usize::from(p.params.width).div_ceil(4);
    println!("{:<16} 0x{:0digits$X}", p.name, crc.checksum(b"123456789"));
    assert_eq!(crc.check(), p.check);
  }

  println!("\n{} presets, {} aliases\n", preset::all().len(), preset::aliases().len());
  Ok(())
}

/// Any width, any polynomial.
fn custom_model() -> Result<(), anycrc::Error> {
  println!("--- Custom Model ---\n");

  // A 13-bit CRC that is not in the catalogue.
  let params = CrcParams::builder()
    .width(13)
    .poly(0x1CF5)
    .init(0x1FFF)
    .refin(true)
    .refout(false)
    .xorout(0x0A5A)
    .build()?;
  let crc = Crc::new(params)?;
  println!("CRC-13 (custom): 0x{:04X}", crc.checksum(b"123456789"));

  // Engine level: registers, not finalized checksums.
  let model = build_model(13, 0x1CF5, 0x1FFF, true, false, 0x0A5A)?;
  let reg = compute(&model, model.init_register(), b"123456789");
  assert_eq!(model.finalize(reg), crc.checksum(b"123456789"));
  println!("register:        0x{reg:04X}\n");
  Ok(())
}

/// Streaming computation: process data in chunks.
fn streaming_examples() -> Result<(), anycrc::Error> {
  println!("--- Streaming Computation ---\n");

  let crc = Crc::new(CrcParams::CRC64_NVME)?;
  let mut digest = crc.digest();
  digest.update(b"1234");
  digest.update(b"56789");
  let value = digest.finalize();
  println!("Streaming CRC-64/NVME: 0x{value:016X}");
  assert_eq!(value, crc.checksum(b"123456789"));

  // finalize() is non-consuming: can continue after
  digest.update(b"...");
  let extended = digest.finalize();
  assert_eq!(crc.resume(value, b"..."), extended);
  println!("Extended:              0x{extended:016X}");

  digest.reset();
  assert_eq!(digest.finalize(), crc.checksum(b""));
  println!();
  Ok(())
}

/// Messages whose length is not a whole number of bytes.
fn bit_examples() -> Result<(), anycrc::Error> {
  println!("--- Bit-Granular Input ---\n");

  // CRC-5/USB protects 11-bit token fields: address 0x15, endpoint 0xE.
  let crc = Crc::preset("CRC-5/USB")?;
  let field: u16 = 0x15 | (0xE << 7);
  let bytes = field.to_le_bytes();
  let value = crc.checksum_bits(&bytes, 11)?;
  println!("USB token CRC-5: 0b{value:05b}");

  let bits = BitSlice::new(&bytes, 11)?;
  assert_eq!(crc.checksum_input(Input::Bits(bits)), value);
  println!();
  Ok(())
}
