//! Raw CRC parameters.
//!
//! This module defines the parameter tuple that identifies a CRC algorithm,
//! following the conventions from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use crate::{Error, common::bits};

/// CRC algorithm parameters.
///
/// # Parameters
///
/// - `width`: Number of bits in the CRC, `1..=64`
/// - `poly`: The generator polynomial without the implicit `x^width` term,
///   never given in reflected form (`x^16 + x^12 + x^5 + 1` is `0x1021`)
/// - `init`: Initial contents of the CRC register
/// - `refin`: Process input bits least-significant first
/// - `refout`: Reflect the final register before XOR
/// - `xorout`: Value XORed into the final (possibly reflected) register
///
/// This is a plain value type: it is `Hash + Eq` so it can key a model cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CrcParams {
  /// Width in bits (`1..=64`).
  pub width: u8,
  /// Generator polynomial (without the implicit high bit, not reflected).
  pub poly: u64,
  /// Initial value for the CRC register.
  pub init: u64,
  /// Reflect input bits.
  pub refin: bool,
  /// Reflect the final register before XOR.
  pub refout: bool,
  /// XOR value applied to the final CRC.
  pub xorout: u64,
}

impl CrcParams {
  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip, SATA
  pub const CRC32_ISO_HDLC: Self = Self::new(32, 0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

  /// CRC-32/ISCSI (Castagnoli) - iSCSI, SCTP, Btrfs, ext4
  pub const CRC32_ISCSI: Self = Self::new(32, 0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);

  /// CRC-64/XZ - XZ Utils, 7-Zip
  pub const CRC64_XZ: Self = Self::new(64, 0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX);

  /// CRC-64/NVME - NVMe specification
  pub const CRC64_NVME: Self = Self::new(64, 0xAD93_D235_94C9_3659, u64::MAX, true, true, u64::MAX);

  /// CRC-16/ARC - ARC, LHA, many legacy protocols
  pub const CRC16_ARC: Self = Self::new(16, 0x8005, 0x0000, true, true, 0x0000);

  /// CRC-16/IBM-3740 (a.k.a. CCITT-FALSE)
  pub const CRC16_IBM_3740: Self = Self::new(16, 0x1021, 0xFFFF, false, false, 0x0000);

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton
  pub const CRC8_MAXIM_DOW: Self = Self::new(8, 0x31, 0x00, true, true, 0x00);

  /// CRC-24/OPENPGP - RFC 4880 armor
  pub const CRC24_OPENPGP: Self = Self::new(24, 0x86_4CFB, 0xB7_04CE, false, false, 0x00_0000);

  /// CRC-5/USB - USB token packets
  pub const CRC5_USB: Self = Self::new(5, 0x05, 0x1F, true, true, 0x1F);

  /// CRC-12/UMTS - one of the few models with `refin != refout`
  pub const CRC12_UMTS: Self = Self::new(12, 0x80F, 0x000, false, true, 0x000);

  /// Create a parameter set from its six components.
  #[must_use]
  pub const fn new(width: u8, poly: u64, init: u64, refin: bool, refout: bool, xorout: u64) -> Self {
    Self {
      width,
      poly,
      init,
      refin,
      refout,
      xorout,
    }
  }

  /// Start a builder where every parameter must be supplied explicitly.
  #[must_use]
  pub const fn builder() -> ParamsBuilder {
    ParamsBuilder::new()
  }

  /// Check that the width is supported.
  pub const fn validate(&self) -> Result<(), Error> {
    if self.width == 0 || self.width as u32 > bits::WORD_BITS {
      return Err(Error::InvalidWidth(self.width));
    }
    Ok(())
  }

  /// Mask `poly`, `init` and `xorout` to `width` bits.
  ///
  /// # Errors
  ///
  /// Returns [`Error::InvalidWidth`] if the width is unsupported.
  pub const fn normalized(self) -> Result<Self, Error> {
    if let Err(e) = self.validate() {
      return Err(e);
    }
    let m = bits::mask(self.width);
    Ok(Self {
      poly: self.poly & m,
      init: self.init & m,
      xorout: self.xorout & m,
      ..self
    })
  }

  /// Returns the reflected polynomial (bit-reversed over `width` bits).
  ///
  /// # Panics
  ///
  /// Panics in const evaluation or debug builds if the width is not in `1..=64`.
  #[must_use]
  pub const fn poly_reflected(&self) -> u64 {
    bits::reflect(self.poly, self.width)
  }
}

/// Builder that reports the first missing parameter.
///
/// Mirrors the keyword-argument constructor of dynamic bindings where any of
/// the six parameters may be left out by mistake.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamsBuilder {
  width: Option<u8>,
  poly: Option<u64>,
  init: Option<u64>,
  refin: Option<bool>,
  refout: Option<bool>,
  xorout: Option<u64>,
}

impl ParamsBuilder {
  /// Builder with nothing set.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      width: None,
      poly: None,
      init: None,
      refin: None,
      refout: None,
      xorout: None,
    }
  }

  /// Set the width in bits.
  #[must_use]
  pub const fn width(mut self, width: u8) -> Self {
    self.width = Some(width);
    self
  }

  /// Set the (non-reflected) polynomial.
  #[must_use]
  pub const fn poly(mut self, poly: u64) -> Self {
    self.poly = Some(poly);
    self
  }

  /// Set the initial register value.
  #[must_use]
  pub const fn init(mut self, init: u64) -> Self {
    self.init = Some(init);
    self
  }

  /// Set input reflection.
  #[must_use]
  pub const fn refin(mut self, refin: bool) -> Self {
    self.refin = Some(refin);
    self
  }

  /// Set output reflection.
  #[must_use]
  pub const fn refout(mut self, refout: bool) -> Self {
    self.refout = Some(refout);
    self
  }

  /// Set the final XOR mask.
  #[must_use]
  pub const fn xorout(mut self, xorout: u64) -> Self {
    self.xorout = Some(xorout);
    self
  }

  /// Finish the builder.
  ///
  /// # Errors
  ///
  /// [`Error::MissingParameter`] naming the first absent parameter, or
  /// [`Error::InvalidWidth`] if the width is outside `1..=64`.
  pub fn build(self) -> Result<CrcParams, Error> {
    let params = CrcParams {
      width: self.width.ok_or(Error::MissingParameter("width"))?,
      poly: self.poly.ok_or(Error::MissingParameter("poly"))?,
      init: self.init.ok_or(Error::MissingParameter("init"))?,
      refin: self.refin.ok_or(Error::MissingParameter("refin"))?,
      refout: self.refout.ok_or(Error::MissingParameter("refout"))?,
      xorout: self.xorout.ok_or(Error::MissingParameter("xorout"))?,
    };
    params.validate()?;
    Ok(params)
  }
}
