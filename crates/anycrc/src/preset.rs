//! Built-in preset registry.
//!
//! A compact selection of named models from the
//! [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/), each with its
//! check value (the CRC of `"123456789"`). Covers every common width plus the
//! odd ones (3, 5, 7, 11, 15, 17, 21, 31, 40 bits) and a `refin != refout`
//! model, which makes it a ready-made self-test for the engine.
//!
//! Names and aliases are matched ASCII case-insensitively.
//!
//! ```
//! use anycrc::{Crc, preset};
//!
//! let p = preset::find("crc-32c")?;
//! assert_eq!(p.name, "CRC-32/ISCSI");
//! assert_eq!(Crc::new(p.params)?.check(), p.check);
//! # Ok::<(), anycrc::Error>(())
//! ```

use crate::{CrcParams, Error};

/// A named model and its check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Preset {
  /// Catalogue name.
  pub name: &'static str,
  /// Model parameters.
  pub params: CrcParams,
  /// CRC of the ASCII string `"123456789"`.
  pub check: u64,
}

define_presets! {
  /// CRC-3/GSM - GSM control channels
  CRC3_GSM = "CRC-3/GSM" { width: 3, poly: 0x3, init: 0x0, refin: false, refout: false, xorout: 0x7, check: 0x4 }
  /// CRC-4/G-704 - ITU-T G.704
  CRC4_G_704 = "CRC-4/G-704" { width: 4, poly: 0x3, init: 0x0, refin: true, refout: true, xorout: 0x0, check: 0x7 }
  /// CRC-5/USB - USB token packets
  CRC5_USB = "CRC-5/USB" { width: 5, poly: 0x05, init: 0x1F, refin: true, refout: true, xorout: 0x1F, check: 0x19 }
  /// CRC-6/G-704 - ITU-T G.704
  CRC6_G_704 = "CRC-6/G-704" { width: 6, poly: 0x03, init: 0x00, refin: true, refout: true, xorout: 0x00, check: 0x06 }
  /// CRC-7/MMC - MultiMediaCard, SD
  CRC7_MMC = "CRC-7/MMC" { width: 7, poly: 0x09, init: 0x00, refin: false, refout: false, xorout: 0x00, check: 0x75 }
  /// CRC-8/SMBUS - SMBus packet error checking
  CRC8_SMBUS = "CRC-8/SMBUS" { width: 8, poly: 0x07, init: 0x00, refin: false, refout: false, xorout: 0x00, check: 0xF4 }
  /// CRC-8/MAXIM-DOW - 1-Wire
  CRC8_MAXIM_DOW = "CRC-8/MAXIM-DOW" { width: 8, poly: 0x31, init: 0x00, refin: true, refout: true, xorout: 0x00, check: 0xA1 }
  /// CRC-10/ATM - ATM adaptation layer
  CRC10_ATM = "CRC-10/ATM" { width: 10, poly: 0x233, init: 0x000, refin: false, refout: false, xorout: 0x000, check: 0x199 }
  /// CRC-11/FLEXRAY - FlexRay header
  CRC11_FLEXRAY = "CRC-11/FLEXRAY" { width: 11, poly: 0x385, init: 0x01A, refin: false, refout: false, xorout: 0x000, check: 0x5A3 }
  /// CRC-12/DECT - DECT
  CRC12_DECT = "CRC-12/DECT" { width: 12, poly: 0x80F, init: 0x000, refin: false, refout: false, xorout: 0x000, check: 0xF5B }
  /// CRC-12/UMTS - 3GPP, reflected output only
  CRC12_UMTS = "CRC-12/UMTS" { width: 12, poly: 0x80F, init: 0x000, refin: false, refout: true, xorout: 0x000, check: 0xDAF }
  /// CRC-15/CAN - Controller Area Network
  CRC15_CAN = "CRC-15/CAN" { width: 15, poly: 0x4599, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0x059E }
  /// CRC-16/ARC - ARC, LHA
  CRC16_ARC = "CRC-16/ARC" { width: 16, poly: 0x8005, init: 0x0000, refin: true, refout: true, xorout: 0x0000, check: 0xBB3D }
  /// CRC-16/XMODEM - XMODEM, ZMODEM, Bluetooth
  CRC16_XMODEM = "CRC-16/XMODEM" { width: 16, poly: 0x1021, init: 0x0000, refin: false, refout: false, xorout: 0x0000, check: 0x31C3 }
  /// CRC-16/IBM-3740 - floppy disks, a.k.a. CCITT-FALSE
  CRC16_IBM_3740 = "CRC-16/IBM-3740" { width: 16, poly: 0x1021, init: 0xFFFF, refin: false, refout: false, xorout: 0x0000, check: 0x29B1 }
  /// CRC-16/KERMIT - Kermit, Bluetooth
  CRC16_KERMIT = "CRC-16/KERMIT" { width: 16, poly: 0x1021, init: 0x0000, refin: true, refout: true, xorout: 0x0000, check: 0x2189 }
  /// CRC-16/IBM-SDLC - HDLC, X.25
  CRC16_IBM_SDLC = "CRC-16/IBM-SDLC" { width: 16, poly: 0x1021, init: 0xFFFF, refin: true, refout: true, xorout: 0xFFFF, check: 0x906E }
  /// CRC-16/MODBUS - Modbus RTU
  CRC16_MODBUS = "CRC-16/MODBUS" { width: 16, poly: 0x8005, init: 0xFFFF, refin: true, refout: true, xorout: 0x0000, check: 0x4B37 }
  /// CRC-16/USB - USB data packets
  CRC16_USB = "CRC-16/USB" { width: 16, poly: 0x8005, init: 0xFFFF, refin: true, refout: true, xorout: 0xFFFF, check: 0xB4C8 }
  /// CRC-16/GENIBUS - EPC Gen2 RFID
  CRC16_GENIBUS = "CRC-16/GENIBUS" { width: 16, poly: 0x1021, init: 0xFFFF, refin: false, refout: false, xorout: 0xFFFF, check: 0xD64E }
  /// CRC-16/SPI-FUJITSU - Fujitsu SPI
  CRC16_SPI_FUJITSU = "CRC-16/SPI-FUJITSU" { width: 16, poly: 0x1021, init: 0x1D0F, refin: false, refout: false, xorout: 0x0000, check: 0xE5CC }
  /// CRC-16/DECT-R - DECT R-field
  CRC16_DECT_R = "CRC-16/DECT-R" { width: 16, poly: 0x0589, init: 0x0000, refin: false, refout: false, xorout: 0x0001, check: 0x007E }
  /// CRC-17/CAN-FD - CAN FD, short frames
  CRC17_CAN_FD = "CRC-17/CAN-FD" { width: 17, poly: 0x1_685B, init: 0x0_0000, refin: false, refout: false, xorout: 0x0_0000, check: 0x0_4F03 }
  /// CRC-21/CAN-FD - CAN FD, long frames
  CRC21_CAN_FD = "CRC-21/CAN-FD" { width: 21, poly: 0x10_2899, init: 0x00_0000, refin: false, refout: false, xorout: 0x00_0000, check: 0x0E_D841 }
  /// CRC-24/OPENPGP - RFC 4880 armor
  CRC24_OPENPGP = "CRC-24/OPENPGP" { width: 24, poly: 0x86_4CFB, init: 0xB7_04CE, refin: false, refout: false, xorout: 0x00_0000, check: 0x21_CF02 }
  /// CRC-31/PHILIPS - Philips TDA9887
  CRC31_PHILIPS = "CRC-31/PHILIPS" { width: 31, poly: 0x04C1_1DB7, init: 0x7FFF_FFFF, refin: false, refout: false, xorout: 0x7FFF_FFFF, check: 0x0CE9_E46C }
  /// CRC-32/ISO-HDLC - Ethernet, gzip, PNG, zip
  CRC32_ISO_HDLC = "CRC-32/ISO-HDLC" { width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF, check: 0xCBF4_3926 }
  /// CRC-32/ISCSI - iSCSI, SCTP, ext4, Btrfs
  CRC32_ISCSI = "CRC-32/ISCSI" { width: 32, poly: 0x1EDC_6F41, init: 0xFFFF_FFFF, refin: true, refout: true, xorout: 0xFFFF_FFFF, check: 0xE306_9283 }
  /// CRC-32/BZIP2 - bzip2, ATM AAL5
  CRC32_BZIP2 = "CRC-32/BZIP2" { width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: false, refout: false, xorout: 0xFFFF_FFFF, check: 0xFC89_1918 }
  /// CRC-32/MPEG-2 - MPEG transport streams
  CRC32_MPEG_2 = "CRC-32/MPEG-2" { width: 32, poly: 0x04C1_1DB7, init: 0xFFFF_FFFF, refin: false, refout: false, xorout: 0x0000_0000, check: 0x0376_E6E7 }
  /// CRC-32/CKSUM - POSIX `cksum`
  CRC32_CKSUM = "CRC-32/CKSUM" { width: 32, poly: 0x04C1_1DB7, init: 0x0000_0000, refin: false, refout: false, xorout: 0xFFFF_FFFF, check: 0x765E_7680 }
  /// CRC-40/GSM - GSM control channels
  CRC40_GSM = "CRC-40/GSM" { width: 40, poly: 0x00_0482_0009, init: 0x00_0000_0000, refin: false, refout: false, xorout: 0xFF_FFFF_FFFF, check: 0xD4_164F_C646 }
  /// CRC-64/ECMA-182 - ECMA-182
  CRC64_ECMA_182 = "CRC-64/ECMA-182" { width: 64, poly: 0x42F0_E1EB_A9EA_3693, init: 0, refin: false, refout: false, xorout: 0, check: 0x6C40_DF5F_0B49_7347 }
  /// CRC-64/XZ - XZ Utils, 7-Zip
  CRC64_XZ = "CRC-64/XZ" { width: 64, poly: 0x42F0_E1EB_A9EA_3693, init: u64::MAX, refin: true, refout: true, xorout: u64::MAX, check: 0x995D_C9BB_DF19_39FA }
  /// CRC-64/GO-ISO - Go `hash/crc64` ISO table
  CRC64_GO_ISO = "CRC-64/GO-ISO" { width: 64, poly: 0x0000_0000_0000_001B, init: u64::MAX, refin: true, refout: true, xorout: u64::MAX, check: 0xB909_56C7_75A4_1001 }
  /// CRC-64/WE - Wolfgang Ehrhardt
  CRC64_WE = "CRC-64/WE" { width: 64, poly: 0x42F0_E1EB_A9EA_3693, init: u64::MAX, refin: false, refout: false, xorout: u64::MAX, check: 0x62EC_59E3_F1A4_F00A }
  /// CRC-64/NVME - NVMe
  CRC64_NVME = "CRC-64/NVME" { width: 64, poly: 0xAD93_D235_94C9_3659, init: u64::MAX, refin: true, refout: true, xorout: u64::MAX, check: 0xAE8B_1486_0A79_9888 }
}

/// Alternate names, as `(alias, canonical name)`.
pub const ALIASES: &[(&str, &str)] = &[
  ("CRC-4/ITU", "CRC-4/G-704"),
  ("CRC-6/ITU", "CRC-6/G-704"),
  ("CRC-7", "CRC-7/MMC"),
  ("CRC-8", "CRC-8/SMBUS"),
  ("CRC-8/MAXIM", "CRC-8/MAXIM-DOW"),
  ("DOW-CRC", "CRC-8/MAXIM-DOW"),
  ("CRC-10", "CRC-10/ATM"),
  ("CRC-10/I-610", "CRC-10/ATM"),
  ("CRC-11", "CRC-11/FLEXRAY"),
  ("CRC-12/3GPP", "CRC-12/UMTS"),
  ("X-CRC-12", "CRC-12/DECT"),
  ("CRC-15", "CRC-15/CAN"),
  ("CRC-16", "CRC-16/ARC"),
  ("ARC", "CRC-16/ARC"),
  ("CRC-16/LHA", "CRC-16/ARC"),
  ("XMODEM", "CRC-16/XMODEM"),
  ("ZMODEM", "CRC-16/XMODEM"),
  ("CRC-16/ACORN", "CRC-16/XMODEM"),
  ("CRC-16/CCITT-FALSE", "CRC-16/IBM-3740"),
  ("CRC-16/AUTOSAR", "CRC-16/IBM-3740"),
  ("KERMIT", "CRC-16/KERMIT"),
  ("CRC-16/CCITT", "CRC-16/KERMIT"),
  ("CRC-16/CCITT-TRUE", "CRC-16/KERMIT"),
  ("X-25", "CRC-16/IBM-SDLC"),
  ("CRC-16/ISO-HDLC", "CRC-16/IBM-SDLC"),
  ("CRC-16/X-25", "CRC-16/IBM-SDLC"),
  ("MODBUS", "CRC-16/MODBUS"),
  ("CRC-16/DARC", "CRC-16/GENIBUS"),
  ("CRC-16/EPC", "CRC-16/GENIBUS"),
  ("CRC-16/I-CODE", "CRC-16/GENIBUS"),
  ("CRC-16/AUG-CCITT", "CRC-16/SPI-FUJITSU"),
  ("R-CRC-16", "CRC-16/DECT-R"),
  ("CRC-24", "CRC-24/OPENPGP"),
  ("CRC-32", "CRC-32/ISO-HDLC"),
  ("CRC-32/ADCCP", "CRC-32/ISO-HDLC"),
  ("CRC-32/V-42", "CRC-32/ISO-HDLC"),
  ("PKZIP", "CRC-32/ISO-HDLC"),
  ("CRC-32C", "CRC-32/ISCSI"),
  ("CRC-32/CASTAGNOLI", "CRC-32/ISCSI"),
  ("CRC-32/INTERLAKEN", "CRC-32/ISCSI"),
  ("CRC-32/AAL5", "CRC-32/BZIP2"),
  ("CRC-32/DECT-B", "CRC-32/BZIP2"),
  ("B-CRC-32", "CRC-32/BZIP2"),
  ("CKSUM", "CRC-32/CKSUM"),
  ("CRC-32/POSIX", "CRC-32/CKSUM"),
  ("CRC-64", "CRC-64/ECMA-182"),
  ("CRC-64/GO-ECMA", "CRC-64/XZ"),
];

/// Every built-in preset, in catalogue order.
#[must_use]
pub const fn all() -> &'static [Preset] {
  ALL
}

/// Every alias, as `(alias, canonical name)`.
#[must_use]
pub const fn aliases() -> &'static [(&'static str, &'static str)] {
  ALIASES
}

/// Look up a preset by catalogue name or alias.
///
/// # Errors
///
/// Returns [`Error::UnknownPreset`] if neither a preset nor an alias matches.
pub fn find(name: &str) -> Result<&'static Preset, Error> {
  let name = name.trim();
  let canonical = ALIASES
    .iter()
    .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
    .map_or(name, |&(_, canonical)| canonical);

  ALL
    .iter()
    .find(|preset| preset.name.eq_ignore_ascii_case(canonical))
    .ok_or(Error::UnknownPreset)
}
