//! Internal macros for the preset registry.

/// Generate named [`Preset`](crate::preset::Preset) constants plus the
/// `ALL` table listing them in declaration order.
///
/// # Arguments
///
/// - `$ident`: The constant name (e.g., `CRC32_ISO_HDLC`)
/// - `$name`: The catalogue name (e.g., `"CRC-32/ISO-HDLC"`)
/// - the six parameters in catalogue order, then the check value
macro_rules! define_presets {
  (
    $(
      $(#[$outer:meta])*
      $ident:ident = $name:literal {
        width: $width:expr,
        poly: $poly:expr,
        init: $init:expr,
        refin: $refin:expr,
        refout: $refout:expr,
        xorout: $xorout:expr,
        check: $check:expr $(,)?
      }
    )*
  ) => {
    $(
      $(#[$outer])*
      pub const $ident: Preset = Preset {
        name: $name,
        params: $crate::CrcParams::new($width, $poly, $init, $refin, $refout, $xorout),
        check: $check,
      };
    )*

    /// Every built-in preset, in catalogue order.
    pub const ALL: &[Preset] = &[$($ident),*];
  };
}
