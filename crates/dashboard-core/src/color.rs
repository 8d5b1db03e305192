// File: crates/dashboard-core/src/color.rs
// Summary: Hex <-> RGB conversion and the two alpha compositing strategies used by chart configs.
// Notes:
// - `to_rgba` builds `rgba(...)` strings and hands back the input untouched when it
//   cannot parse it. Callers rely on that to pass named colors straight through.
// - `with_alpha_suffix` appends an `#RRGGBBAA` style suffix instead. Both forms are
//   in use by existing chart styles, so neither replaces the other.

use serde::Serialize;

use crate::error::{DashboardError, Result};

/// 8-bit RGB triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parse a 6-digit hex color, with or without the leading `#`.
/// Shorthand (`#abc`) is rejected.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(DashboardError::invalid_format(hex, "expected 6 hex digits"));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DashboardError::invalid_format(hex, "non-hex character"));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| DashboardError::invalid_format(hex, "non-hex character"))
    };
    Ok(Rgb { r: channel(0)?, g: channel(2)?, b: channel(4)? })
}

/// `rgba(r, g, b, alpha)` for a valid hex color; any other input is returned as-is.
/// `alpha` is printed verbatim and not clamped.
pub fn to_rgba(hex: &str, alpha: f64) -> String {
    match hex_to_rgb(hex) {
        Ok(Rgb { r, g, b }) => format!("rgba({r}, {g}, {b}, {alpha})"),
        Err(err) => {
            tracing::debug!(%err, "to_rgba passthrough");
            hex.to_string()
        }
    }
}

/// `to_rgba` with the default alpha of 1.
pub fn to_rgba_opaque(hex: &str) -> String {
    to_rgba(hex, 1.0)
}

/// `rgb(r, g, b)` form of a hex color.
pub fn to_rgb_string(hex: &str) -> Result<String> {
    let Rgb { r, g, b } = hex_to_rgb(hex)?;
    Ok(format!("rgb({r}, {g}, {b})"))
}

/// Append a two-digit hex alpha to a hex color: `#112233` + `CC` -> `#112233CC`.
pub fn with_alpha_suffix(hex: &str, alpha: &str) -> Result<String> {
    hex_to_rgb(hex)?;
    if alpha.len() != 2 || !alpha.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DashboardError::invalid_format(alpha, "alpha suffix must be 2 hex digits"));
    }
    Ok(format!("{hex}{alpha}"))
}

/// Two-digit uppercase hex suffix for an opacity in [0, 1] (0.8 -> `CC`).
pub fn alpha_suffix(alpha: f64) -> Result<String> {
    if !(0.0..=1.0).contains(&alpha) {
        return Err(DashboardError::validation(format!("alpha {alpha} outside [0, 1]")));
    }
    Ok(format!("{:02X}", (alpha * 255.0).round() as u8))
}
