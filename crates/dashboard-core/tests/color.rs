// File: crates/dashboard-core/tests/color.rs
// Purpose: Hex parsing and both alpha compositing strategies.

use dashboard_core::{alpha_suffix, hex_to_rgb, to_rgb_string, to_rgba, to_rgba_opaque, with_alpha_suffix, DashboardError, Rgb};

#[test]
fn parses_with_and_without_hash() {
    assert_eq!(hex_to_rgb("#667eea").unwrap(), Rgb::new(102, 126, 234));
    assert_eq!(hex_to_rgb("667eea").unwrap(), Rgb::new(102, 126, 234));
    assert_eq!(hex_to_rgb("#667EEA").unwrap(), Rgb::new(102, 126, 234));
}

#[test]
fn rejects_malformed_hex() {
    for bad in ["bad", "#abc", "#12345", "#1234567", "#12345g", "", "#", "##112233"] {
        let err = hex_to_rgb(bad).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidFormat { .. }), "{bad} -> {err:?}");
    }
}

#[test]
fn rgba_string_matches_chart_format() {
    assert_eq!(to_rgba("#f5576c", 0.12), "rgba(245, 87, 108, 0.12)");
    assert_eq!(to_rgba_opaque("#4facfe"), "rgba(79, 172, 254, 1)");
}

#[test]
fn rgba_passes_through_unparseable_input() {
    assert_eq!(to_rgba("transparent", 0.5), "transparent");
    assert_eq!(to_rgba("#fff", 0.5), "#fff");
}

#[test]
fn rgba_does_not_clamp_alpha() {
    assert_eq!(to_rgba("#000000", 1.5), "rgba(0, 0, 0, 1.5)");
    assert_eq!(to_rgba("#000000", -0.25), "rgba(0, 0, 0, -0.25)");
}

#[test]
fn rgb_string_and_hex_roundtrip() {
    assert_eq!(to_rgb_string("#1B2D4D").unwrap(), "rgb(27, 45, 77)");
    assert_eq!(hex_to_rgb("#1B2D4D").unwrap().to_hex(), "#1b2d4d");
}

#[test]
fn alpha_suffix_appends_verbatim() {
    assert_eq!(with_alpha_suffix("#112233", "CC").unwrap(), "#112233CC");
    assert_eq!(with_alpha_suffix("#667eea", "cc").unwrap(), "#667eeacc");
    assert!(with_alpha_suffix("#112233", "C").is_err());
    assert!(with_alpha_suffix("#112233", "ZZ").is_err());
    assert!(with_alpha_suffix("nope", "CC").is_err());
}

#[test]
fn opacity_to_suffix() {
    assert_eq!(alpha_suffix(0.8).unwrap(), "CC");
    assert_eq!(alpha_suffix(1.0).unwrap(), "FF");
    assert_eq!(alpha_suffix(0.0).unwrap(), "00");
    assert!(matches!(alpha_suffix(1.2), Err(DashboardError::Validation(_))));
    assert!(alpha_suffix(f64::NAN).is_err());
}
