// File: crates/dashboard-examples/src/bin/palettes.rs
// Summary: Minimal example that lists every built-in palette with its rgb() and translucent fill forms.

use dashboard_core::{palettes, to_rgb_string, to_rgba};

fn main() {
    for palette in palettes() {
        println!("{} ({}) - {}", palette.name, palette.key, palette.use_case);
        for swatch in palette.colors {
            let rgb = to_rgb_string(swatch.hex).unwrap_or_else(|_| swatch.hex.to_string());
            println!(
                "  {:<20} {:<20} {} {:<20} {}",
                swatch.name,
                swatch.role,
                swatch.hex,
                rgb,
                to_rgba(swatch.hex, 0.1)
            );
        }
    }
}
