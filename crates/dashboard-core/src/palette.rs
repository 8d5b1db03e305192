// File: crates/dashboard-core/src/palette.rs
// Summary: Built-in editorial palettes for SaaS metric charts, with role-tagged swatches.

use std::fmt;

use serde::Serialize;

use crate::color::{hex_to_rgb, Rgb};
use crate::error::{DashboardError, Result};

/// Advisory tag describing how a swatch is meant to be used. Has no effect on color math.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
    Accent,
    Warning,
    Background,
    PrimaryPositive,
    SecondaryNegative,
    BackgroundPositive,
    BackgroundNegative,
    Darkest,
    Dark,
    Medium,
    Light,
    Lightest,
}

impl Role {
    pub const fn label(&self) -> &'static str {
        match self {
            Role::Primary => "Primary",
            Role::Secondary => "Secondary",
            Role::Tertiary => "Tertiary",
            Role::Accent => "Accent",
            Role::Warning => "Warning",
            Role::Background => "Background",
            Role::PrimaryPositive => "Primary/Positive",
            Role::SecondaryNegative => "Secondary/Negative",
            Role::BackgroundPositive => "Background/Positive",
            Role::BackgroundNegative => "Background/Negative",
            Role::Darkest => "Darkest",
            Role::Dark => "Dark",
            Role::Medium => "Medium",
            Role::Light => "Light",
            Role::Lightest => "Lightest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub role: Role,
}

impl Swatch {
    const fn new(name: &'static str, hex: &'static str, role: Role) -> Self {
        Self { name, hex, role }
    }

    pub fn rgb(&self) -> Result<Rgb> {
        hex_to_rgb(self.hex)
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Palette {
    /// Lookup key, e.g. `financialAuthority`.
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub use_case: &'static str,
    pub colors: &'static [Swatch],
}

impl Palette {
    /// Plain hex list in swatch order, the shape most chart datasets take.
    pub fn hex_values(&self) -> Vec<&'static str> {
        self.colors.iter().map(|s| s.hex).collect()
    }

    pub fn rgb_values(&self) -> Result<Vec<Rgb>> {
        self.colors.iter().map(Swatch::rgb).collect()
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &'static Swatch> + '_ {
        self.colors.iter().filter(move |s| s.role == role)
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
}

pub const FINANCIAL_AUTHORITY: Palette = Palette {
    key: "financialAuthority",
    name: "Financial Authority",
    description: "Conservative, institutional tone. Navy foundation with muted accents.",
    use_case: "ARR, growth metrics, primary dashboard",
    colors: &[
        Swatch::new("Navy Dark", "#1B2D4D", Role::Primary),
        Swatch::new("Slate Gray", "#4A5568", Role::Secondary),
        Swatch::new("Teal Accent", "#2D7B8C", Role::Accent),
        Swatch::new("Burgundy", "#8B3A3A", Role::Warning),
        Swatch::new("Cream Background", "#F5F4F0", Role::Background),
    ],
};

pub const NEUTRAL_PROFESSIONAL: Palette = Palette {
    key: "neutralProfessional",
    name: "Neutral Professional",
    description: "Grayscale-first approach with single bright accent. Maximum accessibility.",
    use_case: "Churn rates, retention metrics, comparative analysis",
    colors: &[
        Swatch::new("Charcoal", "#2C2C2C", Role::Primary),
        Swatch::new("Medium Gray", "#6B7280", Role::Secondary),
        Swatch::new("Light Gray", "#D1D5DB", Role::Tertiary),
        Swatch::new("Forest Accent", "#1F5233", Role::Accent),
        Swatch::new("Off-White", "#F9F7F4", Role::Background),
    ],
};

pub const DUAL_PURPOSE: Palette = Palette {
    key: "dualPurpose",
    name: "Dual-Purpose",
    description: "Paired opposing colors for comparison. Good vs. bad contrast. High lightness difference.",
    use_case: "CAC payback, LTV:CAC ratio, expansion vs. churn",
    colors: &[
        Swatch::new("Deep Teal", "#0D5C63", Role::PrimaryPositive),
        Swatch::new("Deep Plum", "#6A3E37", Role::SecondaryNegative),
        Swatch::new("Light Sage", "#E8F1F0", Role::BackgroundPositive),
        Swatch::new("Light Mauve", "#F4EBE8", Role::BackgroundNegative),
        Swatch::new("White", "#FFFFFF", Role::Background),
    ],
};

pub const SINGLE_HUE_PROGRESSION: Palette = Palette {
    key: "singleHueProgression",
    name: "Single-Hue Progression",
    description: "One color family in varying saturations. Clean, minimal, most accessible.",
    use_case: "NRR tracking, ARR per employee, Rule of 40 progression",
    colors: &[
        Swatch::new("Dark Blue (100%)", "#003A66", Role::Darkest),
        Swatch::new("Blue (80%)", "#1A5C8C", Role::Dark),
        Swatch::new("Blue (60%)", "#4A7CB4", Role::Medium),
        Swatch::new("Blue (40%)", "#8AA8D1", Role::Light),
        Swatch::new("Blue (20%)", "#D4E1F0", Role::Lightest),
    ],
};

static PALETTES: [Palette; 4] = [
    FINANCIAL_AUTHORITY,
    NEUTRAL_PROFESSIONAL,
    DUAL_PURPOSE,
    SINGLE_HUE_PROGRESSION,
];

/// All built-in palettes in catalogue order.
pub fn palettes() -> &'static [Palette] {
    &PALETTES
}

/// Find a palette by key (ASCII case-insensitive).
pub fn get_palette(name: &str) -> Result<&'static Palette> {
    PALETTES
        .iter()
        .find(|p| p.key.eq_ignore_ascii_case(name))
        .ok_or_else(|| DashboardError::NotFound(name.to_string()))
}
