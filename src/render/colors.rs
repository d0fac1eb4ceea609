//! Color handling for grid rendering.
//!
//! Colors travel as CSS strings, which Canvas 2D consumes directly. Only the
//! hover highlight needs color math (accent plus alpha).

use crate::config::Theme;

/// A CSS color string (e.g., "#FF0000", "rgba(255, 0, 0, 0.5)")
pub type CssColor = String;

/// Alpha applied to the accent color when no hover fill is configured.
pub const HOVER_ALPHA: f64 = 0.18;

/// Fallback colors (CSS format)
pub mod palette {
    /// Hover highlight when the accent color cannot be parsed
    pub const HOVER_FALLBACK: &str = "rgba(56, 189, 248, 0.18)";
}

/// RGB color with u8 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// CSS `rgba()` string with the given alpha (clamped to 0..=1).
    pub fn to_rgba(self, alpha: f64) -> CssColor {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Parse `#RRGGBB`, `rgb(r, g, b)` or `rgba(r, g, b, a)` into components.
pub fn parse_color_rgba(s: &str) -> Option<(Rgb, f64)> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
        let mut parts = inner.split(',').map(str::trim);
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        let a: f64 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        return Some((Rgb::new(r, g, b), a));
    }
    if let Some(inner) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
        let mut parts = inner.split(',').map(str::trim);
        let r: u8 = parts.next()?.parse().ok()?;
        let g: u8 = parts.next()?.parse().ok()?;
        let b: u8 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        return Some((Rgb::new(r, g, b), 1.0));
    }
    Rgb::from_hex(s).map(|rgb| (rgb, 1.0))
}

/// Theme colors resolved once per viewer, ready to hand to the painter.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTheme {
    pub background_start: CssColor,
    pub background_end: CssColor,
    pub grid_line: CssColor,
    pub hover_fill: CssColor,
    pub selection: CssColor,
}

impl ResolvedTheme {
    pub fn resolve(theme: &Theme) -> Self {
        let hover_fill = theme.hover_fill.clone().unwrap_or_else(|| {
            parse_color_rgba(&theme.selection).map_or_else(
                || palette::HOVER_FALLBACK.to_string(),
                |(rgb, a)| rgb.to_rgba(a * HOVER_ALPHA),
            )
        });
        Self {
            background_start: theme.background_start.clone(),
            background_end: theme.background_end.clone(),
            grid_line: theme.grid_line.clone(),
            hover_fill,
            selection: theme.selection.clone(),
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self::resolve(&Theme::default())
    }
}
