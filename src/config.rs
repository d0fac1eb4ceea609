//! Construction-time configuration.
//!
//! Hosts pass a (possibly partial) object; everything except the grid
//! dimensions has a default.

use serde::Deserialize;

use crate::error::{GridViewError, Result};

/// Lower bound for the zoom scale.
pub const MIN_SCALE: f64 = 0.25;
/// Upper bound for the zoom scale.
pub const MAX_SCALE: f64 = 4.0;
/// Scale change per wheel pixel.
pub const ZOOM_SENSITIVITY: f64 = 0.001;
/// Smallest logical size of either surface axis.
pub const MIN_SURFACE_SIDE: f64 = 200.0;

/// Grid dimensions plus view and theme options. Immutable for a session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f64,
    #[serde(default)]
    pub view: ViewOptions,
    #[serde(default)]
    pub theme: Theme,
}

/// Interaction and sizing knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewOptions {
    pub min_scale: f64,
    pub max_scale: f64,
    pub zoom_sensitivity: f64,
    pub min_surface: f64,
    /// Only stroke gridlines that intersect the visible surface.
    pub cull_gridlines: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            min_surface: MIN_SURFACE_SIDE,
            cull_gridlines: false,
        }
    }
}

/// CSS colors used by the painter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Gradient stop at the grid's top-left corner.
    pub background_start: String,
    /// Gradient stop at the grid's bottom-right corner.
    pub background_end: String,
    pub grid_line: String,
    /// Hover fill; derived from `selection` when absent.
    pub hover_fill: Option<String>,
    pub selection: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_start: "#0F172A".to_string(),
            background_end: "#1E293B".to_string(),
            grid_line: "rgba(148, 163, 184, 0.25)".to_string(),
            hover_fill: None,
            selection: "#38BDF8".to_string(),
        }
    }
}

impl GridConfig {
    /// Config with default view options and theme.
    pub fn new(rows: u32, cols: u32, cell_size: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            view: ViewOptions::default(),
            theme: Theme::default(),
        }
    }

    /// Decode from a JSON string and validate.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the viewer cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GridViewError::InvalidConfig(format!(
                "grid must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridViewError::InvalidConfig(format!(
                "cell size must be positive, got {}",
                self.cell_size
            )));
        }
        let v = &self.view;
        if !(v.min_scale.is_finite() && v.max_scale.is_finite())
            || v.min_scale <= 0.0
            || v.min_scale > v.max_scale
        {
            return Err(GridViewError::InvalidConfig(format!(
                "scale bounds must satisfy 0 < min <= max, got {}..{}",
                v.min_scale, v.max_scale
            )));
        }
        if !v.zoom_sensitivity.is_finite() || v.zoom_sensitivity < 0.0 {
            return Err(GridViewError::InvalidConfig(format!(
                "zoom sensitivity must be non-negative, got {}",
                v.zoom_sensitivity
            )));
        }
        if !v.min_surface.is_finite() || v.min_surface < 1.0 {
            return Err(GridViewError::InvalidConfig(format!(
                "minimum surface side must be at least 1px, got {}",
                v.min_surface
            )));
        }
        Ok(())
    }
}
