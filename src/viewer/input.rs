//! Input normalization shared by the DOM glue and headless drivers.

/// `WheelEvent.deltaMode` values.
pub const DOM_DELTA_PIXEL: u32 = 0;
pub const DOM_DELTA_LINE: u32 = 1;
pub const DOM_DELTA_PAGE: u32 = 2;

/// Pixels per wheel "line" (Firefox reports line deltas for mouse wheels).
const LINE_HEIGHT_PX: f64 = 16.0;

/// Convert a wheel delta to pixels so zoom speed doesn't depend on the
/// browser's delta mode.
pub fn wheel_delta_pixels(delta: f64, delta_mode: u32, page_height: f64) -> f64 {
    match delta_mode {
        DOM_DELTA_LINE => delta * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta * page_height,
        _ => delta,
    }
}

/// Length in pixels from a computed style value such as `"12.5px"`.
/// Anything else (empty, `auto`, other units) counts as zero.
pub fn css_px(value: &str) -> f64 {
    value
        .trim()
        .strip_suffix("px")
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
