use crate::constants::DPR_MAX;

/// Raw viewport sample as reported by the browser.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

/// Logical (CSS pixel) size plus the scaled backing buffer size.
///
/// `buffer_width == floor(width * dpr)` and likewise for height; the drawing
/// transform is `scale(dpr)` so paint calls always use logical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceGeometry {
    pub width: f32,
    pub height: f32,
    pub dpr: f64,
    pub buffer_width: u32,
    pub buffer_height: u32,
}

impl SurfaceGeometry {
    pub fn from_viewport(vp: Viewport) -> Self {
        let dpr = clamp_dpr(vp.device_pixel_ratio);
        let width = finite_floor(vp.width);
        let height = finite_floor(vp.height);
        Self {
            width: width as f32,
            height: height as f32,
            dpr,
            buffer_width: (width * dpr).floor() as u32,
            buffer_height: (height * dpr).floor() as u32,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// The whole logical surface.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect {
            x: 0.0,
            y: 0.0,
            w: self.width,
            h: self.height,
        }
    }
}

/// Ratio clamped to `[1, DPR_MAX]`; missing or nonsense values count as 1.
#[inline]
pub fn clamp_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.clamp(1.0, DPR_MAX)
    } else {
        1.0
    }
}

#[inline]
fn finite_floor(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v.floor()
    } else {
        0.0
    }
}

/// Axis-aligned rectangle in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    /// Square of side `size` centred on `(cx, cy)`.
    #[inline]
    pub fn centered(cx: f32, cy: f32, size: f32) -> Self {
        let half = size * 0.5;
        Self {
            x: cx - half,
            y: cy - half,
            w: size,
            h: size,
        }
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

/// Snap down to the cell grid.
#[inline]
pub fn snap_to_grid(value: f32, cell: f32) -> f32 {
    (value / cell).floor() * cell
}

/// Inclusive grid-snapped range covering `center ± radius` clamped to `[0, limit]`.
#[inline]
pub fn grid_span(center: f32, radius: f32, limit: f32, cell: f32) -> (f32, f32) {
    let lo = snap_to_grid((center - radius).clamp(0.0, limit.max(0.0)), cell);
    let hi = snap_to_grid((center + radius).clamp(0.0, limit.max(0.0)), cell);
    (lo, hi)
}
