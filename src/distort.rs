// Per-frame cell renderer.
//
// Every frame the surface is flooded with the background colour, then the
// cells of the grid that fall inside the interaction radius are painted as
// small translucent squares. Sampling for the distance math is jittered per
// cell; the painted square stays on the grid so the pattern remains legible.

use crate::clock::AnimationClock;
use crate::config::{Rgba, RenderConfig};
use crate::constants::*;
use crate::geometry::{grid_span, Rect, SurfaceGeometry};
use crate::noise::{hash2, smoothstep01};
use crate::pointer::PointerState;
use glam::Vec2;
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// Anything that can receive rectangle fills in logical pixels.
pub trait Paint {
    /// Resize the backing buffer and install the logical-pixel transform.
    fn configure(&mut self, geometry: &SurfaceGeometry);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
}

/// One rectangle fill produced for a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellPaint {
    pub rect: Rect,
    pub color: Rgba,
}

/// Up to four fills: the cell itself plus the red/cyan/green split.
pub type CellPaints = SmallVec<[CellPaint; 4]>;

/// Pointer-derived values shared by every cell of one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub pointer: Vec2,
    pub speed01: f32,
    pub radius: f32,
}

impl FrameParams {
    pub fn new(config: &RenderConfig, pointer: &PointerState) -> Self {
        let speed01 = config.normalized_speed(pointer.speed);
        Self {
            pointer: pointer.pos,
            speed01,
            radius: config.radius(speed01),
        }
    }

    #[inline]
    pub fn radius_sq(&self) -> f32 {
        self.radius * self.radius
    }
}

/// A cell that passed the radius test, with everything needed to paint it.
#[derive(Clone, Debug, PartialEq)]
pub struct ShadedCell {
    pub cell: (i32, i32),
    pub grid: Vec2,
    pub sample: Vec2,
    pub falloff: f32,
    pub strength: f32,
    pub paints: CellPaints,
}

/// The two hash channels for a grid cell.
#[inline]
pub fn cell_noise(cx: i32, cy: i32) -> (f32, f32) {
    (hash2(cx, cy, 1), hash2(cx, cy, 2))
}

/// Grid position displaced by static jitter plus the time-varying wobble.
///
/// `time` stays `f64` until the phase is reduced so long sessions keep animating.
pub fn sample_point(config: &RenderConfig, grid: Vec2, n1: f32, n2: f32, time: f64) -> Vec2 {
    let phase = (n1 + n2) as f64 * TAU;
    let freq = (0.6 + n2 * 0.6) as f64;
    let wobble = ((time * freq + phase) % TAU).sin() as f32 * config.wobble;
    let jitter_max = config.cell_size * (0.55 * config.jitter);
    let sway = wobble * config.cell_size * 0.18;
    Vec2::new(
        grid.x + (n1 - 0.5) * jitter_max + sway,
        grid.y + (n2 - 0.5) * jitter_max - sway,
    )
}

#[inline]
pub fn strength(falloff: f32, speed01: f32) -> f32 {
    falloff * (STRENGTH_BASE + speed01 * STRENGTH_SPEED_GAIN)
}

/// Falloff and normalized speed for one cell, with the strength derived from them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intensity {
    pub falloff: f32,
    pub speed01: f32,
    pub strength: f32,
}

impl Intensity {
    #[inline]
    pub fn new(falloff: f32, speed01: f32) -> Self {
        Self {
            falloff,
            speed01,
            strength: strength(falloff, speed01),
        }
    }
}

#[inline]
pub fn cell_alpha(config: &RenderConfig, strength: f32) -> f32 {
    (ALPHA_BASE + strength * ALPHA_STRENGTH_GAIN).clamp(0.0, config.max_opacity)
}

#[inline]
pub fn aberration_enabled(config: &RenderConfig, strength: f32, speed01: f32) -> bool {
    strength > config.aberration_strength_min && speed01 > config.aberration_speed_min
}

#[inline]
fn channel(v: f32) -> u8 {
    v.floor().clamp(0.0, 255.0) as u8
}

/// Colour, size and optional chromatic split for a cell centred on `grid`.
///
/// `radial` is the unit vector from the pointer to the jittered sample.
pub fn cell_paints(
    config: &RenderConfig,
    grid: Vec2,
    radial: Vec2,
    intensity: Intensity,
    n1: f32,
    n2: f32,
) -> CellPaints {
    let Intensity {
        falloff,
        speed01,
        strength,
    } = intensity;
    let alpha = cell_alpha(config, strength);

    let grain = (n1 - 0.5) * 2.0 * config.grain;
    let base_r = 135.0 + (speed01 * 40.0).floor();
    let base_g = 75.0 + (speed01 * 20.0).floor();
    let color = Rgba {
        r: channel(base_r + (strength * (70.0 + grain * 18.0)).floor()),
        g: channel(base_g + (strength * (28.0 + grain * 8.0)).floor()),
        b: 255,
        a: alpha,
    };

    let size_jitter = CELL_SIZE_BASE + (n2 * CELL_SIZE_SPREAD) * (0.25 + falloff * 0.75);
    let size = (config.cell_size * size_jitter).floor().max(CELL_SIZE_MIN);

    let mut paints = CellPaints::new();
    paints.push(CellPaint {
        rect: Rect::centered(grid.x, grid.y, size),
        color,
    });

    if aberration_enabled(config, strength, speed01) {
        let ab = config.aberration * (0.5 + speed01) * (falloff * falloff) * 2.2;
        let offset = radial * ab;
        let ca_alpha = (0.02 + strength * 0.06) * (0.35 + speed01 * 0.45);
        let outward = grid + offset;
        let inward = grid - offset;
        paints.push(CellPaint {
            rect: Rect::centered(outward.x, outward.y, size),
            color: Rgba::with_alpha(ABERRATION_RED, ca_alpha),
        });
        paints.push(CellPaint {
            rect: Rect::centered(inward.x, inward.y, size),
            color: Rgba::with_alpha(ABERRATION_CYAN, ca_alpha),
        });
        paints.push(CellPaint {
            rect: Rect::centered(grid.x, grid.y, size),
            color: Rgba::with_alpha(ABERRATION_GREEN, ca_alpha * ABERRATION_GREEN_FACTOR),
        });
    }
    paints
}

/// Shade the cell at grid position `(gx, gy)`, or `None` if it lies outside the radius.
pub fn shade_cell(
    config: &RenderConfig,
    frame: &FrameParams,
    gx: f32,
    gy: f32,
    time: f64,
) -> Option<ShadedCell> {
    let cell = (
        (gx / config.cell_size).floor() as i32,
        (gy / config.cell_size).floor() as i32,
    );
    let (n1, n2) = cell_noise(cell.0, cell.1);
    let grid = Vec2::new(gx, gy);
    let sample = sample_point(config, grid, n1, n2, time);

    let r2 = frame.radius_sq();
    let d = sample - frame.pointer;
    let d2 = d.length_squared();
    if d2 > r2 || grid.distance_squared(frame.pointer) > r2 {
        return None;
    }

    let intensity = Intensity::new(smoothstep01(1.0 - d2 / r2), frame.speed01);
    let radial = d / (d2.sqrt() + 1e-6);
    let paints = cell_paints(config, grid, radial, intensity, n1, n2);
    Some(ShadedCell {
        cell,
        grid,
        sample,
        falloff: intensity.falloff,
        strength: intensity.strength,
        paints,
    })
}

/// Visit every shaded cell of a frame in column-major order.
pub fn for_each_cell(
    config: &RenderConfig,
    geometry: &SurfaceGeometry,
    frame: &FrameParams,
    time: f64,
    mut visit: impl FnMut(ShadedCell),
) {
    if geometry.is_empty() || config.cell_size <= 0.0 {
        return;
    }
    let step = config.cell_size;
    let (min_x, max_x) = grid_span(frame.pointer.x, frame.radius, geometry.width, step);
    let (min_y, max_y) = grid_span(frame.pointer.y, frame.radius, geometry.height, step);

    let cols = ((max_x - min_x) / step).round() as i32;
    let rows = ((max_y - min_y) / step).round() as i32;
    for i in 0..=cols {
        let gx = min_x + i as f32 * step;
        for j in 0..=rows {
            let gy = min_y + j as f32 * step;
            if let Some(shaded) = shade_cell(config, frame, gx, gy, time) {
                visit(shaded);
            }
        }
    }
}

/// Background flood followed by every cell's fills.
pub fn render<P: Paint>(
    config: &RenderConfig,
    geometry: &SurfaceGeometry,
    frame: &FrameParams,
    time: f64,
    surface: &mut P,
) {
    surface.fill_rect(geometry.bounds(), config.background);
    for_each_cell(config, geometry, frame, time, |shaded| {
        for p in &shaded.paints {
            surface.fill_rect(p.rect, p.color);
        }
    });
}

/// Mutable state of the running effect: pointer, clock and current surface size.
#[derive(Clone, Debug)]
pub struct Distortion {
    pub config: RenderConfig,
    pub geometry: SurfaceGeometry,
    pub pointer: PointerState,
    pub clock: AnimationClock,
}

impl Distortion {
    pub fn new(config: RenderConfig, geometry: SurfaceGeometry, now_ms: f64) -> Self {
        Self {
            config,
            pointer: PointerState::for_viewport(geometry.width, geometry.height),
            geometry,
            clock: AnimationClock::new(now_ms),
        }
    }

    /// New surface size; pointer state is left alone.
    pub fn resize<P: Paint>(&mut self, geometry: SurfaceGeometry, surface: &mut P) {
        self.geometry = geometry;
        surface.configure(&self.geometry);
    }

    #[inline]
    pub fn rebase(&mut self, now_ms: f64) {
        self.clock.rebase(now_ms);
    }

    /// Advance clock and pointer, then repaint.
    pub fn frame<P: Paint>(&mut self, now_ms: f64, surface: &mut P) -> FrameParams {
        let dt = self.clock.tick(now_ms);
        self.pointer.step(dt);
        let params = FrameParams::new(&self.config, &self.pointer);
        render(
            &self.config,
            &self.geometry,
            &params,
            self.clock.elapsed_sec,
            surface,
        );
        params
    }
}
