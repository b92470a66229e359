// Host-side tests for the per-frame distortion renderer.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}
mod noise {
    include!("../src/noise.rs");
}
mod clock {
    include!("../src/clock.rs");
}
mod pointer {
    include!("../src/pointer.rs");
}
mod distort {
    include!("../src/distort.rs");
}

use config::*;
use distort::*;
use geometry::*;
use glam::Vec2;
use pointer::PointerState;

#[derive(Default)]
struct Recorder {
    configured: Vec<SurfaceGeometry>,
    fills: Vec<(Rect, Rgba)>,
}

impl Paint for Recorder {
    fn configure(&mut self, geometry: &SurfaceGeometry) {
        self.configured.push(*geometry);
    }
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fills.push((rect, color));
    }
}

fn surface(width: f64, height: f64) -> SurfaceGeometry {
    SurfaceGeometry::from_viewport(Viewport {
        width,
        height,
        device_pixel_ratio: 1.0,
    })
}

fn params(config: &RenderConfig, x: f32, y: f32, speed: f32) -> FrameParams {
    let mut p = PointerState::at(Vec2::new(x, y));
    p.speed = speed;
    FrameParams::new(config, &p)
}

#[test]
fn every_painted_cell_lies_inside_the_radius() {
    let config = RenderConfig::default();
    let geometry = surface(1280.0, 800.0);
    let spots = [(640.0, 400.0), (3.0, 5.0), (1279.0, 799.0), (700.0, 10.0)];
    for &(x, y) in &spots {
        for speed in [0.0, 350.0, 900.0, 1400.0, 50_000.0] {
            let frame = params(&config, x, y, speed);
            for time in [0.0_f64, 1.3, 17.9] {
                let mut visited = 0;
                for_each_cell(&config, &geometry, &frame, time, |c| {
                    visited += 1;
                    assert!(c.grid.distance(frame.pointer) <= frame.radius + 1e-3);
                    assert!(c.sample.distance(frame.pointer) <= frame.radius + 1e-3);
                    let (cx, cy) = c.paints[0].rect.center();
                    assert!((cx - c.grid.x).abs() < 1e-3 && (cy - c.grid.y).abs() < 1e-3);
                });
                assert!(visited > 0, "no cells at ({}, {}) speed {}", x, y, speed);
            }
        }
    }
}

#[test]
fn pointer_far_outside_paints_background_only() {
    let config = RenderConfig::default();
    let geometry = surface(800.0, 600.0);
    let frame = params(&config, 5000.0, 5000.0, 0.0);
    let mut rec = Recorder::default();
    render(&config, &geometry, &frame, 0.0, &mut rec);
    assert_eq!(rec.fills.len(), 1);
}

#[test]
fn render_floods_background_then_paints_cells() {
    let config = RenderConfig::default();
    let geometry = surface(800.0, 600.0);
    let frame = params(&config, 400.0, 300.0, 1000.0);
    let mut rec = Recorder::default();
    render(&config, &geometry, &frame, 2.0, &mut rec);

    assert_eq!(rec.fills[0], (geometry.bounds(), config.background));
    let mut expected = 1;
    for_each_cell(&config, &geometry, &frame, 2.0, |c| expected += c.paints.len());
    assert_eq!(rec.fills.len(), expected);
    assert!(rec.fills.len() > 1);
}

#[test]
fn zero_size_surface_draws_no_cells() {
    let config = RenderConfig::default();
    let geometry = surface(0.0, 0.0);
    let frame = params(&config, 0.0, 0.0, 2000.0);
    let mut rec = Recorder::default();
    render(&config, &geometry, &frame, 0.0, &mut rec);
    assert_eq!(rec.fills.len(), 1);
}

#[test]
fn cell_noise_is_deterministic_and_in_unit_range() {
    for cx in [-1000, -3, 0, 1, 7, 91, 65_000] {
        for cy in [-77, 0, 2, 13, 40_000] {
            let a = cell_noise(cx, cy);
            let b = cell_noise(cx, cy);
            assert_eq!(a, b);
            assert!((0.0..1.0).contains(&a.0) && (0.0..1.0).contains(&a.1));
        }
    }
    // the two channels are independent draws
    assert_ne!(cell_noise(4, 9).0, cell_noise(4, 9).1);
}

#[test]
fn shading_is_a_pure_function_of_cell_and_time() {
    let config = RenderConfig::default();
    let frame = params(&config, 400.0, 300.0, 900.0);
    let a = shade_cell(&config, &frame, 392.0, 294.0, 4.25);
    let b = shade_cell(&config, &frame, 392.0, 294.0, 4.25);
    assert!(a.is_some());
    assert_eq!(a, b);

    let (n1, n2) = cell_noise(28, 21);
    let s1 = sample_point(&config, Vec2::new(392.0, 294.0), n1, n2, 4.25);
    let s2 = sample_point(&config, Vec2::new(392.0, 294.0), n1, n2, 4.25);
    assert_eq!(s1, s2);
    // only time animates the sample
    let later = sample_point(&config, Vec2::new(392.0, 294.0), n1, n2, 5.0);
    assert_ne!(s1, later);
}

#[test]
fn jitter_stays_within_a_fraction_of_a_cell() {
    let config = RenderConfig::default();
    let limit = config.cell_size * 0.55 * config.jitter * 0.5 + config.wobble * config.cell_size * 0.18;
    for cx in 0..40 {
        for cy in 0..40 {
            let (n1, n2) = cell_noise(cx, cy);
            let grid = Vec2::new(cx as f32 * 14.0, cy as f32 * 14.0);
            let s = sample_point(&config, grid, n1, n2, cx as f64 * 0.37);
            assert!((s.x - grid.x).abs() <= limit + 1e-4);
            assert!((s.y - grid.y).abs() <= limit + 1e-4);
        }
    }
}

#[test]
fn alpha_never_exceeds_max_opacity() {
    let configs = [
        RenderConfig::default(),
        RenderConfig {
            max_opacity: 0.1,
            ..RenderConfig::default()
        },
    ];
    for config in &configs {
        for i in 0..=20 {
            let falloff = i as f32 / 20.0;
            for j in 0..=20 {
                let speed01 = j as f32 / 20.0;
                let paints = cell_paints(config, Vec2::ZERO, Vec2::X, Intensity::new(falloff, speed01), 0.9, 0.9);
                assert!(paints[0].color.a <= config.max_opacity);
                assert!(cell_alpha(config, strength(falloff, speed01)) <= config.max_opacity);
            }
        }
    }
}

#[test]
fn aberration_gate_boundaries() {
    let config = RenderConfig::default();
    assert!(aberration_enabled(&config, 0.381, 0.251));
    assert!(!aberration_enabled(&config, 0.379, 0.251));
    assert!(!aberration_enabled(&config, 0.381, 0.249));
    assert!(!aberration_enabled(&config, 0.38, 0.9));
    assert!(!aberration_enabled(&config, 0.9, 0.25));
}

#[test]
fn aberration_copies_follow_strength_threshold() {
    let config = RenderConfig::default();
    // at speed01 0.5 strength = 0.52 * falloff; threshold falloff ~0.7308
    let above = cell_paints(&config, Vec2::new(50.0, 50.0), Vec2::X, Intensity::new(0.74, 0.5), 0.4, 0.6);
    let below = cell_paints(&config, Vec2::new(50.0, 50.0), Vec2::X, Intensity::new(0.72, 0.5), 0.4, 0.6);
    assert_eq!(above.len(), 4);
    assert_eq!(below.len(), 1);

    let red = above[1];
    let cyan = above[2];
    let green = above[3];
    assert_eq!((red.color.r, red.color.g, red.color.b), (255, 70, 70));
    assert_eq!((cyan.color.r, cyan.color.g, cyan.color.b), (70, 190, 255));
    assert_eq!((green.color.r, green.color.g, green.color.b), (120, 255, 170));
    // red pushed outward along the radial, cyan inward, green stays put
    assert!(red.rect.center().0 > 50.0);
    assert!(cyan.rect.center().0 < 50.0);
    assert_eq!(green.rect.center(), (50.0, 50.0));
    assert!(green.color.a < red.color.a);
    assert_eq!(red.color.a, cyan.color.a);
}

#[test]
fn aberration_copies_follow_speed_threshold() {
    let config = RenderConfig {
        aberration_strength_min: 0.1,
        ..RenderConfig::default()
    };
    let fast = cell_paints(&config, Vec2::ZERO, Vec2::Y, Intensity::new(1.0, 0.26), 0.5, 0.5);
    let slow = cell_paints(&config, Vec2::ZERO, Vec2::Y, Intensity::new(1.0, 0.24), 0.5, 0.5);
    assert_eq!(fast.len(), 4);
    assert_eq!(slow.len(), 1);
}

#[test]
fn cell_size_has_a_floor_and_grows_near_pointer() {
    let config = RenderConfig {
        cell_size: 3.0,
        ..RenderConfig::default()
    };
    let tiny = cell_paints(&config, Vec2::ZERO, Vec2::X, Intensity::new(0.0, 0.0), 0.5, 0.0);
    assert_eq!(tiny[0].rect.w, 4.0);

    let config = RenderConfig::default();
    let edge = cell_paints(&config, Vec2::ZERO, Vec2::X, Intensity::new(0.0, 0.0), 0.5, 0.99);
    let core = cell_paints(&config, Vec2::ZERO, Vec2::X, Intensity::new(1.0, 0.0), 0.5, 0.99);
    assert!(core[0].rect.w > edge[0].rect.w);
}

#[test]
fn color_shifts_with_speed() {
    let config = RenderConfig::default();
    let calm = cell_paints(&config, Vec2::ZERO, Vec2::X, Intensity::new(0.5, 0.0), 0.5, 0.5)[0].color;
    let fast = cell_paints(&config, Vec2::ZERO, Vec2::X, Intensity::new(0.5, 1.0), 0.5, 0.5)[0].color;
    assert_eq!(calm.b, 255);
    assert!(fast.r > calm.r);
    assert!(fast.g > calm.g);
}

#[test]
fn pointer_jump_hits_speed_cap() {
    let config = RenderConfig::default();
    let mut p = PointerState::at(Vec2::new(100.0, 100.0));
    p.set_target(500.0, 500.0);
    let inst = p.step(0.016);
    assert!(inst > 31_250.0);
    let speed01 = config.normalized_speed(inst);
    assert_eq!(speed01, 1.0);
    assert_eq!(config.radius(speed01), config.base_radius + config.radius_speed_gain);
}

#[test]
fn sustained_fast_motion_saturates_frame_radius() {
    let config = RenderConfig::default();
    let mut d = Distortion::new(config.clone(), surface(1000.0, 800.0), 0.0);
    d.pointer = PointerState::at(Vec2::new(100.0, 100.0));
    let mut rec = Recorder::default();
    let mut last = None;
    for n in 1..=30 {
        let x = 100.0 + 500.0 * n as f32;
        d.pointer.set_target(x, x);
        last = Some(d.frame(16.0 * n as f64, &mut rec));
    }
    let frame = last.unwrap();
    assert_eq!(frame.speed01, 1.0);
    assert_eq!(frame.radius, config.base_radius + config.radius_speed_gain);
}

#[test]
fn resize_keeps_pointer_state() {
    let mut d = Distortion::new(RenderConfig::default(), surface(800.0, 600.0), 0.0);
    d.pointer.set_target(120.0, 80.0);
    let mut rec = Recorder::default();
    d.frame(16.0, &mut rec);
    let before = d.pointer;

    let big = SurfaceGeometry::from_viewport(Viewport {
        width: 1600.0,
        height: 1200.0,
        device_pixel_ratio: 2.0,
    });
    d.resize(big, &mut rec);
    assert_eq!(d.pointer, before);
    assert_eq!(rec.configured.last(), Some(&big));
    assert_eq!((big.buffer_width, big.buffer_height), (3200, 2400));

    rec.fills.clear();
    d.frame(32.0, &mut rec);
    assert_eq!(rec.fills[0].0, Rect { x: 0.0, y: 0.0, w: 1600.0, h: 1200.0 });
}

#[test]
fn frame_uses_clamped_clock_after_long_gap() {
    let mut d = Distortion::new(RenderConfig::default(), surface(800.0, 600.0), 0.0);
    let mut rec = Recorder::default();
    d.frame(10_000.0, &mut rec);
    assert!((d.clock.elapsed_sec - 0.05).abs() < 1e-6);
    d.rebase(50_000.0);
    d.frame(50_016.0, &mut rec);
    assert!((d.clock.elapsed_sec - 0.066).abs() < 1e-5);
}

#[test]
fn shaded_cell_strength_matches_its_paint() {
    let config = RenderConfig::default();
    let geometry = surface(800.0, 600.0);
    let frame = params(&config, 400.0, 300.0, 1100.0);
    let mut checked = 0;
    for_each_cell(&config, &geometry, &frame, 3.5, |c| {
        checked += 1;
        assert_eq!(c.strength, strength(c.falloff, frame.speed01));
        assert_eq!(c.paints[0].color.a, cell_alpha(&config, c.strength));
        let split = aberration_enabled(&config, c.strength, frame.speed01);
        assert_eq!(c.paints.len(), if split { 4 } else { 1 });
    });
    assert!(checked > 0);
}

#[test]
fn wobble_keeps_moving_after_days_of_uptime() {
    let config = RenderConfig::default();
    let mut d = Distortion::new(config.clone(), surface(800.0, 600.0), 0.0);
    d.clock.elapsed_sec = 600_000.0;
    let start = d.clock.elapsed_sec;
    let mut rec = Recorder::default();
    for n in 1..=60 {
        d.frame(16.0 * n as f64, &mut rec);
    }
    let advanced = d.clock.elapsed_sec - start;
    assert!((advanced - 0.96).abs() < 1e-6, "advanced {}", advanced);

    // the jittered sample still drifts a few frames later at that age
    let (n1, n2) = cell_noise(10, 12);
    let grid = Vec2::new(140.0, 168.0);
    let a = sample_point(&config, grid, n1, n2, start);
    let b = sample_point(&config, grid, n1, n2, start + 0.1);
    assert_ne!(a, b);
}
