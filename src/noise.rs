// Stateless noise helpers. Everything here is a pure function of its inputs.

#[inline]
pub fn fract(n: f64) -> f64 {
    n - n.floor()
}

/// Hermite smoothstep on `[0, 1]`; input is clamped first.
#[inline]
pub fn smoothstep01(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Deterministic value in `[0, 1)` for integer cell coordinates and a seed.
///
/// Evaluated in `f64` so large coordinates keep enough precision for the
/// `sin * 43758.5453` trick to stay well distributed.
#[inline]
pub fn hash2(x: i32, y: i32, seed: u32) -> f32 {
    let v = (x as f64 * 127.1 + y as f64 * 311.7 + seed as f64 * 74.7).sin() * 43758.545_312_3;
    let f = fract(v) as f32;
    // f64 -> f32 rounding can land exactly on 1.0
    if f >= 1.0 {
        0.0
    } else {
        f
    }
}
