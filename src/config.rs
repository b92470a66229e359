use crate::constants::*;

/// Straight (non-premultiplied) colour used by every paint call.
///
/// Channels are bytes; `a` is the CSS alpha in 0..1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn opaque(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: 1.0,
        }
    }

    pub const fn with_alpha(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// CSS colour string suitable for `fillStyle`.
    pub fn css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Page colour scheme. Only decides the background colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Parse a `data-theme` / stored preference value. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            v if v.eq_ignore_ascii_case("dark") => Some(Theme::Dark),
            v if v.eq_ignore_ascii_case("light") => Some(Theme::Light),
            _ => None,
        }
    }

    /// First recognised value wins; falls back to dark.
    pub fn resolve<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        candidates
            .into_iter()
            .flatten()
            .find_map(Theme::parse)
            .unwrap_or_default()
    }

    pub fn background(self) -> Rgba {
        match self {
            Theme::Dark => Rgba::opaque(DARK_BACKGROUND),
            Theme::Light => Rgba::opaque(LIGHT_BACKGROUND),
        }
    }
}

/// Tunables fixed at startup.
///
/// Fields:
/// - `background`: flat colour painted every frame and in the static fallback
/// - `cell_size`: grid pitch in logical pixels
/// - `base_radius` / `radius_speed_gain`: interaction radius at rest and extra at full speed
/// - `max_opacity`: hard cap on a cell's overlay alpha
/// - `jitter`, `wobble`, `grain`, `aberration`: 0..1 noise scales
/// - `speed_reference`: px/s that maps to normalized speed 1.0
/// - `aberration_strength_min` / `aberration_speed_min`: both must be exceeded for RGB split
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub background: Rgba,
    pub cell_size: f32,
    pub base_radius: f32,
    pub radius_speed_gain: f32,
    pub max_opacity: f32,
    pub jitter: f32,
    pub wobble: f32,
    pub grain: f32,
    pub aberration: f32,
    pub speed_reference: f32,
    pub aberration_strength_min: f32,
    pub aberration_speed_min: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: Theme::Dark.background(),
            cell_size: CELL_SIZE,
            base_radius: BASE_RADIUS,
            radius_speed_gain: RADIUS_SPEED_GAIN,
            max_opacity: MAX_OPACITY,
            jitter: JITTER_SCALE,
            wobble: WOBBLE_SCALE,
            grain: GRAIN_SCALE,
            aberration: ABERRATION_SCALE,
            speed_reference: SPEED_REFERENCE,
            aberration_strength_min: ABERRATION_STRENGTH_MIN,
            aberration_speed_min: ABERRATION_SPEED_MIN,
        }
    }
}

impl RenderConfig {
    pub fn for_theme(theme: Theme) -> Self {
        Self {
            background: theme.background(),
            ..Self::default()
        }
    }

    /// Pointer speed mapped into 0..1.
    #[inline]
    pub fn normalized_speed(&self, speed: f32) -> f32 {
        if self.speed_reference > 0.0 {
            (speed / self.speed_reference).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    #[inline]
    pub fn radius(&self, speed01: f32) -> f32 {
        self.base_radius + speed01 * self.radius_speed_gain
    }
}
