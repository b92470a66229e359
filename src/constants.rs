// Distortion tuning constants shared by the renderer and its host wiring.

// Canvas + surface
pub const CANVAS_ID: &str = "distort-canvas";
pub const DPR_MAX: f64 = 2.0; // backing buffer never exceeds 2x the logical size

// Pointer defaults, as fractions of the viewport
pub const POINTER_START_X: f32 = 0.5;
pub const POINTER_START_Y: f32 = 0.4;

// Framerate-independent smoothing: fraction left after one second
pub const SMOOTHING_RESIDUAL_PER_SEC: f32 = 0.001;

// Frame delta clamp (seconds)
pub const DT_MIN_SEC: f32 = 0.001;
pub const DT_MAX_SEC: f32 = 0.05;

// Grid + radius
pub const CELL_SIZE: f32 = 14.0;
pub const BASE_RADIUS: f32 = 105.0;
pub const RADIUS_SPEED_GAIN: f32 = 140.0; // extra radius at full speed
pub const SPEED_REFERENCE: f32 = 1400.0; // px/s mapped to normalized speed 1.0

// Overlay opacity
pub const MAX_OPACITY: f32 = 0.22;
pub const ALPHA_BASE: f32 = 0.06;
pub const ALPHA_STRENGTH_GAIN: f32 = 0.26;

// Noise scales (0..1, lower is calmer)
pub const JITTER_SCALE: f32 = 0.35;
pub const WOBBLE_SCALE: f32 = 0.18;
pub const GRAIN_SCALE: f32 = 0.22;
pub const ABERRATION_SCALE: f32 = 0.45;

// Strength mapping
pub const STRENGTH_BASE: f32 = 0.22;
pub const STRENGTH_SPEED_GAIN: f32 = 0.6;

// Cell sizing
pub const CELL_SIZE_MIN: f32 = 4.0;
pub const CELL_SIZE_BASE: f32 = 0.78;
pub const CELL_SIZE_SPREAD: f32 = 0.28;

// Chromatic aberration gate
pub const ABERRATION_STRENGTH_MIN: f32 = 0.38;
pub const ABERRATION_SPEED_MIN: f32 = 0.25;
pub const ABERRATION_GREEN_FACTOR: f32 = 0.22;

// Palette (0..255)
pub const DARK_BACKGROUND: [u8; 3] = [0x0b, 0x0b, 0x0b];
pub const LIGHT_BACKGROUND: [u8; 3] = [0xf4, 0xf4, 0xf2];
pub const ABERRATION_RED: [u8; 3] = [255, 70, 70];
pub const ABERRATION_CYAN: [u8; 3] = [70, 190, 255];
pub const ABERRATION_GREEN: [u8; 3] = [120, 255, 170];

// Theme lookup
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";
