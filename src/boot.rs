use crate::config::Rgba;
use crate::distort::Paint;
use crate::geometry::SurfaceGeometry;

/// Environment facts sampled once at load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub reduced_motion: bool,
    pub coarse_pointer: bool,
    pub pointer_events: bool,
}

/// Decided once at startup; there is no transition between the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Active,
    StaticFallback,
}

impl Mode {
    pub fn decide(caps: Capabilities) -> Self {
        if caps.reduced_motion || caps.coarse_pointer {
            Mode::StaticFallback
        } else {
            Mode::Active
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerSource {
    Pointer,
    Mouse,
}

impl PointerSource {
    pub fn for_caps(caps: Capabilities) -> Self {
        if caps.pointer_events {
            PointerSource::Pointer
        } else {
            PointerSource::Mouse
        }
    }

    pub fn event_name(self) -> &'static str {
        match self {
            PointerSource::Pointer => "pointermove",
            PointerSource::Mouse => "mousemove",
        }
    }
}

/// Page-side hooks the effect needs when it runs.
pub trait Host {
    fn listen_resize(&mut self);
    fn listen_pointer(&mut self, source: PointerSource);
    fn listen_visibility(&mut self);
    fn start_frames(&mut self);
}

/// Size the surface and either paint once or wire listeners and start the loop.
pub fn boot<H: Host, P: Paint>(
    caps: Capabilities,
    geometry: &SurfaceGeometry,
    background: Rgba,
    host: &mut H,
    surface: &mut P,
) -> Mode {
    let mode = Mode::decide(caps);
    surface.configure(geometry);
    match mode {
        Mode::StaticFallback => {
            surface.fill_rect(geometry.bounds(), background);
        }
        Mode::Active => {
            host.listen_resize();
            host.listen_pointer(PointerSource::for_caps(caps));
            host.listen_visibility();
            host.start_frames();
        }
    }
    mode
}
