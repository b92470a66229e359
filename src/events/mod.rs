pub mod pointer;
pub mod visibility;

pub use pointer::{wire_pointermove, wire_resize};
pub use visibility::wire_visibility;

use crate::boot::{Host, PointerSource};
use crate::distort::Distortion;
use crate::frame::FrameLoop;
use crate::surface::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Browser implementation of [`Host`]: every hook installs a listener that
/// shares the effect state through `Rc<RefCell<_>>`.
pub struct WebHost {
    pub window: web::Window,
    pub document: web::Document,
    pub state: Rc<RefCell<Distortion>>,
    pub surface: CanvasSurface,
    pub frames: Rc<FrameLoop>,
}

impl WebHost {
    pub fn new(
        window: web::Window,
        document: web::Document,
        state: Rc<RefCell<Distortion>>,
        surface: CanvasSurface,
    ) -> Self {
        let frames = FrameLoop::new(state.clone(), surface.clone());
        Self {
            window,
            document,
            state,
            surface,
            frames,
        }
    }
}

impl Host for WebHost {
    fn listen_resize(&mut self) {
        wire_resize(&self.window, self.state.clone(), self.surface.clone());
    }

    fn listen_pointer(&mut self, source: PointerSource) {
        wire_pointermove(&self.window, source, self.state.clone());
    }

    fn listen_visibility(&mut self) {
        wire_visibility(&self.document, self.frames.clone());
    }

    fn start_frames(&mut self) {
        self.frames.resume();
    }
}
