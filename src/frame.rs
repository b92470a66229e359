use crate::distort::Distortion;
use crate::surface::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// requestAnimationFrame driver.
///
/// The pending frame id is only held while the page is visible: `suspend`
/// cancels it, `resume` rebases the clock and requests a fresh frame.
pub struct FrameLoop {
    state: Rc<RefCell<Distortion>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    raf_id: Cell<Option<i32>>,
}

impl FrameLoop {
    pub fn new(state: Rc<RefCell<Distortion>>, surface: CanvasSurface) -> Rc<Self> {
        let frames = Rc::new(Self {
            state,
            tick: RefCell::new(None),
            raf_id: Cell::new(None),
        });
        let weak: Weak<FrameLoop> = Rc::downgrade(&frames);
        let mut surface = surface;
        *frames.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(frames) = weak.upgrade() else {
                return;
            };
            frames.raf_id.set(None);
            frames.state.borrow_mut().frame(instant::now(), &mut surface);
            frames.request();
        }) as Box<dyn FnMut()>));
        frames
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.raf_id.get().is_some()
    }

    fn request(&self) {
        if self.is_running() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(tick) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Start (or restart) with a fresh clock baseline. No-op while already running.
    pub fn resume(&self) {
        if self.is_running() {
            return;
        }
        self.state.borrow_mut().rebase(instant::now());
        self.request();
    }

    pub fn suspend(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }
}
