use crate::config::Rgba;
use crate::distort::Paint;
use crate::geometry::{Rect, SurfaceGeometry};
use web_sys as web;

/// `Paint` over a 2D canvas context. Cheap to clone; clones share the canvas.
#[derive(Clone)]
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement, ctx: web::CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }
}

impl Paint for CanvasSurface {
    fn configure(&mut self, geometry: &SurfaceGeometry) {
        // resizing the buffer resets the context transform, so set it afterwards
        self.canvas.set_width(geometry.buffer_width);
        self.canvas.set_height(geometry.buffer_height);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{}px", geometry.width));
        _ = style.set_property("height", &format!("{}px", geometry.height));
        _ = self
            .ctx
            .set_transform(geometry.dpr, 0.0, 0.0, geometry.dpr, 0.0, 0.0);
    }

    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }
}
