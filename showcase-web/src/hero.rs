/// Hero animation: wireframe sphere painted on a 2D canvas
use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{render_loop, FrameScheduler, HeroConfig, HeroScene, ScenePainter};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::dom;

/// Frames driven by the display refresh through `requestAnimationFrame`
pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let callback = Closure::once_into_js(move || callback());
        if let Err(err) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {:?}", err);
        }
    }
}

/// Transparent canvas stroking every edge of the scene
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    pixel_ratio: f64,
    color: String,
    opacity: f64,
    line_width: f64,
}

impl CanvasPainter {
    pub fn new(
        canvas: HtmlCanvasElement,
        context: CanvasRenderingContext2d,
        pixel_ratio: f64,
        config: &HeroConfig,
    ) -> Self {
        Self {
            canvas,
            context,
            pixel_ratio,
            color: config.color.clone(),
            opacity: config.opacity,
            line_width: config.line_width,
        }
    }

    /// Resize the backing buffer to `width x height` CSS pixels
    pub fn resize(&self, width: f32, height: f32) -> Result<(), JsValue> {
        let (width, height) = (f64::from(width), f64::from(height));
        self.canvas.set_width((width * self.pixel_ratio).round() as u32);
        self.canvas.set_height((height * self.pixel_ratio).round() as u32);

        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", width))?;
        style.set_property("height", &format!("{}px", height))?;
        Ok(())
    }
}

impl ScenePainter for CanvasPainter {
    fn paint(&mut self, scene: &HeroScene) {
        let viewport = scene.viewport();
        let ctx = &self.context;

        if let Err(err) = ctx.set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0)
        {
            log::error!("canvas transform failed: {:?}", err);
            return;
        }
        ctx.clear_rect(0.0, 0.0, f64::from(viewport.width), f64::from(viewport.height));

        ctx.set_global_alpha(self.opacity);
        ctx.set_stroke_style_str(&self.color);
        ctx.set_line_width(self.line_width);

        ctx.begin_path();
        for (a, b) in scene.segments() {
            ctx.move_to(f64::from(a.x), f64::from(a.y));
            ctx.line_to(f64::from(b.x), f64::from(b.y));
        }
        ctx.stroke();
    }
}

/// Start the hero animation inside its container.
///
/// Returns `false` without touching the page when the container is missing.
pub fn start(window: &Window, document: &Document, config: HeroConfig) -> Result<bool, JsValue> {
    let Some(container) = dom::element_by_id::<HtmlElement>(document, &config.container_id) else {
        log::debug!("no #{} on this page, hero disabled", config.container_id);
        return Ok(false);
    };
    let width = container.client_width() as f32;
    let height = container.client_height() as f32;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|_| JsValue::from_str("created element is not a canvas"))?;
    container.append_child(&canvas)?;

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context not available"))?
        .dyn_into()
        .map_err(|_| JsValue::from_str("context is not a 2d context"))?;

    let painter = CanvasPainter::new(canvas, context, window.device_pixel_ratio(), &config);
    painter.resize(width, height)?;
    let painter = Rc::new(RefCell::new(painter));
    let scene = Rc::new(RefCell::new(HeroScene::new(&config, width, height)));
    log::info!(
        "hero started: {} edges, {}x{}",
        scene.borrow().edge_count(),
        width,
        height
    );

    {
        let scene = Rc::clone(&scene);
        let painter = Rc::clone(&painter);
        dom::listen(window, "resize", move |_| {
            let width = container.client_width() as f32;
            let height = container.client_height() as f32;
            scene.borrow_mut().resize(width, height);
            if let Err(err) = painter.borrow().resize(width, height) {
                log::error!("hero resize failed: {:?}", err);
            }
        })?;
    }

    let scheduler = Rc::new(AnimationFrameScheduler::new(window.clone()));
    render_loop::start(scene, scheduler, painter);
    Ok(true)
}
