use crate::constants::*;
use crate::core::StarField;
use crate::dom;
use crate::frame::{FrameDriver, FrameLoop};
use crate::render::SceneRenderer;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct BackgroundScene {
    field: StarField,
    renderer: SceneRenderer<'static>,
    canvas: web::HtmlCanvasElement,
}

impl FrameDriver for BackgroundScene {
    fn frame(&mut self) {
        self.field.step();
        self.renderer
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.renderer.render(&self.field) {
            log::error!("[background] render error: {:?}", e);
        }
    }
}

/// Static animated gradient used when the particle scene cannot run.
fn apply_css_fallback(canvas: &web::HtmlCanvasElement) {
    dom::set_style(canvas, "background", SPACE_FALLBACK_BACKGROUND);
    dom::set_style(canvas, "animation", SPACE_FALLBACK_ANIMATION);
}

fn has_webgpu(window: &web::Window) -> bool {
    js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("gpu"))
        .map(|gpu| !gpu.is_undefined() && !gpu.is_null())
        .unwrap_or(false)
}

/// Start the star field on `#space-canvas`, or fall back to CSS.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let canvas: web::HtmlCanvasElement = dom::by_id(document, SPACE_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SPACE_CANVAS_ID))?;

    if !has_webgpu(&window) {
        log::warn!("[background] WebGPU not available, falling back to CSS background");
        apply_css_fallback(&canvas);
        return Ok(());
    }
    if dom::prefers_reduced_motion(&window, REDUCED_MOTION_QUERY) {
        log::info!("[background] reduced motion requested, using CSS background");
        apply_css_fallback(&canvas);
        return Ok(());
    }

    dom::sync_canvas_to_window(&canvas, MAX_PIXEL_RATIO);
    let (viewport_width, _) = dom::inner_size(&window);
    let mut rng = StdRng::from_entropy();
    let field = StarField::new(&mut rng, viewport_width);
    log::info!(
        "[background] layers nebula={} stars={} constellation={} ambient={}",
        field.nebula.len(),
        field.starfield.len(),
        field.constellation.len(),
        field.ambient.len()
    );

    spawn_local(async move {
        // leak a canvas clone to satisfy 'static lifetime for surface
        let leaked_canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
        let renderer = match SceneRenderer::new(leaked_canvas, &field).await {
            Ok(r) => r,
            Err(e) => {
                log::error!("[background] WebGPU init error: {:?}", e);
                apply_css_fallback(&canvas);
                return;
            }
        };
        let scene = Rc::new(RefCell::new(BackgroundScene {
            field,
            renderer,
            canvas: canvas.clone(),
        }));
        wire_events(&scene, FrameLoop::start(scene.clone()));
    });
    Ok(())
}

fn wire_events(scene: &Rc<RefCell<BackgroundScene>>, frame_loop: FrameLoop) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let on_move = scene.clone();
    let win = window.clone();
    dom::listen(&document, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::inner_size(&win);
        on_move
            .borrow_mut()
            .field
            .cursor
            .aim_client(ev.client_x() as f64, ev.client_y() as f64, w, h);
    });

    let on_resize = scene.clone();
    dom::listen(&window, "resize", move |_: web::Event| {
        dom::sync_canvas_to_window(&on_resize.borrow().canvas, MAX_PIXEL_RATIO);
    });

    let doc = document.clone();
    let paused_at: RefCell<Option<Instant>> = RefCell::new(None);
    dom::listen(&document, "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            if !frame_loop.is_running() {
                return;
            }
            frame_loop.cancel();
            *paused_at.borrow_mut() = Some(Instant::now());
            log::debug!("[background] paused");
        } else {
            frame_loop.resume();
            if let Some(t0) = paused_at.borrow_mut().take() {
                log::debug!("[background] resumed after {:?}", t0.elapsed());
            }
        }
    });
}
