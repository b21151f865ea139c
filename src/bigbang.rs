use crate::constants::*;
use crate::core::{BurstField, ParticleKind};
use crate::dom;
use crate::frame::{FrameDriver, FrameLoop};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct BurstOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    field: BurstField,
    rng: StdRng,
}

impl BurstOverlay {
    fn resize(&self) {
        if let Some(w) = web::window() {
            let (iw, ih) = dom::inner_size(&w);
            self.canvas.set_width(iw as u32);
            self.canvas.set_height(ih as u32);
        }
    }

    fn explode(&mut self, x: f32, y: f32) {
        self.field.spawn(x, y, &mut self.rng);
        log::debug!("[bigbang] burst at ({:.0},{:.0}) active={}", x, y, self.field.len());
    }

    fn draw(&self) {
        let ctx = &self.ctx;
        for p in self.field.particles() {
            let (x, y) = (p.x as f64, p.y as f64);
            match p.kind {
                ParticleKind::Spark { radius, glow, .. } => {
                    let color = p.color.css(1.0);
                    ctx.begin_path();
                    _ = ctx.arc(x, y, radius as f64, 0.0, TAU);
                    ctx.set_fill_style_str(&color);
                    ctx.set_shadow_blur(glow as f64);
                    ctx.set_shadow_color(&color);
                    ctx.set_global_alpha(p.life as f64);
                    ctx.fill();
                }
                ParticleKind::Shockwave { radius, .. } => {
                    ctx.begin_path();
                    _ = ctx.arc(x, y, radius as f64, 0.0, TAU);
                    ctx.set_stroke_style_str(&p.color.css(p.life * SHOCKWAVE_ALPHA_SCALE));
                    ctx.set_line_width(SHOCKWAVE_LINE_WIDTH);
                    ctx.set_shadow_blur(SHOCKWAVE_GLOW);
                    ctx.set_shadow_color(&p.color.css(1.0));
                    ctx.stroke();
                }
            }
            ctx.set_global_alpha(1.0);
            ctx.set_shadow_blur(0.0);
        }
    }
}

impl FrameDriver for BurstOverlay {
    fn frame(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.field.step();
        self.draw();
    }
}

fn create_overlay_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(dom::js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(BIGBANG_CANVAS_ID);
    for (prop, value) in [
        ("position", "fixed"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("z-index", BIGBANG_Z_INDEX),
    ] {
        dom::set_style(&canvas, prop, value);
    }
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no <body>"))?;
    body.append_child(&canvas).map_err(dom::js_err)?;
    Ok(canvas)
}

/// Inject the full-viewport overlay and explode on every click.
pub fn install(document: &web::Document) -> anyhow::Result<()> {
    let canvas = create_overlay_canvas(document)?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(dom::js_err)?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let overlay = Rc::new(RefCell::new(BurstOverlay {
        canvas,
        ctx,
        field: BurstField::new(),
        rng: StdRng::from_entropy(),
    }));
    overlay.borrow().resize();

    if let Some(window) = web::window() {
        let on_resize = overlay.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            on_resize.borrow().resize();
        });
    }

    let on_click = overlay.clone();
    dom::listen(document, "click", move |ev: web::MouseEvent| {
        on_click
            .borrow_mut()
            .explode(ev.client_x() as f32, ev.client_y() as f32);
    });

    // runs for the page lifetime
    FrameLoop::start(overlay);
    log::info!("[bigbang] overlay ready");
    Ok(())
}
