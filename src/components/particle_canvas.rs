//! Animated particle background for dashboard pages.
//!
//! Only pages carrying `.dashboard-body` get the canvas, and never when the
//! viewer prefers reduced motion. The canvas sits behind everything and
//! ignores pointer events.

use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::JsCast;

use crate::util::dom;
use crate::util::particles::{PARTICLE_COUNT, ParticleField};

const CANVAS_STYLE: [(&str, &str); 8] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "0"),
    ("opacity", "0.3"),
];

pub fn install() {
    if dom::prefers_reduced_motion() {
        return;
    }
    let (Some(win), Some(doc)) = (dom::window(), dom::document()) else {
        return;
    };
    if doc.query_selector(".dashboard-body").ok().flatten().is_none() {
        return;
    }
    let Some(body) = doc.body() else {
        return;
    };
    let Some(canvas) = doc.create_element("canvas").ok().and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok()) else {
        return;
    };
    for (property, value) in CANVAS_STYLE {
        dom::set_style(&canvas, property, value);
    }
    if let Err(err) = body.prepend_with_node_1(&canvas) {
        log::debug!("particle canvas: {err:?}");
        return;
    }
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let (width, height) = viewport_size(&win);
    fit(&canvas, width, height);
    let field = Rc::new(RefCell::new(ParticleField::seeded(PARTICLE_COUNT, width, height, js_sys::Math::random)));

    let resized = Rc::clone(&field);
    let surface = canvas.clone();
    let view = win.clone();
    dom::listen(&win, "resize", move |_| {
        let (width, height) = viewport_size(&view);
        fit(&surface, width, height);
        resized.borrow_mut().resize(width, height);
    });

    dom::frame_loop(move |_| {
        let mut field = field.borrow_mut();
        field.step();
        draw(&ctx, &field);
        true
    });
}

fn viewport_size(win: &web_sys::Window) -> (f64, f64) {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or_default();
    (read(win.inner_width()), read(win.inner_height()))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fit(canvas: &web_sys::HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width.max(0.0) as u32);
    canvas.set_height(height.max(0.0) as u32);
}

fn draw(ctx: &web_sys::CanvasRenderingContext2d, field: &ParticleField) {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);
    for p in &field.particles {
        ctx.begin_path();
        if ctx.arc(p.x, p.y, p.radius, 0.0, TAU).is_err() {
            continue;
        }
        ctx.set_fill_style_str(p.color);
        ctx.fill();
    }
    ctx.set_line_width(0.5);
    for link in field.links() {
        ctx.begin_path();
        ctx.move_to(link.from.0, link.from.1);
        ctx.line_to(link.to.0, link.to.1);
        ctx.set_stroke_style_str(&link.stroke_style());
        ctx.stroke();
    }
}
