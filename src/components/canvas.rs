//! Small helpers shared by the canvas-backed components.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// The canvas' 2D context, or `None` (logged) if the browser refuses one.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	let ctx = canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
	if ctx.is_none() {
		warn!("canvas: 2d context unavailable, effect disabled");
	}
	ctx
}

/// Size of the canvas' parent element, falling back to 800x600.
pub fn parent_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|(w, h)| *w > 0.0 && *h > 0.0)
		.unwrap_or((800.0, 600.0))
}

/// Resize the backing store to `width` x `height` CSS pixels.
pub fn fit(canvas: &HtmlCanvasElement, width: f64, height: f64) {
	canvas.set_width(width.max(1.0) as u32);
	canvas.set_height(height.max(1.0) as u32);
}
