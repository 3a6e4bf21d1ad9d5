//! Canvas side of the particle field: acquiring the 2D context, sizing the
//! backing buffer, and painting a frame.

use std::f64::consts::TAU;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::simulation::ParticleFrame;
use super::surface::Surface;
use super::theme::Color;

/// Particles fainter than this are not painted.
const MIN_VISIBLE_OPACITY: f64 = 0.001;

/// Reasons the canvas cannot be drawn on. Any of them means the field never
/// starts; the rest of the page is unaffected.
#[derive(Debug, Error)]
pub enum SurfaceError {
	#[error("no browser window")]
	NoWindow,
	#[error("canvas has no parent element to size against")]
	Detached,
	#[error("2d context unavailable: {0}")]
	ContextFailed(String),
	#[error("canvas returned no 2d context")]
	NoContext,
	#[error("2d context has an unexpected type")]
	WrongContextType,
}

/// Fetches the 2D rendering context of `canvas`.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::ContextFailed(format!("{e:?}")))?
		.ok_or(SurfaceError::NoContext)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| SurfaceError::WrongContextType)
}

/// Measures the container the canvas fills.
pub fn measure(canvas: &HtmlCanvasElement, max_dpr: f64) -> Result<Surface, SurfaceError> {
	let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
	let parent = canvas.parent_element().ok_or(SurfaceError::Detached)?;
	Ok(Surface::new(
		parent.client_width() as f64,
		parent.client_height() as f64,
		window.device_pixel_ratio(),
		max_dpr,
	))
}

/// Sizes the canvas buffer for `surface` and scales the context so drawing
/// happens in CSS pixels.
pub fn apply_surface(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, surface: &Surface) {
	let (w, h) = surface.backing_size();
	canvas.set_width(w);
	canvas.set_height(h);
	let style = canvas.style();
	let _ = style.set_property("width", &format!("{}px", surface.css_width));
	let _ = style.set_property("height", &format!("{}px", surface.css_height));
	let _ = ctx.set_transform(surface.dpr, 0.0, 0.0, surface.dpr, 0.0, 0.0);
}

/// Clears the surface and paints every visible particle as a filled disc.
pub fn render(ctx: &CanvasRenderingContext2d, surface: &Surface, frames: impl Iterator<Item = ParticleFrame>) {
	ctx.clear_rect(0.0, 0.0, surface.css_width, surface.css_height);

	// Palettes are tiny, so only restyle when the color changes.
	let mut current: Option<Color> = None;
	for f in frames {
		if f.opacity <= MIN_VISIBLE_OPACITY {
			continue;
		}
		if current != Some(f.color) {
			ctx.set_fill_style_str(&f.color.to_css_rgb());
			current = Some(f.color);
		}
		ctx.set_global_alpha(f.opacity);
		ctx.begin_path();
		let _ = ctx.arc(f.x, f.y, f.radius, 0.0, TAU);
		ctx.fill();
	}

	ctx.set_global_alpha(1.0);
}
