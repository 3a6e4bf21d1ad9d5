//! Mapping from normalized simulation space to the drawing surface.
//!
//! # Coordinate Spaces
//!
//! - **Normalized**: `(0, 0)` is the top-left of the container and `(1, 1)`
//!   the bottom-right. Particle origins and the pointer live here.
//! - **Shape units**: offsets from the container center where one unit is
//!   half the smaller container side, so shapes stay circular at any aspect
//!   ratio.
//! - **CSS pixels**: what the canvas context draws in after its transform.
//! - **Backing pixels**: the canvas buffer, CSS pixels times the device
//!   pixel ratio.

/// Size and pixel density of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	/// Layout width in CSS pixels.
	pub css_width: f64,
	/// Layout height in CSS pixels.
	pub css_height: f64,
	/// Device pixel ratio after capping.
	pub dpr: f64,
}

impl Surface {
	/// Builds a surface, capping `raw_dpr` at `max_dpr`.
	///
	/// Non-finite or sub-1 ratios fall back to 1, and negative sizes to 0.
	pub fn new(css_width: f64, css_height: f64, raw_dpr: f64, max_dpr: f64) -> Self {
		let dpr = if raw_dpr.is_finite() && raw_dpr >= 1.0 {
			raw_dpr.min(max_dpr.max(1.0))
		} else {
			1.0
		};
		Self {
			css_width: css_width.max(0.0),
			css_height: css_height.max(0.0),
			dpr,
		}
	}

	/// `true` when either side is zero, e.g. a hidden container.
	pub fn is_empty(&self) -> bool {
		self.css_width <= 0.0 || self.css_height <= 0.0
	}

	/// Canvas buffer size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.css_width * self.dpr).round() as u32,
			(self.css_height * self.dpr).round() as u32,
		)
	}

	/// CSS pixels per shape unit.
	pub fn shape_scale(&self) -> f64 {
		self.css_width.min(self.css_height) / 2.0
	}

	/// Converts a shape-unit offset from center into normalized coordinates.
	pub fn shape_to_normalized(&self, (sx, sy): (f64, f64)) -> (f64, f64) {
		if self.is_empty() {
			return (0.5, 0.5);
		}
		let scale = self.shape_scale();
		(
			0.5 + sx * scale / self.css_width,
			0.5 + sy * scale / self.css_height,
		)
	}

	/// Normalized coordinates to CSS pixels.
	pub fn to_pixels(&self, (nx, ny): (f64, f64)) -> (f64, f64) {
		(nx * self.css_width, ny * self.css_height)
	}
}
