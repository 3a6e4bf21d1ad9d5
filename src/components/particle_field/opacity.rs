//! Scroll-driven opacity of the whole particle layer.

use serde::Deserialize;

use super::easing::lerp;
use super::shape::ShapeMode;

/// Piecewise-linear map from scroll progress to opacity.
///
/// Stops are `(input, output)` pairs with ascending inputs. Inputs before the
/// first stop or after the last one take the nearest stop's output.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FadeCurve {
	stops: Vec<(f64, f64)>,
}

impl Default for FadeCurve {
	/// Fully visible for the first 5% of the page, gone by 12%.
	fn default() -> Self {
		Self {
			stops: vec![(0.0, 1.0), (0.05, 1.0), (0.12, 0.0)],
		}
	}
}

impl FadeCurve {
	/// Curve through `stops`; see [`FadeCurve::is_valid`].
	pub fn new(stops: Vec<(f64, f64)>) -> Self {
		Self { stops }
	}

	/// A usable curve has at least one stop, inputs within [0, 1] in
	/// ascending order, and finite outputs.
	pub fn is_valid(&self) -> bool {
		!self.stops.is_empty()
			&& self
				.stops
				.iter()
				.all(|(x, y)| (0.0..=1.0).contains(x) && y.is_finite())
			&& self.stops.windows(2).all(|w| w[0].0 <= w[1].0)
	}

	/// Evaluates the curve at `x`. An empty curve is fully opaque.
	pub fn sample(&self, x: f64) -> f64 {
		let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
			return 1.0;
		};
		if x <= first.0 {
			return first.1;
		}
		if x >= last.0 {
			return last.1;
		}
		for w in self.stops.windows(2) {
			let ((x0, y0), (x1, y1)) = (w[0], w[1]);
			if x <= x1 {
				let span = x1 - x0;
				if span <= f64::EPSILON {
					return y1;
				}
				return lerp(y0, y1, (x - x0) / span);
			}
		}
		last.1
	}
}

/// Opacity of the particle layer for the current scroll position.
///
/// The logo silhouette is a standalone presentation and stays fully visible
/// regardless of scroll.
pub fn layer_opacity(mode: ShapeMode, curve: &FadeCurve, scroll_progress: f64) -> f64 {
	match mode {
		ShapeMode::Silhouette => 1.0,
		ShapeMode::Ring => {
			let progress = if scroll_progress.is_nan() {
				0.0
			} else {
				scroll_progress.clamp(0.0, 1.0)
			};
			curve.sample(progress).clamp(0.0, 1.0)
		}
	}
}
