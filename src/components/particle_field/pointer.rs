//! Pointer tracking and the pointer-proximity pull on settled particles.

use super::easing::ease_out_cubic;

/// Distances below this are treated as zero to keep directions finite.
const DIST_EPSILON: f64 = 1e-3;

/// Pointer position in normalized viewport coordinates, eased toward the
/// latest raw sample each frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedPointer {
	/// Smoothed position used for drawing.
	pub current: (f64, f64),
	/// Latest raw sample.
	pub target: (f64, f64),
}

impl Default for SmoothedPointer {
	/// Both positions start at the viewport center.
	fn default() -> Self {
		Self {
			current: (0.5, 0.5),
			target: (0.5, 0.5),
		}
	}
}

impl SmoothedPointer {
	/// Records a raw pointer sample in pixels. Samples taken against a
	/// degenerate viewport are dropped.
	pub fn set_target_px(&mut self, x: f64, y: f64, viewport_width: f64, viewport_height: f64) {
		if viewport_width <= 0.0 || viewport_height <= 0.0 {
			return;
		}
		self.target = (x / viewport_width, y / viewport_height);
	}

	/// Moves `current` toward `target`.
	///
	/// Exponential smoothing: value += (target - value) * (1 - e^(-speed * dt)),
	/// so the same wall-clock time covers the same share of the gap at any
	/// frame rate.
	pub fn follow(&mut self, speed: f64, dt: f64) {
		let factor = 1.0 - (-speed * dt.max(0.0)).exp();
		self.current.0 += (self.target.0 - self.current.0) * factor;
		self.current.1 += (self.target.1 - self.current.1) * factor;
	}
}

/// On-screen rectangle of the drawing surface, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Left edge.
	pub left: f64,
	/// Top edge.
	pub top: f64,
	/// Rendered width.
	pub width: f64,
	/// Rendered height.
	pub height: f64,
}

/// How settled particles respond to the pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attraction {
	/// Gentle pull with ease-out-cubic falloff, only for arrived particles.
	Nudge,
	/// Stronger pull with quadratic falloff, faded in with arrival progress.
	Magnetic,
}

/// Pull parameters shared by both attraction models.
#[derive(Clone, Copy, Debug)]
pub struct Pull {
	/// Falloff radius in normalized units. No effect at or beyond it.
	pub radius: f64,
	/// Offset applied at zero distance.
	pub influence: f64,
}

/// Offset to add to a particle at `base` for a pointer at `pointer`.
///
/// `gate` is the particle's eased arrival progress in [0, 1]. The nudge
/// only acts once it reaches 1; the magnetic pull scales with it. The
/// offset points toward the pointer and is capped at the remaining
/// distance, so a particle can land on the pointer but never pass it.
pub fn attraction_offset(
	model: Attraction,
	base: (f64, f64),
	pointer: (f64, f64),
	pull: Pull,
	gate: f64,
) -> (f64, f64) {
	let weight = match model {
		Attraction::Nudge if gate >= 1.0 => 1.0,
		Attraction::Nudge => 0.0,
		Attraction::Magnetic => gate.clamp(0.0, 1.0),
	};
	if weight <= 0.0 || pull.radius <= 0.0 {
		return (0.0, 0.0);
	}

	let (dx, dy) = (pointer.0 - base.0, pointer.1 - base.1);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist >= pull.radius {
		return (0.0, 0.0);
	}

	let closeness = 1.0 - dist / pull.radius;
	let falloff = match model {
		Attraction::Nudge => ease_out_cubic(closeness),
		Attraction::Magnetic => closeness * closeness,
	};
	let strength = (falloff * pull.influence * weight).min(dist);
	let dist = dist.max(DIST_EPSILON);
	(dx / dist * strength, dy / dist * strength)
}

#[cfg(test)]
mod tests {
	use super::*;

	const PULL: Pull = Pull {
		radius: 0.16,
		influence: 0.01,
	};

	fn magnitude((x, y): (f64, f64)) -> f64 {
		(x * x + y * y).sqrt()
	}

	#[test]
	fn follow_converges_toward_target() {
		let mut pointer = SmoothedPointer::default();
		pointer.set_target_px(800.0, 0.0, 800.0, 600.0);
		assert_eq!(pointer.target, (1.0, 0.0));
		pointer.follow(5.0, 1.0 / 60.0);
		assert!(pointer.current.0 > 0.5 && pointer.current.0 < 1.0);
		for _ in 0..600 {
			pointer.follow(5.0, 1.0 / 60.0);
		}
		assert!((pointer.current.0 - 1.0).abs() < 1e-6);
		assert!(pointer.current.1.abs() < 1e-6);
	}

	#[test]
	fn follow_is_frame_rate_independent() {
		let mut fast = SmoothedPointer::default();
		let mut slow = SmoothedPointer::default();
		fast.target = (1.0, 1.0);
		slow.target = (1.0, 1.0);
		for _ in 0..120 {
			fast.follow(5.0, 1.0 / 120.0);
		}
		for _ in 0..30 {
			slow.follow(5.0, 1.0 / 30.0);
		}
		assert!((fast.current.0 - slow.current.0).abs() < 1e-9);
	}

	#[test]
	fn degenerate_viewport_is_ignored() {
		let mut pointer = SmoothedPointer::default();
		pointer.set_target_px(10.0, 10.0, 0.0, 600.0);
		assert_eq!(pointer.target, (0.5, 0.5));
	}

	#[test]
	fn no_effect_beyond_radius() {
		for model in [Attraction::Nudge, Attraction::Magnetic] {
			for d in [0.16, 0.2, 1.0] {
				let offset = attraction_offset(model, (0.5, 0.5), (0.5 + d, 0.5), PULL, 1.0);
				assert_eq!(offset, (0.0, 0.0), "{model:?} at {d}");
			}
		}
	}

	#[test]
	fn pull_grows_as_distance_shrinks() {
		for model in [Attraction::Nudge, Attraction::Magnetic] {
			let mut prev = 0.0;
			for step in (2..16).rev() {
				let d = step as f64 * 0.01;
				let offset = attraction_offset(model, (0.5, 0.5), (0.5 + d, 0.5), PULL, 1.0);
				let m = magnitude(offset);
				assert!(m >= prev, "{model:?} weaker at {d}");
				assert!(offset.0 >= 0.0, "points toward pointer");
				prev = m;
			}
			assert!(prev > 0.0);
		}
	}

	#[test]
	fn never_passes_the_pointer() {
		let strong = Pull {
			radius: 0.16,
			influence: 0.035,
		};
		for model in [Attraction::Nudge, Attraction::Magnetic] {
			for pull in [PULL, strong] {
				for step in 1..32 {
					let d = step as f64 * 0.005;
					let offset = attraction_offset(model, (0.5, 0.5), (0.5 + d, 0.5), pull, 1.0);
					assert!(offset.0 >= 0.0 && offset.0 <= d + 1e-12, "{model:?} passes pointer at {d}");
					assert_eq!(offset.1, 0.0);
				}
			}
		}
		let landed = attraction_offset(Attraction::Magnetic, (0.5, 0.5), (0.505, 0.5), strong, 1.0);
		assert!((landed.0 - 0.005).abs() < 1e-12);
	}

	#[test]
	fn zero_distance_is_finite() {
		let offset = attraction_offset(Attraction::Magnetic, (0.5, 0.5), (0.5, 0.5), PULL, 1.0);
		assert_eq!(offset, (0.0, 0.0));
	}

	#[test]
	fn gated_by_arrival() {
		let near = (0.55, 0.5);
		assert_eq!(
			attraction_offset(Attraction::Nudge, (0.5, 0.5), near, PULL, 0.99),
			(0.0, 0.0)
		);
		assert_eq!(
			attraction_offset(Attraction::Magnetic, (0.5, 0.5), near, PULL, 0.0),
			(0.0, 0.0)
		);
		let half = attraction_offset(Attraction::Magnetic, (0.5, 0.5), near, PULL, 0.5);
		let full = attraction_offset(Attraction::Magnetic, (0.5, 0.5), near, PULL, 1.0);
		assert!((half.0 * 2.0 - full.0).abs() < 1e-12);
	}
}
