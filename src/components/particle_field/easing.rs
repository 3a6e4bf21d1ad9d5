//! Easing curves and interpolation helpers shared by the simulation.

/// Cubic ease that accelerates through the first half and decelerates
/// through the second.
pub fn ease_in_out_cubic(t: f64) -> f64 {
	if t < 0.5 {
		4.0 * t * t * t
	} else {
		1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
	}
}

/// Fast start, slow finish.
pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Linear interpolation from `a` at `t = 0` to `b` at `t = 1`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
	a + (b - a) * t
}

/// Raw arrival progress of a particle, clamped to [0, 1].
///
/// A non-positive `duration` snaps the particle to arrived as soon as its
/// delay has elapsed.
pub fn arrival_progress(elapsed: f64, delay: f64, duration: f64) -> f64 {
	if duration <= 0.0 {
		return if elapsed >= delay { 1.0 } else { 0.0 };
	}
	((elapsed - delay) / duration).clamp(0.0, 1.0)
}
