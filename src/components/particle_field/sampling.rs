//! Random sampling primitives used by particle generation.
//!
//! Everything draws from a caller-supplied [`FieldRng`] so a fixed seed
//! reproduces the same field.

use std::f64::consts::TAU;

use rand::Rng;
use rand::rngs::SmallRng;

/// Random source for field generation.
pub type FieldRng = SmallRng;

/// Uniform float in `[lo, hi)`. Returns `lo` for an empty range.
pub fn uniform(rng: &mut FieldRng, lo: f64, hi: f64) -> f64 {
	if hi <= lo {
		return lo;
	}
	rng.gen_range(lo..hi)
}

/// Uniform angle in `[0, 2π)`.
pub fn angle(rng: &mut FieldRng) -> f64 {
	uniform(rng, 0.0, TAU)
}

/// `true` with probability `p` (clamped to [0, 1]).
pub fn chance(rng: &mut FieldRng, p: f64) -> bool {
	rng.gen_bool(p.clamp(0.0, 1.0))
}

/// Normal sample via the Box–Muller transform.
pub fn gaussian(rng: &mut FieldRng, mean: f64, sigma: f64) -> f64 {
	let u1 = uniform(rng, 0.0, 1.0).max(1e-10);
	let u2 = uniform(rng, 0.0, 1.0);
	mean + sigma * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Picks an index proportionally to `weights`.
///
/// Non-positive weights are never picked unless every weight is
/// non-positive, in which case index 0 is returned.
pub fn weighted_index(rng: &mut FieldRng, weights: &[f64]) -> usize {
	let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
	if total <= 0.0 {
		return 0;
	}
	let mut pick = uniform(rng, 0.0, total);
	let mut last = 0;
	for (i, w) in weights.iter().enumerate() {
		if *w <= 0.0 {
			continue;
		}
		if pick < *w {
			return i;
		}
		pick -= *w;
		last = i;
	}
	last
}

/// Start position just outside one of the four viewport edges, in
/// normalized viewport units.
///
/// Along the chosen edge the position spans slightly past the corners;
/// across it the particle sits between 0.15 and 0.65 beyond the edge.
pub fn edge_origin(rng: &mut FieldRng) -> (f64, f64) {
	let along = uniform(rng, -0.1, 1.1);
	let beyond = 0.15 + uniform(rng, 0.0, 0.5);
	match rng.gen_range(0..4) {
		0 => (along, -beyond),
		1 => (along, 1.0 + beyond),
		2 => (-beyond, along),
		_ => (1.0 + beyond, along),
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;

	fn rng() -> FieldRng {
		FieldRng::seed_from_u64(7)
	}

	#[test]
	fn origins_start_off_screen() {
		let mut rng = rng();
		let mut edges = [false; 4];
		for _ in 0..2000 {
			let (x, y) = edge_origin(&mut rng);
			let off_x = x <= -0.15 || x >= 1.15;
			let off_y = y <= -0.15 || y >= 1.15;
			assert!(off_x || off_y, "({x}, {y}) is on screen");
			assert!((-0.65..=1.65).contains(&x) && (-0.65..=1.65).contains(&y));
			edges[match (x < 0.0 && off_x, x > 1.0 && off_x, y < 0.0 && off_y) {
				(true, _, _) => 0,
				(_, true, _) => 1,
				(_, _, true) => 2,
				_ => 3,
			}] = true;
		}
		assert!(edges.iter().all(|seen| *seen), "every edge is used");
	}

	#[test]
	fn gaussian_matches_requested_moments() {
		let mut rng = rng();
		let n = 20_000;
		let samples: Vec<f64> = (0..n).map(|_| gaussian(&mut rng, 0.62, 0.18)).collect();
		let mean = samples.iter().sum::<f64>() / n as f64;
		let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n as f64;
		assert!((mean - 0.62).abs() < 0.01, "mean {mean}");
		assert!((var.sqrt() - 0.18).abs() < 0.01, "sigma {}", var.sqrt());
	}

	#[test]
	fn weighted_index_respects_weights() {
		let mut rng = rng();
		let mut counts = [0usize; 3];
		for _ in 0..10_000 {
			counts[weighted_index(&mut rng, &[0.5, 0.0, 0.5])] += 1;
		}
		assert_eq!(counts[1], 0);
		assert!(counts[0] > 4000 && counts[2] > 4000);
	}

	#[test]
	fn weighted_index_degenerate_weights() {
		let mut rng = rng();
		assert_eq!(weighted_index(&mut rng, &[]), 0);
		assert_eq!(weighted_index(&mut rng, &[0.0, -1.0]), 0);
	}

	#[test]
	fn uniform_empty_range_returns_lower_bound() {
		let mut rng = rng();
		assert_eq!(uniform(&mut rng, 2.0, 2.0), 2.0);
	}
}
