//! Particle descriptors and their one-shot generation.

use super::config::MotionConfig;
use super::sampling::{FieldRng, edge_origin, uniform};
use super::shape::ShapeStrategy;
use super::theme::Color;

/// One simulated point.
///
/// Everything except `angle` is fixed at generation. `angle` advances once
/// the particle has arrived, which is what makes the settled field orbit.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Start position in normalized viewport units, off screen.
	pub origin: (f64, f64),
	/// Center the particle settles around, in shape units.
	pub anchor: (f64, f64),
	/// Logo cluster this particle belongs to, if any.
	pub cluster: Option<usize>,
	/// Current angle around `anchor`, radians.
	pub angle: f64,
	/// Settled distance from `anchor`, in shape units.
	pub target_radius: f64,
	/// Signed angular velocity, radians per reference frame per orbit step.
	pub orbit_speed: f64,
	/// Disc radius in CSS pixels.
	pub size: f64,
	/// Opacity at full brightness.
	pub base_opacity: f64,
	/// Member of the shape's glow subset.
	pub glow: bool,
	/// Twinkle angular speed, radians per second.
	pub twinkle_speed: f64,
	/// Phase offset of twinkle and pulse.
	pub twinkle_phase: f64,
	/// Seconds after start before the particle begins to move.
	pub arrival_delay: f64,
	/// Fill color.
	pub color: Color,
}

/// Builds the particle array for `shape`.
///
/// The length is always `shape.count()`. Target layout and look come from
/// the shape; size, twinkle, orbit and arrival timing are shared.
pub fn generate(shape: &dyn ShapeStrategy, motion: &MotionConfig, rng: &mut FieldRng) -> Vec<Particle> {
	let max_delay = motion.max_delay_fraction.max(0.0) * motion.gather_duration.max(0.0);
	(0..shape.count())
		.map(|_| {
			let origin = edge_origin(rng);
			let target = shape.target(rng);
			let look = shape.appearance(rng);
			Particle {
				origin,
				anchor: target.anchor,
				cluster: target.cluster,
				angle: target.angle,
				target_radius: target.radius,
				orbit_speed: uniform(rng, -0.03, 0.03),
				size: 0.5 + uniform(rng, 0.0, 0.8),
				base_opacity: look.base_opacity,
				glow: look.glow,
				twinkle_speed: 0.5 + uniform(rng, 0.0, 1.5),
				twinkle_phase: uniform(rng, 0.0, std::f64::consts::TAU),
				arrival_delay: uniform(rng, 0.0, 1.0) * max_delay,
				color: look.color,
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;
	use crate::components::particle_field::config::{EngineConfig, RingConfig};
	use crate::components::particle_field::shape::{RingShape, ShapeMode, strategy_for};

	#[test]
	fn count_follows_shape() {
		let mut config = EngineConfig::default();
		config.ring.count = 321;
		config.silhouette.count = 123;
		let mut rng = FieldRng::seed_from_u64(1);
		let ring = generate(&*strategy_for(ShapeMode::Ring, &config), &config.motion, &mut rng);
		let logo = generate(&*strategy_for(ShapeMode::Silhouette, &config), &config.motion, &mut rng);
		assert_eq!(ring.len(), 321);
		assert_eq!(logo.len(), 123);
		assert!(logo.iter().all(|p| p.cluster.is_some()));
	}

	#[test]
	fn same_seed_same_field() {
		let config = EngineConfig::default();
		let shape = strategy_for(ShapeMode::Ring, &config);
		let a = generate(&*shape, &config.motion, &mut FieldRng::seed_from_u64(99));
		let b = generate(&*shape, &config.motion, &mut FieldRng::seed_from_u64(99));
		assert_eq!(a, b);
		let c = generate(&*shape, &config.motion, &mut FieldRng::seed_from_u64(100));
		assert_ne!(a, c);
	}

	#[test]
	fn per_particle_parameters_in_range() {
		let motion = MotionConfig::default();
		let shape = RingShape::new(
			RingConfig {
				count: 3000,
				..RingConfig::default()
			},
			0.0,
		);
		let max_delay = motion.max_delay_fraction * motion.gather_duration;
		let particles = generate(&shape, &motion, &mut FieldRng::seed_from_u64(5));
		for p in &particles {
			assert!((0.5..1.3).contains(&p.size));
			assert!((0.5..2.0).contains(&p.twinkle_speed));
			assert!(p.orbit_speed.abs() <= 0.03);
			assert!((0.0..max_delay).contains(&p.arrival_delay));
			assert!(p.base_opacity > 0.0 && p.base_opacity <= 1.0);
		}
		let glow = particles.iter().filter(|p| p.glow).count();
		assert!(glow > 0 && glow < particles.len() / 10);
	}
}
