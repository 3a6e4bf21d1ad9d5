//! Per-frame particle math.
//!
//! [`project`] is a pure function of a particle and the frame inputs, so a
//! frame can be computed and checked without a canvas. The only mutation in
//! the simulation is [`advance_orbit`], which turns arrived particles.

use super::config::{AmbientToggles, EngineConfig};
use super::easing::{arrival_progress, ease_in_out_cubic, lerp};
use super::field::Particle;
use super::pointer::{Attraction, Pull, attraction_offset};
use super::shape::ShapeStrategy;
use super::surface::Surface;
use super::theme::Color;

/// Everything a frame depends on besides the particle itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
	/// Seconds since the field started animating.
	pub elapsed: f64,
	/// Smoothed pointer in normalized coordinates.
	pub pointer: (f64, f64),
	/// Current drawing surface.
	pub surface: Surface,
	/// Which ambient motions run this frame.
	pub ambient: AmbientToggles,
}

/// Screen-space result for one particle, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleFrame {
	/// Horizontal center.
	pub x: f64,
	/// Vertical center.
	pub y: f64,
	/// Disc radius.
	pub radius: f64,
	/// Final opacity, within `[0, base_opacity]`.
	pub opacity: f64,
	/// Fill color.
	pub color: Color,
}

/// Per-mount constants of the frame math, resolved from the shape and the
/// engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct Dynamics {
	/// Pointer response model of the shape.
	pub attraction: Attraction,
	/// Radius and strength of the pointer pull.
	pub pull: Pull,
	/// Breathing amplitude as a fraction of the settled radius.
	pub pulse_amplitude: f64,
	/// Breathing angular speed, radians per second.
	pub pulse_speed: f64,
	/// Seconds a particle takes to reach its target.
	pub gather_duration: f64,
	/// Orbit scale per reference frame.
	pub orbit_step: f64,
	/// Frame rate the orbit step was tuned at.
	pub reference_fps: f64,
	/// Lowest brightness of an arrived particle.
	pub twinkle_floor: f64,
	/// Brightness at the start of the gather.
	pub arrival_floor: f64,
}

impl Dynamics {
	/// Resolves the constants for `shape`.
	pub fn new(shape: &dyn ShapeStrategy, config: &EngineConfig) -> Self {
		let influence = match shape.attraction() {
			Attraction::Nudge => config.pointer.nudge_influence,
			Attraction::Magnetic => config.pointer.magnetic_influence,
		};
		Self {
			attraction: shape.attraction(),
			pull: Pull {
				radius: config.pointer.radius,
				influence,
			},
			pulse_amplitude: shape.pulse_amplitude(),
			pulse_speed: config.motion.pulse_speed,
			gather_duration: config.motion.gather_duration,
			orbit_step: config.motion.orbit_step,
			reference_fps: config.motion.reference_fps,
			twinkle_floor: config.motion.twinkle_floor,
			arrival_floor: config.motion.arrival_floor,
		}
	}

	/// Raw arrival progress of `p` at `elapsed`, in [0, 1].
	pub fn progress(&self, p: &Particle, elapsed: f64) -> f64 {
		arrival_progress(elapsed, p.arrival_delay, self.gather_duration)
	}

	/// Radius multiplier of the settled breathing motion.
	pub fn pulse(&self, p: &Particle, elapsed: f64) -> f64 {
		1.0 + self.pulse_amplitude * (elapsed * self.pulse_speed + p.twinkle_phase).sin()
	}

	/// Brightness multiplier in [0, 1].
	///
	/// While converging, brightness ramps from `arrival_floor` to full with
	/// the eased progress. Once arrived it twinkles, never dropping below
	/// `twinkle_floor`.
	pub fn brightness(&self, p: &Particle, eased: f64, arrived: bool, elapsed: f64) -> f64 {
		let b = if arrived {
			let twinkle = 0.5 + 0.5 * (elapsed * p.twinkle_speed + p.twinkle_phase).sin();
			lerp(self.twinkle_floor, 1.0, twinkle)
		} else {
			lerp(self.arrival_floor, 1.0, eased)
		};
		b.clamp(0.0, 1.0)
	}
}

/// Where `p` rests at its current angle, in normalized coordinates.
/// `pulse` scales the radius around the anchor.
pub fn settled_position(p: &Particle, pulse: f64, surface: &Surface) -> (f64, f64) {
	let r = p.target_radius * pulse;
	surface.shape_to_normalized((
		p.anchor.0 + r * p.angle.cos(),
		p.anchor.1 + r * p.angle.sin(),
	))
}

/// Computes where and how brightly `p` is drawn this frame.
pub fn project(p: &Particle, dynamics: &Dynamics, inputs: &FrameInputs) -> ParticleFrame {
	let progress = dynamics.progress(p, inputs.elapsed);
	let eased = ease_in_out_cubic(progress);
	let arrived = progress >= 1.0;

	let pulse = if arrived && inputs.ambient.pulsation {
		dynamics.pulse(p, inputs.elapsed)
	} else {
		1.0
	};
	let settled = settled_position(p, pulse, &inputs.surface);
	let base = (
		lerp(p.origin.0, settled.0, eased),
		lerp(p.origin.1, settled.1, eased),
	);

	let (ox, oy) = if inputs.ambient.attraction {
		attraction_offset(dynamics.attraction, base, inputs.pointer, dynamics.pull, eased)
	} else {
		(0.0, 0.0)
	};
	let (x, y) = inputs.surface.to_pixels((base.0 + ox, base.1 + oy));

	ParticleFrame {
		x,
		y,
		radius: p.size,
		opacity: p.base_opacity * dynamics.brightness(p, eased, arrived, inputs.elapsed),
		color: p.color,
	}
}

/// Turns an arrived particle by its orbit speed.
///
/// The orbit step was tuned per frame at `reference_fps`; scaling it by the
/// real frame delta keeps the angular speed constant at any refresh rate.
pub fn advance_orbit(p: &mut Particle, dynamics: &Dynamics, elapsed: f64, dt: f64) {
	if dynamics.progress(p, elapsed) < 1.0 {
		return;
	}
	p.angle += p.orbit_speed * dynamics.orbit_step * dt * dynamics.reference_fps;
}
