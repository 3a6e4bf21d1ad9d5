//! Simulation state of one mounted particle field.
//!
//! Created once when the component mounts, then advanced each frame by the
//! animation loop. Input listeners write the pointer target and surface
//! size; the loop reads them at the start of the next frame.

use rand::SeedableRng;

use super::config::EngineConfig;
use super::field::{Particle, generate};
use super::pointer::{Bounds, SmoothedPointer};
use super::sampling::FieldRng;
use super::shape::{ShapeMode, ShapeStrategy, strategy_for};
use super::simulation::{Dynamics, FrameInputs, ParticleFrame, advance_orbit, project};
use super::surface::Surface;

/// Frame timing in milliseconds, as reported by the frame callback.
#[derive(Clone, Copy, Debug, Default)]
struct Clock {
	start_ms: Option<f64>,
	last_ms: Option<f64>,
}

/// Particles, pointer, surface and clock of one mount.
pub struct FieldState {
	mode: ShapeMode,
	config: EngineConfig,
	dynamics: Dynamics,
	particles: Vec<Particle>,
	pointer: SmoothedPointer,
	surface: Surface,
	clock: Clock,
}

impl FieldState {
	/// Generates the particles for `mode` from `seed`.
	pub fn new(mode: ShapeMode, config: EngineConfig, surface: Surface, seed: u64) -> Self {
		let shape = strategy_for(mode, &config);
		Self::with_shape(&*shape, config, surface, seed)
	}

	/// Like [`FieldState::new`] with a caller-supplied shape.
	pub fn with_shape(shape: &dyn ShapeStrategy, config: EngineConfig, surface: Surface, seed: u64) -> Self {
		let mut rng = FieldRng::seed_from_u64(seed);
		let particles = generate(shape, &config.motion, &mut rng);
		Self {
			mode: shape.mode(),
			dynamics: Dynamics::new(shape, &config),
			config,
			particles,
			pointer: SmoothedPointer::default(),
			surface,
			clock: Clock::default(),
		}
	}

	/// Layout the particles converge into.
	pub fn mode(&self) -> ShapeMode {
		self.mode
	}

	/// The generated particles, in generation order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Surface frames are projected onto.
	pub fn surface(&self) -> Surface {
		self.surface
	}

	/// Pointer position, raw and smoothed.
	pub fn pointer(&self) -> SmoothedPointer {
		self.pointer
	}

	/// Swaps in a new surface. Particles and the clock are untouched; only
	/// the mapping to pixels changes.
	pub fn resize(&mut self, surface: Surface) {
		self.surface = surface;
	}

	/// Records a raw pointer position in viewport pixels, mapped into the
	/// surface whose on-screen rectangle is `bounds`. Positions outside the
	/// surface map outside [0, 1] and so pull nothing.
	pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, bounds: Bounds) {
		self.pointer.set_target_px(
			client_x - bounds.left,
			client_y - bounds.top,
			bounds.width,
			bounds.height,
		);
	}

	/// Advances the clock to `now_ms`, smooths the pointer and turns arrived
	/// particles. Returns the inputs for drawing this frame.
	///
	/// The first call starts the clock. Frame deltas are clamped so a
	/// backgrounded tab does not jump the orbit when it resumes.
	pub fn tick(&mut self, now_ms: f64) -> FrameInputs {
		let start = *self.clock.start_ms.get_or_insert(now_ms);
		let last = self.clock.last_ms.replace(now_ms).unwrap_or(now_ms);
		let elapsed = ((now_ms - start) / 1000.0).max(0.0);
		let dt = ((now_ms - last) / 1000.0).clamp(0.0, self.config.motion.max_frame_delta);

		self.pointer.follow(self.config.pointer.follow_speed, dt);
		if self.config.ambient.orbit {
			for p in &mut self.particles {
				advance_orbit(p, &self.dynamics, elapsed, dt);
			}
		}

		self.inputs(elapsed)
	}

	/// Frame inputs at `elapsed` seconds without advancing anything.
	pub fn inputs(&self, elapsed: f64) -> FrameInputs {
		FrameInputs {
			elapsed,
			pointer: self.pointer.current,
			surface: self.surface,
			ambient: self.config.ambient,
		}
	}

	/// Projects every particle for the frame described by `inputs`.
	pub fn frames<'a>(&'a self, inputs: &'a FrameInputs) -> impl Iterator<Item = ParticleFrame> + 'a {
		self.particles
			.iter()
			.map(move |p| project(p, &self.dynamics, inputs))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::config::AmbientToggles;

	fn small_config() -> EngineConfig {
		let mut config = EngineConfig::default();
		config.ring.count = 200;
		config.silhouette.count = 200;
		config
	}

	fn surface() -> Surface {
		Surface::new(1000.0, 500.0, 1.0, 2.0)
	}

	#[test]
	fn first_tick_starts_the_clock() {
		let mut state = FieldState::new(ShapeMode::Ring, small_config(), surface(), 1);
		assert_eq!(state.tick(5_000.0).elapsed, 0.0);
		assert!((state.tick(5_500.0).elapsed - 0.5).abs() < 1e-12);
	}

	#[test]
	fn same_seed_same_frames() {
		let a = FieldState::new(ShapeMode::Ring, small_config(), surface(), 9);
		let b = FieldState::new(ShapeMode::Ring, small_config(), surface(), 9);
		let inputs = a.inputs(2.5);
		assert!(a.frames(&inputs).eq(b.frames(&inputs)));
	}

	#[test]
	fn resize_keeps_particles() {
		let mut state = FieldState::new(ShapeMode::Silhouette, small_config(), surface(), 2);
		state.tick(0.0);
		state.tick(16.0);
		let before = state.particles().to_vec();
		state.resize(Surface::new(320.0, 640.0, 3.0, 2.0));
		assert_eq!(state.particles(), &before[..]);
		assert_eq!(state.surface().dpr, 2.0);
		assert!((state.tick(32.0).elapsed - 0.032).abs() < 1e-12);
	}

	fn full_page() -> Bounds {
		Bounds {
			left: 0.0,
			top: 0.0,
			width: 1000.0,
			height: 500.0,
		}
	}

	#[test]
	fn pointer_is_smoothed_between_frames() {
		let mut state = FieldState::new(ShapeMode::Ring, small_config(), surface(), 3);
		state.tick(0.0);
		state.pointer_moved(1000.0, 500.0, full_page());
		assert_eq!(state.pointer().target, (1.0, 1.0));
		let inputs = state.tick(16.0);
		assert!(inputs.pointer.0 > 0.5 && inputs.pointer.0 < 1.0);
	}

	#[test]
	fn pointer_is_relative_to_offset_container() {
		let mut state = FieldState::new(ShapeMode::Silhouette, small_config(), surface(), 3);
		let stage = Bounds {
			left: 408.0,
			top: 120.0,
			width: 1104.0,
			height: 448.0,
		};
		state.pointer_moved(1057.0, 344.0, stage);
		let (x, y) = state.pointer().target;
		assert!((x - 649.0 / 1104.0).abs() < 1e-12, "x {x}");
		assert!((y - 0.5).abs() < 1e-12, "y {y}");
	}

	#[test]
	fn pointer_outside_container_pulls_nothing() {
		let mut config = small_config();
		config.ambient = AmbientToggles {
			attraction: true,
			..AmbientToggles::NONE
		};
		let mut state = FieldState::new(ShapeMode::Silhouette, config, surface(), 8);
		let stage = Bounds {
			left: 0.0,
			top: 1800.0,
			width: 1000.0,
			height: 500.0,
		};
		state.pointer_moved(500.0, 250.0, stage);
		for i in 0..200 {
			state.tick(i as f64 * 16.0);
		}
		assert!(state.pointer().current.1 < -3.0);

		let pulled = state.inputs(20.0);
		let mut quiet = pulled;
		quiet.ambient.attraction = false;
		assert!(state.frames(&pulled).eq(state.frames(&quiet)));
	}

	#[test]
	fn long_pause_is_clamped() {
		let mut state = FieldState::new(ShapeMode::Ring, small_config(), surface(), 4);
		state.tick(0.0);
		state.tick(10_000.0);
		let angles: Vec<f64> = state.particles().iter().map(|p| p.angle).collect();
		state.tick(70_000.0);
		let max_turn = 0.03 * 0.016 * 0.1 * 60.0;
		for (p, before) in state.particles().iter().zip(angles) {
			assert!((p.angle - before).abs() <= max_turn + 1e-12);
		}
	}

	#[test]
	fn disabled_orbit_freezes_angles() {
		let mut config = small_config();
		config.ambient = AmbientToggles::NONE;
		let mut state = FieldState::new(ShapeMode::Ring, config, surface(), 5);
		let before: Vec<f64> = state.particles().iter().map(|p| p.angle).collect();
		for i in 0..600 {
			state.tick(i as f64 * 16.0);
		}
		let after: Vec<f64> = state.particles().iter().map(|p| p.angle).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn orbit_turns_settled_field() {
		let mut state = FieldState::new(ShapeMode::Ring, small_config(), surface(), 6);
		let before: Vec<f64> = state.particles().iter().map(|p| p.angle).collect();
		for i in 0..400 {
			state.tick(i as f64 * 16.0);
		}
		let moved = state
			.particles()
			.iter()
			.zip(before)
			.filter(|(p, b)| p.angle != *b)
			.count();
		assert!(moved > 150);
	}
}
