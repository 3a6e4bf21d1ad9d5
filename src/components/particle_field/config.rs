//! Tunable parameters of the particle engine.
//!
//! Every field has a default reproducing the shipped look, and every struct
//! deserializes with `#[serde(default)]` so a page can override a single
//! value from JSON without restating the rest.

use serde::Deserialize;
use thiserror::Error;

use super::opacity::FadeCurve;

/// Rejected configuration values.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
	#[error("{field} must be greater than zero (got {value})")]
	NotPositive { field: &'static str, value: f64 },
	#[error("{field} must not be negative (got {value})")]
	Negative { field: &'static str, value: f64 },
	#[error("{field} must be within [0, 1] (got {value})")]
	OutOfUnitRange { field: &'static str, value: f64 },
	#[error("{0} particle count must be greater than zero")]
	EmptyField(&'static str),
	#[error("fade curve needs at least one stop with inputs in ascending order")]
	InvalidFadeCurve,
}

/// Gaussian ring layout.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RingConfig {
	/// Number of particles.
	pub count: usize,
	/// Mean settled radius in shape units.
	pub center_radius: f64,
	/// Standard deviation of the settled radius (ring thickness).
	pub spread: f64,
	/// Floor applied to sampled radii.
	pub min_radius: f64,
	/// Scales the fixed angular harmonics that make the ring look organic.
	pub distortion: f64,
	/// Amplitude of the per-particle radial jitter, as a fraction of radius.
	pub jitter: f64,
	/// Share of dim "glow" particles.
	pub glow_chance: f64,
}

impl Default for RingConfig {
	fn default() -> Self {
		Self {
			count: 7600,
			center_radius: 0.62,
			spread: 0.18,
			min_radius: 0.08,
			distortion: 1.0,
			jitter: 0.02,
			glow_chance: 0.05,
		}
	}
}

/// Dot-cluster logo layout.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SilhouetteConfig {
	/// Number of particles.
	pub count: usize,
	/// Scatter radius of a weight-1.0 cluster, in shape units.
	pub cluster_spread: f64,
	/// Share of bright "glow" particles.
	pub glow_chance: f64,
	/// Radial breathing amplitude of the local cluster orbit.
	pub pulse_amplitude: f64,
}

impl Default for SilhouetteConfig {
	fn default() -> Self {
		Self {
			count: 2400,
			cluster_spread: 0.09,
			glow_chance: 0.08,
			pulse_amplitude: 0.08,
		}
	}
}

/// Convergence and ambient motion timing.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
	/// Seconds one particle takes to travel from origin to target.
	pub gather_duration: f64,
	/// Largest arrival delay, as a fraction of `gather_duration`.
	pub max_delay_fraction: f64,
	/// Angle advance per unit of orbit speed per reference frame.
	pub orbit_step: f64,
	/// Frame rate the per-frame constants were tuned at.
	pub reference_fps: f64,
	/// Radial breathing amplitude of the ring, as a fraction of radius.
	pub pulse_amplitude: f64,
	/// Angular frequency of the breathing, radians per second.
	pub pulse_speed: f64,
	/// Lowest twinkle brightness once arrived.
	pub twinkle_floor: f64,
	/// Brightness at the very start of convergence.
	pub arrival_floor: f64,
	/// Frame deltas above this many seconds are clamped (tab switches).
	pub max_frame_delta: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			gather_duration: 4.0,
			max_delay_fraction: 0.5,
			orbit_step: 0.016,
			reference_fps: 60.0,
			pulse_amplitude: 0.015,
			pulse_speed: 0.8,
			twinkle_floor: 0.15,
			arrival_floor: 0.3,
			max_frame_delta: 0.1,
		}
	}
}

/// Pointer smoothing and attraction.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
	/// Exponential follow rate per second. About 8% per frame at 60 Hz.
	pub follow_speed: f64,
	/// Falloff radius in normalized viewport units.
	pub radius: f64,
	/// Peak offset of the ring nudge.
	pub nudge_influence: f64,
	/// Peak offset of the silhouette magnetic pull.
	pub magnetic_influence: f64,
}

impl Default for PointerConfig {
	fn default() -> Self {
		Self {
			follow_speed: 5.0,
			radius: 0.16,
			nudge_influence: 0.01,
			magnetic_influence: 0.035,
		}
	}
}

/// Drawing surface resolution.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
	/// Upper bound on the backing-store scale.
	pub max_device_pixel_ratio: f64,
}

impl Default for SurfaceConfig {
	fn default() -> Self {
		Self {
			max_device_pixel_ratio: 2.0,
		}
	}
}

/// Switches for post-arrival ambient motion. Turning all of them off makes
/// settled particles sit exactly on their target positions.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AmbientToggles {
	/// Settled particles circle their anchor.
	pub orbit: bool,
	/// Settled radii breathe in and out.
	pub pulsation: bool,
	/// Settled particles lean toward the pointer.
	pub attraction: bool,
}

impl AmbientToggles {
	/// Every ambient motion off.
	pub const NONE: AmbientToggles = AmbientToggles {
		orbit: false,
		pulsation: false,
		attraction: false,
	};
}

impl Default for AmbientToggles {
	fn default() -> Self {
		Self {
			orbit: true,
			pulsation: true,
			attraction: true,
		}
	}
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Hero ring layout.
	pub ring: RingConfig,
	/// Logo layout.
	pub silhouette: SilhouetteConfig,
	/// Timing shared by both layouts.
	pub motion: MotionConfig,
	/// Pointer smoothing and pull.
	pub pointer: PointerConfig,
	/// Canvas sizing.
	pub surface: SurfaceConfig,
	/// Which ambient motions run.
	pub ambient: AmbientToggles,
	/// Scroll progress to layer opacity, ring mode only.
	pub fade: FadeCurve,
	/// Fixed generation seed. Random per mount when absent.
	pub seed: Option<u64>,
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
	if value > 0.0 {
		Ok(())
	} else {
		Err(ConfigError::NotPositive { field, value })
	}
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
	if value >= 0.0 {
		Ok(())
	} else {
		Err(ConfigError::Negative { field, value })
	}
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
	if (0.0..=1.0).contains(&value) {
		Ok(())
	} else {
		Err(ConfigError::OutOfUnitRange { field, value })
	}
}

impl EngineConfig {
	/// Parses a JSON override document on top of the defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Checks every value is usable; the first bad field is reported.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.ring.count == 0 {
			return Err(ConfigError::EmptyField("ring"));
		}
		if self.silhouette.count == 0 {
			return Err(ConfigError::EmptyField("silhouette"));
		}
		positive("ring.center_radius", self.ring.center_radius)?;
		non_negative("ring.spread", self.ring.spread)?;
		positive("ring.min_radius", self.ring.min_radius)?;
		non_negative("ring.distortion", self.ring.distortion)?;
		non_negative("ring.jitter", self.ring.jitter)?;
		unit("ring.glow_chance", self.ring.glow_chance)?;
		positive("silhouette.cluster_spread", self.silhouette.cluster_spread)?;
		unit("silhouette.glow_chance", self.silhouette.glow_chance)?;
		non_negative("silhouette.pulse_amplitude", self.silhouette.pulse_amplitude)?;
		positive("motion.gather_duration", self.motion.gather_duration)?;
		non_negative("motion.max_delay_fraction", self.motion.max_delay_fraction)?;
		non_negative("motion.orbit_step", self.motion.orbit_step)?;
		positive("motion.reference_fps", self.motion.reference_fps)?;
		non_negative("motion.pulse_amplitude", self.motion.pulse_amplitude)?;
		unit("motion.twinkle_floor", self.motion.twinkle_floor)?;
		unit("motion.arrival_floor", self.motion.arrival_floor)?;
		positive("motion.max_frame_delta", self.motion.max_frame_delta)?;
		non_negative("pointer.follow_speed", self.pointer.follow_speed)?;
		positive("pointer.radius", self.pointer.radius)?;
		non_negative("pointer.nudge_influence", self.pointer.nudge_influence)?;
		non_negative("pointer.magnetic_influence", self.pointer.magnetic_influence)?;
		positive(
			"surface.max_device_pixel_ratio",
			self.surface.max_device_pixel_ratio,
		)?;
		if !self.fade.is_valid() {
			return Err(ConfigError::InvalidFadeCurve);
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert_eq!(EngineConfig::default().validate(), Ok(()));
	}

	#[test]
	fn partial_json_keeps_other_defaults() {
		let config = EngineConfig::from_json(
			r#"{ "ring": { "count": 500 }, "ambient": { "orbit": false }, "seed": 42 }"#,
		)
		.unwrap();
		assert_eq!(config.ring.count, 500);
		assert_eq!(config.ring.center_radius, 0.62);
		assert!(!config.ambient.orbit);
		assert!(config.ambient.attraction);
		assert_eq!(config.seed, Some(42));
		assert_eq!(config.motion.gather_duration, 4.0);
	}

	#[test]
	fn fade_curve_parses_from_pairs() {
		let config = EngineConfig::from_json(r#"{ "fade": [[0.0, 1.0], [0.5, 0.0]] }"#).unwrap();
		assert_eq!(config.fade.sample(0.25), 0.5);
	}

	#[test]
	fn rejects_non_positive_duration() {
		let mut config = EngineConfig::default();
		config.motion.gather_duration = 0.0;
		assert_eq!(
			config.validate(),
			Err(ConfigError::NotPositive {
				field: "motion.gather_duration",
				value: 0.0
			})
		);
	}

	#[test]
	fn rejects_empty_field() {
		let mut config = EngineConfig::default();
		config.silhouette.count = 0;
		assert_eq!(config.validate(), Err(ConfigError::EmptyField("silhouette")));
	}

	#[test]
	fn rejects_unsorted_fade_curve() {
		let config = EngineConfig::from_json(r#"{ "fade": [[0.5, 1.0], [0.1, 0.0]] }"#).unwrap();
		assert_eq!(config.validate(), Err(ConfigError::InvalidFadeCurve));
	}

	#[test]
	fn rejects_fade_curve_outside_unit_range() {
		let config = EngineConfig::from_json(r#"{ "fade": [[-1.0, 1.0], [2.0, 0.0]] }"#).unwrap();
		assert_eq!(config.validate(), Err(ConfigError::InvalidFadeCurve));
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(EngineConfig::from_json("{ ring: ").is_err());
	}
}
