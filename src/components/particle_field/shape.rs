//! Target layouts the field converges into.
//!
//! A [`ShapeStrategy`] decides where each particle settles and how it looks.
//! Every layout is expressed the same way: a particle settles at
//! `anchor + radius * (cos angle, sin angle)` in shape units, where one unit
//! is half the smaller viewport side. The ring keeps every anchor at the
//! center and varies the radius; the silhouette spreads anchors over a set
//! of dot clusters and uses the radius for scatter within a cluster.

use std::f64::consts::TAU;

use super::config::{EngineConfig, RingConfig, SilhouetteConfig};
use super::pointer::Attraction;
use super::sampling::{FieldRng, angle, chance, gaussian, uniform, weighted_index};
use super::theme::{Color, ParticlePalette};

/// Which layout the field converges into. Fixed for the life of a mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShapeMode {
	/// Gaussian ring behind the hero headline.
	#[default]
	Ring,
	/// Dot-cluster logo, shown as a standalone presentation.
	Silhouette,
}

/// Where a particle settles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
	/// Center the particle settles around, in shape units.
	pub anchor: (f64, f64),
	/// Initial angle around the anchor.
	pub angle: f64,
	/// Settled distance from the anchor, in shape units.
	pub radius: f64,
	/// Index into the cluster table, silhouette only.
	pub cluster: Option<usize>,
}

/// Static look of a particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Appearance {
	/// Opacity at full brightness.
	pub base_opacity: f64,
	/// Member of the glow subset.
	pub glow: bool,
	/// Fill color.
	pub color: Color,
}

/// Produces the target layout and look of each particle for one shape.
pub trait ShapeStrategy {
	/// The mode this strategy implements.
	fn mode(&self) -> ShapeMode;

	/// Number of particles this shape is drawn with.
	fn count(&self) -> usize;

	/// Samples where one particle settles.
	fn target(&self, rng: &mut FieldRng) -> Target;

	/// Samples the look of one particle.
	fn appearance(&self, rng: &mut FieldRng) -> Appearance;

	/// Pointer response of settled particles.
	fn attraction(&self) -> Attraction;

	/// Radial breathing amplitude, as a fraction of the settled radius.
	fn pulse_amplitude(&self) -> f64;
}

/// Builds the strategy for `mode` from the engine configuration.
pub fn strategy_for(mode: ShapeMode, config: &EngineConfig) -> Box<dyn ShapeStrategy> {
	match mode {
		ShapeMode::Ring => Box::new(RingShape::new(
			config.ring.clone(),
			config.motion.pulse_amplitude,
		)),
		ShapeMode::Silhouette => Box::new(SilhouetteShape::new(config.silhouette.clone())),
	}
}

/// Low-frequency harmonics `(k, amplitude, phase)` bent into the ring so it
/// reads as organic rather than a perfect circle.
const RING_HARMONICS: [(f64, f64, f64); 3] = [(2.0, 0.035, 0.0), (3.0, 0.025, 1.3), (5.0, 0.015, 2.1)];

/// Gaussian-distributed ring around the viewport center.
pub struct RingShape {
	config: RingConfig,
	pulse_amplitude: f64,
	palette: ParticlePalette,
}

impl RingShape {
	/// Ring drawn from the blue palette.
	pub fn new(config: RingConfig, pulse_amplitude: f64) -> Self {
		Self {
			config,
			pulse_amplitude,
			palette: ParticlePalette::ring(),
		}
	}

	/// Relative radius change the harmonics apply at angle `theta`.
	fn distortion(&self, theta: f64) -> f64 {
		self.config.distortion
			* RING_HARMONICS
				.iter()
				.map(|(k, amp, phase)| amp * (k * theta + phase).sin())
				.sum::<f64>()
	}
}

impl ShapeStrategy for RingShape {
	fn mode(&self) -> ShapeMode {
		ShapeMode::Ring
	}

	fn count(&self) -> usize {
		self.config.count
	}

	fn target(&self, rng: &mut FieldRng) -> Target {
		let theta = angle(rng);
		let base = gaussian(rng, self.config.center_radius, self.config.spread);
		let jitter = uniform(rng, -self.config.jitter, self.config.jitter);
		let radius = (base * (1.0 + self.distortion(theta) + jitter)).max(self.config.min_radius);
		Target {
			anchor: (0.0, 0.0),
			angle: theta,
			radius,
			cluster: None,
		}
	}

	/// Glow particles on the ring are a faint haze, dimmer than the rest.
	fn appearance(&self, rng: &mut FieldRng) -> Appearance {
		let glow = chance(rng, self.config.glow_chance);
		let base_opacity = if glow {
			0.04 + uniform(rng, 0.0, 0.06)
		} else {
			0.22 + uniform(rng, 0.0, 0.3)
		};
		let color = self.palette.get(weighted_index(rng, &self.palette.weights));
		Appearance {
			base_opacity,
			glow,
			color,
		}
	}

	fn attraction(&self) -> Attraction {
		Attraction::Nudge
	}

	fn pulse_amplitude(&self) -> f64 {
		self.pulse_amplitude
	}
}

/// One dot of the logo: center offset in shape units and a weight scaling
/// both its scatter radius and its share of particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cluster {
	/// Center in shape units.
	pub center: (f64, f64),
	/// Relative size of the dot.
	pub weight: f64,
}

impl Cluster {
	const fn new(x: f64, y: f64, weight: f64) -> Self {
		Self {
			center: (x, y),
			weight,
		}
	}

	/// Largest distance from the center a settled particle may scatter to.
	pub fn scatter_radius(&self, spread: f64) -> f64 {
		spread * self.weight
	}
}

/// Agent-network mark: a core dot, three inner satellites and a hexagon of
/// outer nodes. Negative y is up.
pub const LOGO_CLUSTERS: [Cluster; 10] = [
	Cluster::new(0.0, 0.0, 1.6),
	Cluster::new(0.0, -0.24, 0.55),
	Cluster::new(0.208, 0.12, 0.55),
	Cluster::new(-0.208, 0.12, 0.55),
	Cluster::new(0.0, -0.5, 1.0),
	Cluster::new(0.433, -0.25, 1.0),
	Cluster::new(0.433, 0.25, 1.0),
	Cluster::new(0.0, 0.5, 1.0),
	Cluster::new(-0.433, 0.25, 1.0),
	Cluster::new(-0.433, -0.25, 1.0),
];

/// Fixed dot-cluster pattern approximating the product logo.
pub struct SilhouetteShape {
	config: SilhouetteConfig,
	clusters: &'static [Cluster],
	/// Pick weights proportional to cluster area so density stays even.
	shares: Vec<f64>,
	palette: ParticlePalette,
}

impl SilhouetteShape {
	/// Silhouette of [`LOGO_CLUSTERS`].
	pub fn new(config: SilhouetteConfig) -> Self {
		Self::with_clusters(config, &LOGO_CLUSTERS)
	}

	/// Silhouette of an arbitrary cluster table.
	pub fn with_clusters(config: SilhouetteConfig, clusters: &'static [Cluster]) -> Self {
		let shares = clusters.iter().map(|c| c.weight * c.weight).collect();
		Self {
			config,
			clusters,
			shares,
			palette: ParticlePalette::silhouette(),
		}
	}

	/// The cluster table particles are spread over.
	pub fn clusters(&self) -> &'static [Cluster] {
		self.clusters
	}
}

impl ShapeStrategy for SilhouetteShape {
	fn mode(&self) -> ShapeMode {
		ShapeMode::Silhouette
	}

	fn count(&self) -> usize {
		self.config.count
	}

	fn target(&self, rng: &mut FieldRng) -> Target {
		let index = weighted_index(rng, &self.shares);
		let Some(cluster) = self.clusters.get(index) else {
			return Target {
				anchor: (0.0, 0.0),
				angle: angle(rng),
				radius: 0.0,
				cluster: None,
			};
		};
		// sqrt keeps the scatter uniform over the disc area.
		let radius = cluster.scatter_radius(self.config.cluster_spread) * uniform(rng, 0.0, 1.0).sqrt();
		Target {
			anchor: cluster.center,
			angle: uniform(rng, 0.0, TAU),
			radius,
			cluster: Some(index),
		}
	}

	/// Glow particles in the logo are highlights, brighter than the rest.
	fn appearance(&self, rng: &mut FieldRng) -> Appearance {
		let glow = chance(rng, self.config.glow_chance);
		let base_opacity = if glow {
			0.75 + uniform(rng, 0.0, 0.2)
		} else {
			0.35 + uniform(rng, 0.0, 0.3)
		};
		Appearance {
			base_opacity,
			glow,
			color: self.palette.get(0),
		}
	}

	fn attraction(&self) -> Attraction {
		Attraction::Magnetic
	}

	fn pulse_amplitude(&self) -> f64 {
		self.config.pulse_amplitude
	}
}
