//! Particle colors and palettes.

/// RGB color of a particle. Opacity is computed per frame, not stored here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Pure white.
	pub const WHITE: Color = Color::rgb(255, 255, 255);

	/// Color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Hex form for canvas fill styles, e.g. `#7dd3fc`.
	pub fn to_css_rgb(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// A weighted set of colors particles draw from at generation time.
#[derive(Clone, Debug)]
pub struct ParticlePalette {
	/// Colors to pick from.
	pub colors: Vec<Color>,
	/// Relative pick weights, parallel to `colors`.
	pub weights: Vec<f64>,
}

impl ParticlePalette {
	/// Cool blues and white for the hero ring.
	pub fn ring() -> Self {
		Self {
			colors: vec![
				Color::rgb(255, 255, 255), // White
				Color::rgb(125, 211, 252), // Sky blue
				Color::rgb(96, 165, 250),  // Bright blue
			],
			weights: vec![0.5, 0.3, 0.2],
		}
	}

	/// Plain white for the logo silhouette.
	pub fn silhouette() -> Self {
		Self {
			colors: vec![Color::WHITE],
			weights: vec![1.0],
		}
	}

	/// Color at `index`, white when out of range.
	pub fn get(&self, index: usize) -> Color {
		self.colors.get(index).copied().unwrap_or(Color::WHITE)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_output_is_lowercase_hex() {
		assert_eq!(Color::rgb(255, 0, 16).to_css_rgb(), "#ff0010");
		assert_eq!(Color::WHITE.to_css_rgb(), "#ffffff");
	}

	#[test]
	fn palettes_have_matching_weights() {
		for palette in [ParticlePalette::ring(), ParticlePalette::silhouette()] {
			assert_eq!(palette.colors.len(), palette.weights.len());
			assert!(palette.weights.iter().all(|w| *w > 0.0));
		}
	}

	#[test]
	fn out_of_range_index_falls_back_to_white() {
		assert_eq!(ParticlePalette::ring().get(99), Color::WHITE);
	}
}
