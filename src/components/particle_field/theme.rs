//! Colors and motion parameters for the ember/dust particle field.

use std::ops::Range;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Color family a particle is born into.
///
/// Picked once per spawn from a single uniform roll; the cumulative weights
/// are gold 0.35, ember 0.20, teal 0.30 and dust 0.15.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParticleKind {
	/// Golden ember.
	Gold,
	/// Orange fire spark.
	Ember,
	/// Mystical teal mist.
	Teal,
	/// Pale stone dust, drawn at half strength.
	Dust,
}

impl ParticleKind {
	/// Every kind, in roll order.
	pub const ALL: [ParticleKind; 4] = [Self::Gold, Self::Ember, Self::Teal, Self::Dust];

	/// Map a uniform roll in `[0, 1)` onto a kind.
	pub fn from_roll(roll: f64) -> Self {
		if roll < 0.35 {
			Self::Gold
		} else if roll < 0.55 {
			Self::Ember
		} else if roll < 0.85 {
			Self::Teal
		} else {
			Self::Dust
		}
	}

	/// Probability of rolling this kind.
	pub fn weight(self) -> f64 {
		match self {
			Self::Gold => 0.35,
			Self::Ember => 0.20,
			Self::Teal => 0.30,
			Self::Dust => 0.15,
		}
	}

	/// Opaque body color; the particle's alpha is applied on top.
	pub const fn base(self) -> Color {
		match self {
			Self::Gold => Color::rgb(201, 162, 39),
			Self::Ember => Color::rgb(255, 107, 53),
			Self::Teal => Color::rgb(74, 158, 140),
			Self::Dust => Color::rgb(212, 205, 196),
		}
	}

	/// Multiplier applied to spawn opacity to get the body alpha.
	pub fn alpha_factor(self) -> f64 {
		match self {
			Self::Dust => 0.5,
			_ => 1.0,
		}
	}

	/// Halo color for large particles, independent of opacity.
	pub const fn glow(self) -> Color {
		match self {
			Self::Gold => Color::rgba(255, 159, 28, 0.3),
			Self::Ember => Color::rgba(255, 107, 53, 0.3),
			Self::Teal => Color::rgba(74, 158, 140, 0.3),
			Self::Dust => Color::rgba(212, 205, 196, 0.2),
		}
	}
}

/// Particle field configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles kept alive at all times
	pub count: usize,
	/// Sprite radius
	pub size: Range<f64>,
	/// Upward drift per tick
	pub speed_y: Range<f64>,
	/// Lateral drift per tick
	pub speed_x: Range<f64>,
	/// Opacity at spawn, baked into the body color
	pub opacity: Range<f64>,
	/// Starting life
	pub life: Range<f64>,
	/// Life lost per tick
	pub life_decay: f64,
	/// Live opacity is `life * fade`
	pub fade: f64,
	/// Frequency of the sideways wave, per unit of height
	pub wave_frequency: f64,
	/// Amplitude of the sideways wave
	pub wave_amplitude: f64,
	/// Distance beyond the top/bottom edge where particles spawn and die
	pub edge_margin: f64,
	/// Particles larger than this get a halo
	pub glow_threshold: f64,
	/// Halo radius as a multiple of size
	pub glow_scale: f64,
}

impl ParticleStyle {
	/// Rising embers with the stock tuning and `count` particles.
	pub fn embers(count: usize) -> Self {
		Self {
			count,
			size: 1.0..4.0,
			speed_y: 0.2..0.7,
			speed_x: -0.15..0.15,
			opacity: 0.2..0.7,
			life: 0.5..1.0,
			life_decay: 0.002,
			fade: 0.5,
			wave_frequency: 0.01,
			wave_amplitude: 0.2,
			edge_margin: 10.0,
			glow_threshold: 2.0,
			glow_scale: 2.0,
		}
	}
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self::embers(50)
	}
}
