//! Rising ember and dust particles.
//!
//! Each [`Particle`] is a plain value: [`Particle::spawn`] draws a fresh one
//! below the bottom edge and [`Particle::step`] advances it by one frame. The
//! [`ParticleField`] owns a population of fixed size and swaps spent particles
//! for new spawns in place, so the population never grows or shrinks.

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use super::theme::{Color, ParticleKind, ParticleStyle};

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	/// Live opacity, recomputed from `life` every step.
	pub opacity: f64,
	pub life: f64,
	pub kind: ParticleKind,
	/// Body color. Alpha is fixed at spawn and does not follow `opacity`.
	pub color: Color,
	pub glow: Color,
}

/// Uniform draw over `range`. An empty range collapses to its start.
fn uniform<R: Rng + ?Sized>(rng: &mut R, range: &std::ops::Range<f64>) -> f64 {
	let u: f64 = Standard.sample(rng);
	range.start + u * (range.end - range.start)
}

impl Particle {
	/// Spawn a particle just below the bottom edge of a `width` x `height` surface.
	pub fn spawn<R: Rng + ?Sized>(
		rng: &mut R,
		style: &ParticleStyle,
		width: f64,
		height: f64,
	) -> Self {
		let x = uniform(rng, &(0.0..width));
		let size = uniform(rng, &style.size);
		let speed_y = uniform(rng, &style.speed_y);
		let speed_x = uniform(rng, &style.speed_x);
		let opacity = uniform(rng, &style.opacity);
		let life = uniform(rng, &style.life);
		let kind = ParticleKind::from_roll(Standard.sample(rng));

		Self {
			x,
			y: height + style.edge_margin,
			size,
			speed_x,
			speed_y,
			opacity,
			life,
			kind,
			color: kind.base().with_alpha(opacity * kind.alpha_factor()),
			glow: kind.glow(),
		}
	}

	/// Spawn a particle anywhere in `[0, height)` so the first frame is not empty.
	pub fn scattered<R: Rng + ?Sized>(
		rng: &mut R,
		style: &ParticleStyle,
		width: f64,
		height: f64,
	) -> Self {
		let mut p = Self::spawn(rng, style, width, height);
		p.y = uniform(rng, &(0.0..height));
		p
	}

	/// The particle one frame later. Does not respawn; see [`Particle::is_spent`].
	pub fn step(&self, style: &ParticleStyle) -> Self {
		let y = self.y - self.speed_y;
		let x = self.x + self.speed_x + (y * style.wave_frequency).sin() * style.wave_amplitude;
		let life = self.life - style.life_decay;

		Self {
			x,
			y,
			life,
			opacity: life * style.fade,
			..self.clone()
		}
	}

	/// Whether the particle has faded out or drifted off the top edge.
	pub fn is_spent(&self, style: &ParticleStyle) -> bool {
		self.y < -style.edge_margin || self.life <= 0.0
	}

	/// Whether the particle is large enough to get a halo.
	pub fn has_glow(&self, style: &ParticleStyle) -> bool {
		self.size > style.glow_threshold
	}
}

/// Manages the ambient particle population.
pub struct ParticleField<R: Rng> {
	particles: Vec<Particle>,
	style: ParticleStyle,
	rng: R,
	width: f64,
	height: f64,
}

impl<R: Rng> ParticleField<R> {
	pub fn new(style: ParticleStyle, width: f64, height: f64, mut rng: R) -> Self {
		let particles = (0..style.count)
			.map(|_| Particle::scattered(&mut rng, &style, width, height))
			.collect();

		Self {
			particles,
			style,
			rng,
			width,
			height,
		}
	}

	/// Advance every particle by one frame, respawning the spent ones.
	pub fn update(&mut self) {
		for p in &mut self.particles {
			let next = p.step(&self.style);
			*p = if next.is_spent(&self.style) {
				Particle::spawn(&mut self.rng, &self.style, self.width, self.height)
			} else {
				next
			};
		}
	}

	/// Set new surface bounds. Existing particles keep their positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn style(&self) -> &ParticleStyle {
		&self.style
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn field(width: f64, height: f64) -> ParticleField<StdRng> {
		ParticleField::new(ParticleStyle::embers(50), width, height, StdRng::seed_from_u64(7))
	}

	#[test]
	fn initial_population_is_scattered_over_surface() {
		let f = field(800.0, 600.0);
		assert_eq!(f.particles().len(), 50);
		for p in f.particles() {
			assert!((0.0..600.0).contains(&p.y), "y out of range: {}", p.y);
			assert!((0.0..800.0).contains(&p.x), "x out of range: {}", p.x);
		}
		// Not all piled up at one height.
		let min = f.particles().iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
		let max = f.particles().iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
		assert!(max - min > 300.0);
	}

	#[test]
	fn spawn_draws_within_ranges() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..1_000 {
			let p = Particle::spawn(&mut rng, &style, 800.0, 600.0);
			assert_eq!(p.y, 610.0);
			assert!(style.size.contains(&p.size));
			assert!(style.speed_y.contains(&p.speed_y));
			assert!(style.speed_x.contains(&p.speed_x));
			assert!(style.opacity.contains(&p.opacity));
			assert!(style.life.contains(&p.life));
			assert_eq!(p.glow, p.kind.glow());
			assert!((p.color.a - p.opacity * p.kind.alpha_factor()).abs() < 1e-12);
		}
	}

	#[test]
	fn zero_sized_surface_does_not_panic() {
		let f = field(0.0, 0.0);
		assert_eq!(f.particles().len(), 50);
		assert!(f.particles().iter().all(|p| p.x == 0.0));
	}

	#[test]
	fn step_follows_motion_rules() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(3);
		let mut p = Particle::spawn(&mut rng, &style, 800.0, 600.0);
		p.x = 100.0;
		p.y = 300.0;
		p.speed_x = 0.1;
		p.speed_y = 0.5;
		p.life = 0.8;

		let next = p.step(&style);
		assert_eq!(next.y, 299.5);
		let expected_x = 100.0 + 0.1 + (299.5_f64 * 0.01).sin() * 0.2;
		assert!((next.x - expected_x).abs() < 1e-12);
		assert!((next.life - 0.798).abs() < 1e-12);
		assert!((next.opacity - 0.399).abs() < 1e-12);
		// Color alpha stays at its spawn value.
		assert_eq!(next.color, p.color);
	}

	#[test]
	fn spent_particle_respawns_below_bottom_edge() {
		let mut f = field(800.0, 600.0);
		f.particles[0].life = 0.0015;
		f.particles[0].y = 300.0;

		f.update();

		let p = &f.particles()[0];
		assert_eq!(p.y, 610.0);
		assert!((0.5..1.0).contains(&p.life));
	}

	#[test]
	fn particle_past_top_edge_respawns() {
		let mut f = field(800.0, 600.0);
		f.particles[3].y = -9.9;
		f.particles[3].speed_y = 0.5;
		f.particles[3].life = 0.9;

		f.update();

		assert_eq!(f.particles()[3].y, 610.0);
	}

	#[test]
	fn population_and_life_hold_over_many_ticks() {
		let mut f = field(1024.0, 768.0);
		for _ in 0..5_000 {
			f.update();
			assert_eq!(f.particles().len(), 50);
			for p in f.particles() {
				assert!(p.life > 0.0);
				assert!(p.opacity >= 0.0);
				assert!(p.y >= -10.0);
			}
		}
	}

	#[test]
	fn kinds_follow_weights() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(42);
		let samples = 10_000;
		let mut counts: HashMap<ParticleKind, usize> = HashMap::new();
		for _ in 0..samples {
			let p = Particle::spawn(&mut rng, &style, 800.0, 600.0);
			*counts.entry(p.kind).or_insert(0) += 1;
		}
		for kind in ParticleKind::ALL {
			let share = counts.get(&kind).copied().unwrap_or(0) as f64 / samples as f64;
			assert!(
				(share - kind.weight()).abs() < 0.02,
				"{kind:?}: {share} vs {}",
				kind.weight()
			);
		}
	}

	#[test]
	fn resize_sets_exact_bounds_for_new_spawns() {
		let mut f = field(800.0, 600.0);
		let before: Vec<f64> = f.particles().iter().map(|p| p.y).collect();
		f.resize(1280.0, 720.0);
		assert_eq!((f.width(), f.height()), (1280.0, 720.0));
		let after: Vec<f64> = f.particles().iter().map(|p| p.y).collect();
		assert_eq!(before, after);

		f.particles[0].life = 0.001;
		f.update();
		assert_eq!(f.particles()[0].y, 730.0);
		assert!(f.particles()[0].x < 1280.0);
	}

	#[test]
	fn glow_only_above_threshold() {
		let style = ParticleStyle::default();
		let mut rng = StdRng::seed_from_u64(5);
		let mut p = Particle::spawn(&mut rng, &style, 10.0, 10.0);
		p.size = 2.0;
		assert!(!p.has_glow(&style));
		p.size = 2.01;
		assert!(p.has_glow(&style));
	}
}
