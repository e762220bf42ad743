//! Particle state and the per-frame update rule.
//!
//! No drawing and no timing lives here: one call to [`advance`] is one unit of
//! simulated time.

use rand::Rng;

use super::config::BackgroundConfig;
use super::palette::Swatch;

/// A single drifting particle. Only the position changes after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Horizontal velocity, pixels per frame.
	pub vx: f64,
	/// Vertical velocity, pixels per frame.
	pub vy: f64,
	/// Radius in pixels.
	pub size: f64,
	/// Fill and glow alpha.
	pub opacity: f64,
	/// Palette entry this particle is drawn with.
	pub swatch: Swatch,
}

impl Particle {
	/// Euclidean distance between the two positions.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Number of particles for a surface, `floor(width * height / density)`.
/// Degenerate or non-finite dimensions give zero.
pub fn particle_count(width: f64, height: f64, config: &BackgroundConfig) -> usize {
	if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
		return 0;
	}
	let count = ((width * height) / config.density).floor() as usize;
	match config.max_particles {
		Some(cap) => count.min(cap),
		None => count,
	}
}

/// Creates a fresh population sized to the surface.
pub fn populate<R: Rng + ?Sized>(
	width: f64,
	height: f64,
	config: &BackgroundConfig,
	rng: &mut R,
) -> Vec<Particle> {
	let count = particle_count(width, height, config);
	let speed = config.max_speed;

	(0..count)
		.map(|_| Particle {
			x: rng.gen_range(0.0..width),
			y: rng.gen_range(0.0..height),
			vx: rng.gen_range(-speed..=speed),
			vy: rng.gen_range(-speed..=speed),
			size: rng.gen_range(config.size_min..config.size_max),
			opacity: rng.gen_range(config.opacity_min..config.opacity_max),
			swatch: Swatch::random(&mut *rng),
		})
		.collect()
}

/// Moves every particle by its velocity, teleporting across edges.
pub fn advance(particles: &mut [Particle], width: f64, height: f64) {
	for p in particles {
		p.x += p.vx;
		p.y += p.vy;

		// The far edge itself counts as outside, so a particle resting on it
		// lands on the near edge.
		if p.x < 0.0 {
			p.x = width;
		} else if p.x >= width {
			p.x = 0.0;
		}
		if p.y < 0.0 {
			p.y = height;
		} else if p.y >= height {
			p.y = 0.0;
		}
	}
}

/// The live particle set together with the bounds it was populated for.
///
/// Dimensions and particles are replaced together, so a frame never sees a new
/// size paired with a stale population.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Populates a field for a `width` x `height` surface.
	pub fn new<R: Rng + ?Sized>(
		width: f64,
		height: f64,
		config: &BackgroundConfig,
		rng: &mut R,
	) -> Self {
		Self {
			particles: populate(width, height, config, rng),
			width,
			height,
		}
	}

	#[cfg(test)]
	pub(crate) fn from_particles(particles: Vec<Particle>, width: f64, height: f64) -> Self {
		Self {
			particles,
			width,
			height,
		}
	}

	/// Advances every particle one step within the field's bounds.
	pub fn advance(&mut self) {
		advance(&mut self.particles, self.width, self.height);
	}

	/// Particles in field order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Number of particles.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// Whether the field holds no particles.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// Bounds the field was populated for, `(width, height)`.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Every unordered pair exactly once, `(i, j)` with `i < j` in field order.
	pub fn pairs(&self) -> impl Iterator<Item = (&Particle, &Particle)> + '_ {
		self.particles
			.iter()
			.enumerate()
			.flat_map(move |(i, a)| self.particles[i + 1..].iter().map(move |b| (a, b)))
	}
}
