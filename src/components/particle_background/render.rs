//! Frame drawing for the particle background.
//!
//! A frame is drawn in passes:
//! 1. Clear the surface
//! 2. Particles with their glow, in field order
//! 3. Gradient links between every pair closer than the link distance

use super::config::BackgroundConfig;
use super::field::{Particle, ParticleField};
use super::surface::Surface;

/// Alpha at both ends of a link between particles `distance` apart.
/// Fades linearly from `link_alpha` at zero to nothing at `link_distance`.
pub fn link_alpha(distance: f64, config: &BackgroundConfig) -> f64 {
	(config.link_alpha * (1.0 - distance / config.link_distance)).max(0.0)
}

/// Draws one complete frame of `field` onto `surface`.
pub fn draw_frame<S: Surface + ?Sized>(
	field: &ParticleField,
	surface: &mut S,
	config: &BackgroundConfig,
) {
	surface.clear();
	draw_particles(field, surface, config);
	draw_links(field, surface, config);
}

fn draw_particles<S: Surface + ?Sized>(
	field: &ParticleField,
	surface: &mut S,
	config: &BackgroundConfig,
) {
	for p in field.particles() {
		let color = p.swatch.color().with_alpha(p.opacity);
		surface.fill_glowing_circle(p.x, p.y, p.size, color, config.glow_blur);
	}
}

fn draw_links<S: Surface + ?Sized>(
	field: &ParticleField,
	surface: &mut S,
	config: &BackgroundConfig,
) {
	let max_sq = config.link_distance * config.link_distance;

	for (a, b) in field.pairs() {
		let (dx, dy) = (a.x - b.x, a.y - b.y);
		// Reject far pairs before paying for the square root
		if dx * dx + dy * dy >= max_sq {
			continue;
		}
		draw_link(a, b, surface, config);
	}
}

fn draw_link<S: Surface + ?Sized>(
	a: &Particle,
	b: &Particle,
	surface: &mut S,
	config: &BackgroundConfig,
) {
	let distance = a.distance_to(b);
	if distance >= config.link_distance {
		return;
	}
	let alpha = link_alpha(distance, config);
	surface.stroke_gradient_line(
		(a.x, a.y),
		(b.x, b.y),
		a.swatch.color().with_alpha(alpha),
		b.swatch.color().with_alpha(alpha),
		config.link_width,
	);
}
