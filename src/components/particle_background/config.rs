//! Tunable constants for the particle background.
//!
//! Defaults reproduce the stock look. A page may override any subset through a
//! JSON script element with id `background-config`:
//!
//! ```html
//! <script id="background-config" type="application/json">
//!   { "link_distance": 120.0, "max_particles": 200 }
//! </script>
//! ```

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// Visual and population parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
	/// Surface area in square pixels per particle.
	pub density: f64,
	/// Upper bound for each velocity component, in pixels per frame.
	pub max_speed: f64,
	/// Particle radius range, `[size_min, size_max)`.
	pub size_min: f64,
	/// Exclusive upper end of the radius range.
	pub size_max: f64,
	/// Particle opacity range, `[opacity_min, opacity_max)`.
	pub opacity_min: f64,
	/// Exclusive upper end of the opacity range.
	pub opacity_max: f64,
	/// Blur radius of the halo drawn around each particle.
	pub glow_blur: f64,
	/// Particles closer than this are linked.
	pub link_distance: f64,
	/// Link alpha when both endpoints coincide.
	pub link_alpha: f64,
	/// Stroke width of a link.
	pub link_width: f64,
	/// CSS opacity of the whole canvas.
	pub canvas_opacity: f64,
	/// Optional hard cap on the particle count for very large viewports.
	pub max_particles: Option<usize>,
}

impl Default for BackgroundConfig {
	fn default() -> Self {
		Self {
			density: 12_000.0,
			max_speed: 0.25,
			size_min: 1.0,
			size_max: 4.0,
			opacity_min: 0.2,
			opacity_max: 0.8,
			glow_blur: 15.0,
			link_distance: 150.0,
			link_alpha: 0.15,
			link_width: 0.5,
			canvas_opacity: 0.6,
			max_particles: None,
		}
	}
}

/// Smallest accepted `density`. Denser settings would stall the page on a
/// large viewport, both when populating and in the pairwise link pass.
pub const MIN_DENSITY: f64 = 1_000.0;

/// Largest accepted `max_speed` and `size_max`, in pixels.
pub const MAX_EXTENT: f64 = 1_000.0;

fn valid_range(min: f64, max: f64) -> bool {
	min.is_finite() && max.is_finite() && min < max
}

impl BackgroundConfig {
	/// Parses a JSON override; missing fields keep their defaults.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(text).map(Self::sanitized)
	}

	/// Load overrides from the `background-config` script element, if present.
	pub fn from_document() -> Self {
		let Some(text) = config_script_text() else {
			return Self::default();
		};
		match Self::from_json(&text) {
			Ok(config) => {
				info!("neon-bg: loaded background config overrides");
				config
			}
			Err(e) => {
				warn!("neon-bg: failed to parse background config: {}", e);
				Self::default()
			}
		}
	}

	/// Replaces values that would make population or rendering misbehave.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();
		if !(self.density.is_finite() && self.density >= MIN_DENSITY) {
			self.density = defaults.density;
		}
		if !(self.max_speed.is_finite() && (0.0..=MAX_EXTENT).contains(&self.max_speed)) {
			self.max_speed = defaults.max_speed;
		}
		if !(valid_range(self.size_min, self.size_max)
			&& self.size_min > 0.0
			&& self.size_max <= MAX_EXTENT)
		{
			self.size_min = defaults.size_min;
			self.size_max = defaults.size_max;
		}
		if !(valid_range(self.opacity_min, self.opacity_max)
			&& self.opacity_min > 0.0
			&& self.opacity_max <= 1.0)
		{
			self.opacity_min = defaults.opacity_min;
			self.opacity_max = defaults.opacity_max;
		}
		if !(self.glow_blur.is_finite() && self.glow_blur >= 0.0) {
			self.glow_blur = defaults.glow_blur;
		}
		if !(self.link_distance.is_finite() && self.link_distance > 0.0) {
			self.link_distance = defaults.link_distance;
		}
		self.link_alpha = if self.link_alpha.is_finite() {
			self.link_alpha.clamp(0.0, 1.0)
		} else {
			defaults.link_alpha
		};
		if !(self.link_width.is_finite() && self.link_width > 0.0) {
			self.link_width = defaults.link_width;
		}
		self.canvas_opacity = if self.canvas_opacity.is_finite() {
			self.canvas_opacity.clamp(0.0, 1.0)
		} else {
			defaults.canvas_opacity
		};
		self
	}
}

fn config_script_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id("background-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_background::field::{particle_count, populate};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	#[test]
	fn empty_object_yields_defaults() {
		let config = BackgroundConfig::from_json("{}").unwrap();
		assert_eq!(config, BackgroundConfig::default());
	}

	#[test]
	fn partial_override_keeps_other_fields() {
		let config =
			BackgroundConfig::from_json(r#"{ "link_distance": 90.0, "max_particles": 64 }"#)
				.unwrap();
		assert_eq!(config.link_distance, 90.0);
		assert_eq!(config.max_particles, Some(64));
		assert_eq!(config.density, 12_000.0);
		assert_eq!(config.glow_blur, 15.0);
	}

	#[test]
	fn extreme_speed_and_size_fall_back() {
		let config = BackgroundConfig::from_json(
			r#"{ "max_speed": 1e308, "size_min": 1.0, "size_max": 1e308 }"#,
		)
		.unwrap();
		assert_eq!(config.max_speed, 0.25);
		assert_eq!((config.size_min, config.size_max), (1.0, 4.0));

		// Population with the sanitized values must not panic
		let mut rng = StdRng::seed_from_u64(9);
		let particles = populate(800.0, 600.0, &config, &mut rng);
		assert_eq!(particles.len(), 40);
		assert!(particles.iter().all(|p| p.vx.abs() <= 0.25 && p.size < 4.0));
	}

	#[test]
	fn speed_at_the_limit_is_kept() {
		let config = BackgroundConfig::from_json(r#"{ "max_speed": 1000.0 }"#).unwrap();
		assert_eq!(config.max_speed, MAX_EXTENT);
		let mut rng = StdRng::seed_from_u64(10);
		assert_eq!(populate(400.0, 300.0, &config, &mut rng).len(), 10);
	}

	#[test]
	fn tiny_density_falls_back() {
		for text in [r#"{ "density": 1e-9 }"#, r#"{ "density": 999.0 }"#] {
			let config = BackgroundConfig::from_json(text).unwrap();
			assert_eq!(config.density, 12_000.0);
			assert_eq!(particle_count(800.0, 600.0, &config), 40);
		}
		let config = BackgroundConfig::from_json(r#"{ "density": 1000.0 }"#).unwrap();
		assert_eq!(particle_count(800.0, 600.0, &config), 480);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(BackgroundConfig::from_json("{ density: ").is_err());
	}

	#[test]
	fn invalid_values_fall_back_to_defaults() {
		let config = BackgroundConfig::from_json(
			r#"{ "density": 0.0, "size_min": 5.0, "size_max": 2.0, "opacity_max": 3.0, "link_alpha": 4.0 }"#,
		)
		.unwrap();
		let defaults = BackgroundConfig::default();
		assert_eq!(config.density, defaults.density);
		assert_eq!((config.size_min, config.size_max), (1.0, 4.0));
		assert_eq!((config.opacity_min, config.opacity_max), (0.2, 0.8));
		assert_eq!(config.link_alpha, 1.0);
	}
}
