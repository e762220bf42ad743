//! Neon color palette shared by every particle.

use rand::Rng;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color at a different alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Always emits `rgba()`; glow and link strokes rely on the alpha channel.
	pub fn to_css(self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// The fixed palette. Particles reference an entry, never copy it.
pub const PALETTE: [Color; 6] = [
	Color::rgb(255, 51, 153), // Hot pink
	Color::rgb(0, 255, 255),  // Cyan
	Color::rgb(255, 255, 0),  // Yellow
	Color::rgb(153, 51, 255), // Purple
	Color::rgb(0, 255, 128),  // Neon green
	Color::rgb(255, 128, 0),  // Orange
];

/// Index into [`PALETTE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swatch(u8);

impl Swatch {
	/// Returns `None` for indices outside the palette.
	pub fn new(index: usize) -> Option<Self> {
		(index < PALETTE.len()).then_some(Self(index as u8))
	}

	/// Picks an entry uniformly.
	pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
		Self(rng.gen_range(0..PALETTE.len()) as u8)
	}

	/// Position in [`PALETTE`].
	pub fn index(self) -> usize {
		self.0 as usize
	}

	/// The referenced palette entry.
	pub fn color(self) -> Color {
		PALETTE[self.index()]
	}
}
