//! Drawing surface abstraction and its canvas 2D implementation.
//!
//! The renderer only speaks [`Surface`]; the browser canvas is one
//! implementation, a recording double is another.

use std::f64::consts::PI;
use std::fmt;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::palette::Color;

/// The primitive operations a frame needs.
pub trait Surface {
	/// Sets the drawable size in pixels.
	fn resize(&mut self, width: f64, height: f64);

	/// Current drawable size, `(width, height)`.
	fn size(&self) -> (f64, f64);

	/// Wipes the whole surface to transparent.
	fn clear(&mut self);

	/// Fills a circle with a blurred halo of the same color. The halo must not
	/// carry over to later draws.
	fn fill_glowing_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64);

	/// Strokes a straight line whose color blends linearly from `start` to `end`.
	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	);
}

/// Reasons a drawing surface could not be acquired.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceError {
	/// No global `window` (not running in a browser).
	NoWindow,
	/// The canvas has no 2D context to offer.
	ContextUnavailable,
	/// `getContext("2d")` returned something other than a 2D context.
	NotCanvas2d,
	/// The browser threw while acquiring the context.
	Js(String),
}

impl fmt::Display for SurfaceError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SurfaceError::NoWindow => write!(f, "no browser window available"),
			SurfaceError::ContextUnavailable => write!(f, "2D canvas context unavailable"),
			SurfaceError::NotCanvas2d => write!(f, "canvas context is not a 2D context"),
			SurfaceError::Js(msg) => write!(f, "browser error: {}", msg),
		}
	}
}

impl std::error::Error for SurfaceError {}

impl From<JsValue> for SurfaceError {
	fn from(value: JsValue) -> Self {
		let msg = value
			.dyn_ref::<js_sys::Error>()
			.map(|e| String::from(e.message()))
			.or_else(|| value.as_string())
			.unwrap_or_else(|| format!("{:?}", value));
		SurfaceError::Js(msg)
	}
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	width: f64,
	height: f64,
}

impl CanvasSurface {
	/// Acquires the 2D context of `canvas`.
	pub fn acquire(canvas: HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into()
			.map_err(|_| SurfaceError::NotCanvas2d)?;
		let (width, height) = (canvas.width() as f64, canvas.height() as f64);

		Ok(Self {
			canvas,
			ctx,
			width,
			height,
		})
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: f64, height: f64) {
		let (w, h) = (width.max(0.0) as u32, height.max(0.0) as u32);
		self.canvas.set_width(w);
		self.canvas.set_height(h);
		self.width = w as f64;
		self.height = h as f64;
	}

	fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
	}

	fn fill_glowing_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64) {
		let css = color.to_css();
		self.ctx.set_shadow_blur(glow);
		self.ctx.set_shadow_color(&css);

		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&css);
		self.ctx.fill();

		self.ctx.set_shadow_blur(0.0);
	}

	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	) {
		let gradient = self.ctx.create_linear_gradient(from.0, from.1, to.0, to.1);
		let _ = gradient.add_color_stop(0.0, &start.to_css());
		let _ = gradient.add_color_stop(1.0, &end.to_css());

		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		#[allow(deprecated)]
		self.ctx.set_stroke_style(&gradient);
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}
