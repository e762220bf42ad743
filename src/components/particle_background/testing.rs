//! Test doubles for the surface and the frame scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use super::palette::Color;
use super::renderer::FrameScheduler;
use super::surface::Surface;

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
	Clear,
	Circle {
		x: f64,
		y: f64,
		radius: f64,
		color: Color,
		glow: f64,
	},
	Line {
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	},
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
	pub ops: Vec<DrawOp>,
	pub width: f64,
	pub height: f64,
	pub resizes: Vec<(f64, f64)>,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			..Self::default()
		}
	}

	/// Operations recorded since the last `Clear`.
	pub fn last_frame(&self) -> &[DrawOp] {
		let start = self
			.ops
			.iter()
			.rposition(|op| *op == DrawOp::Clear)
			.unwrap_or(0);
		&self.ops[start..]
	}
}

impl Surface for RecordingSurface {
	fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0).floor();
		self.height = height.max(0.0).floor();
		self.resizes.push((self.width, self.height));
	}

	fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	fn clear(&mut self) {
		self.ops.push(DrawOp::Clear);
	}

	fn fill_glowing_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, glow: f64) {
		self.ops.push(DrawOp::Circle {
			x,
			y,
			radius,
			color,
			glow,
		});
	}

	fn stroke_gradient_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		start: Color,
		end: Color,
		width: f64,
	) {
		self.ops.push(DrawOp::Line {
			from,
			to,
			start,
			end,
			width,
		});
	}
}

#[derive(Debug, Default)]
struct FrameQueue {
	next_id: u32,
	pending: Vec<u32>,
	requested: usize,
	cancelled: Vec<u32>,
}

/// Manual frame stepper. Clones share one queue, so a test can keep a handle
/// while the renderer owns another and fire frames by hand.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
	queue: Rc<RefCell<FrameQueue>>,
	refuse: bool,
}

impl ManualScheduler {
	/// A scheduler whose requests always fail.
	pub fn refusing() -> Self {
		Self {
			refuse: true,
			..Self::default()
		}
	}

	/// Removes the oldest pending frame, as the host would before invoking it.
	pub fn fire(&self) -> Option<u32> {
		let mut queue = self.queue.borrow_mut();
		if queue.pending.is_empty() {
			None
		} else {
			Some(queue.pending.remove(0))
		}
	}

	pub fn pending(&self) -> usize {
		self.queue.borrow().pending.len()
	}

	pub fn requested(&self) -> usize {
		self.queue.borrow().requested
	}

	pub fn cancelled(&self) -> Vec<u32> {
		self.queue.borrow().cancelled.clone()
	}
}

impl FrameScheduler for ManualScheduler {
	type Handle = u32;

	fn request_frame(&mut self) -> Option<u32> {
		if self.refuse {
			return None;
		}
		let mut queue = self.queue.borrow_mut();
		let id = queue.next_id;
		queue.next_id += 1;
		queue.requested += 1;
		queue.pending.push(id);
		Some(id)
	}

	fn cancel_frame(&mut self, handle: u32) {
		let mut queue = self.queue.borrow_mut();
		queue.pending.retain(|&id| id != handle);
		queue.cancelled.push(handle);
	}
}
