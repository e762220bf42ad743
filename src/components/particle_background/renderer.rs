//! The background's lifecycle state machine and draw loop.
//!
//! The loop is an explicit step function, [`BackgroundRenderer::frame`], plus
//! an injected [`FrameScheduler`] that arranges for the next step. In the
//! browser the scheduler wraps `requestAnimationFrame`; tests step frames by
//! hand.
//!
//! ```text
//! Uninitialized --start--> Running --stop--> Stopped
//!                           |  ^
//!                           +--+ frame / resize
//! ```

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::BackgroundConfig;
use super::field::ParticleField;
use super::render;
use super::surface::Surface;

/// Host facility that runs the next frame later.
pub trait FrameScheduler {
	/// Identifies a scheduled frame so it can be cancelled.
	type Handle;

	/// Asks for one more call to [`BackgroundRenderer::frame`]. `None` means
	/// the host refused and no frame is pending.
	fn request_frame(&mut self) -> Option<Self::Handle>;

	/// Withdraws a frame that has not run yet.
	fn cancel_frame(&mut self, handle: Self::Handle);
}

/// Lifecycle of one mounted background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	/// Built but not yet started.
	Uninitialized,
	/// Drawing one frame per scheduler tick.
	Running,
	/// Terminal. A remount builds a new renderer.
	Stopped,
}

/// Owns the surface, the particle field and the pending frame.
pub struct BackgroundRenderer<S, F: FrameScheduler, R = StdRng> {
	surface: S,
	scheduler: F,
	rng: R,
	config: BackgroundConfig,
	field: ParticleField,
	state: LoopState,
	pending: Option<F::Handle>,
}

impl<S: Surface, F: FrameScheduler> BackgroundRenderer<S, F> {
	/// Renderer seeded from the platform's entropy source.
	pub fn new(surface: S, scheduler: F, config: BackgroundConfig) -> Self {
		Self::with_rng(surface, scheduler, config, StdRng::from_entropy())
	}
}

impl<S: Surface, F: FrameScheduler, R: Rng> BackgroundRenderer<S, F, R> {
	/// Renderer drawing its randomness from `rng`.
	pub fn with_rng(surface: S, scheduler: F, config: BackgroundConfig, rng: R) -> Self {
		Self {
			surface,
			scheduler,
			rng,
			config: config.sanitized(),
			field: ParticleField::default(),
			state: LoopState::Uninitialized,
			pending: None,
		}
	}

	/// Sizes the surface to the viewport, populates the field and schedules
	/// the first frame. Only valid once, from `Uninitialized`.
	pub fn start(&mut self, width: f64, height: f64) -> bool {
		if self.state != LoopState::Uninitialized {
			warn!("neon-bg: start ignored in state {:?}", self.state);
			return false;
		}

		self.repopulate(width, height);
		self.state = LoopState::Running;
		self.schedule();

		let (w, h) = self.field.size();
		info!("neon-bg: started at {}x{} with {} particles", w, h, self.field.len());
		true
	}

	/// One step of the loop: advance, redraw, schedule the next step.
	///
	/// Returns `false` without touching any state unless running, so a stale
	/// callback that slips past cancellation is harmless.
	pub fn frame(&mut self) -> bool {
		if self.state != LoopState::Running {
			return false;
		}
		// The frame that invoked us is no longer pending
		self.pending = None;

		self.field.advance();
		render::draw_frame(&self.field, &mut self.surface, &self.config);
		self.schedule();
		true
	}

	/// Replaces the field wholesale for a new viewport size. The loop keeps
	/// its pending frame, which will draw the new field.
	pub fn resize(&mut self, width: f64, height: f64) {
		if self.state != LoopState::Running {
			debug!("neon-bg: resize ignored in state {:?}", self.state);
			return;
		}
		self.repopulate(width, height);

		let (w, h) = self.field.size();
		debug!("neon-bg: resized to {}x{}, {} particles", w, h, self.field.len());
	}

	/// Cancels the pending frame. Terminal.
	pub fn stop(&mut self) {
		if self.state == LoopState::Stopped {
			return;
		}
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		self.state = LoopState::Stopped;
		info!("neon-bg: stopped");
	}

	/// Current lifecycle state.
	pub fn state(&self) -> LoopState {
		self.state
	}

	/// The live particle field.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// The surface frames are drawn onto.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// The sanitized configuration in use.
	pub fn config(&self) -> &BackgroundConfig {
		&self.config
	}

	/// Whether a frame is scheduled and not yet run.
	pub fn has_pending_frame(&self) -> bool {
		self.pending.is_some()
	}

	fn repopulate(&mut self, width: f64, height: f64) {
		self.surface.resize(width, height);
		// Populate against what the surface actually accepted
		let (w, h) = self.surface.size();
		self.field = ParticleField::new(w, h, &self.config, &mut self.rng);
	}

	fn schedule(&mut self) {
		self.pending = self.scheduler.request_frame();
		if self.pending.is_none() {
			warn!("neon-bg: host refused to schedule a frame, animation halted");
		}
	}
}
