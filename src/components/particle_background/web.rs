//! Browser wiring: `requestAnimationFrame` scheduling, the window resize
//! listener, and the handle that ties both to one renderer.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::config::BackgroundConfig;
use super::renderer::{BackgroundRenderer, FrameScheduler};
use super::surface::{CanvasSurface, SurfaceError};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type SharedRenderer = Rc<RefCell<BackgroundRenderer<CanvasSurface, AnimationFrames>>>;

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// [`FrameScheduler`] backed by `requestAnimationFrame`.
///
/// The callback slot is filled after the renderer exists, since the callback
/// itself needs the renderer.
pub struct AnimationFrames {
	window: Window,
	callback: FrameCallback,
}

impl FrameScheduler for AnimationFrames {
	type Handle = i32;

	fn request_frame(&mut self) -> Option<i32> {
		let slot = self.callback.borrow();
		let cb = slot.as_ref()?;
		match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => Some(id),
			Err(e) => {
				warn!("neon-bg: requestAnimationFrame failed: {:?}", e);
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

/// A window event listener that deregisters itself when dropped.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	callback: Closure<dyn FnMut()>,
}

impl WindowListener {
	/// Adds `callback` for `event` on `window`.
	pub fn register(
		window: &Window,
		event: &'static str,
		callback: Closure<dyn FnMut()>,
	) -> Result<Self, SurfaceError> {
		window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		Ok(Self {
			window: window.clone(),
			event,
			callback,
		})
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// A running background bound to a canvas.
///
/// [`BackgroundHandle::stop`] (or dropping the handle) cancels the pending
/// frame and removes the resize listener together.
pub struct BackgroundHandle {
	renderer: SharedRenderer,
	frame_callback: FrameCallback,
	resize: Option<WindowListener>,
}

impl BackgroundHandle {
	/// Sizes `canvas` to the viewport and starts the draw loop.
	pub fn start(canvas: HtmlCanvasElement, config: BackgroundConfig) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let surface = CanvasSurface::acquire(canvas)?;
		let (width, height) = viewport_size(&window).unwrap_or((0.0, 0.0));

		let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
		let scheduler = AnimationFrames {
			window: window.clone(),
			callback: frame_callback.clone(),
		};
		let renderer: SharedRenderer =
			Rc::new(RefCell::new(BackgroundRenderer::new(surface, scheduler, config)));

		let renderer_frame = renderer.clone();
		*frame_callback.borrow_mut() = Some(Closure::new(move || {
			renderer_frame.borrow_mut().frame();
		}));

		let (renderer_resize, window_resize) = (renderer.clone(), window.clone());
		let resize = WindowListener::register(
			&window,
			"resize",
			Closure::new(move || {
				if let Some((w, h)) = viewport_size(&window_resize) {
					renderer_resize.borrow_mut().resize(w, h);
				}
			}),
		);
		let resize = match resize {
			Ok(listener) => Some(listener),
			Err(e) => {
				warn!("neon-bg: resize listener unavailable: {}", e);
				None
			}
		};

		renderer.borrow_mut().start(width, height);

		Ok(Self {
			renderer,
			frame_callback,
			resize,
		})
	}

	/// Stops the loop and releases the browser callbacks.
	pub fn stop(self) {
		drop(self);
	}
}

impl Drop for BackgroundHandle {
	fn drop(&mut self) {
		self.renderer.borrow_mut().stop();
		self.resize.take();
		// Breaks the renderer <-> callback cycle
		self.frame_callback.borrow_mut().take();
	}
}
