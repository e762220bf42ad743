//! Leptos component wrapping the particle background canvas.
//!
//! The canvas is fixed over the whole viewport, ignores pointer input and sits
//! at `z-index: 0` so page content layered above stays interactive. The draw
//! loop starts once the canvas is mounted and stops when the owner is cleaned
//! up.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use send_wrapper::SendWrapper;
use web_sys::HtmlCanvasElement;

use super::config::BackgroundConfig;
use super::web::BackgroundHandle;

/// Decorative animated background.
///
/// Pass `config` to override the defaults; otherwise overrides are read from
/// the page's `background-config` script element. If the browser cannot
/// provide a 2D canvas the component stays blank and does nothing else.
#[component]
pub fn ParticleBackground(
	/// Overrides taking precedence over the page's `background-config`.
	#[prop(optional)]
	config: Option<BackgroundConfig>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let config = config.unwrap_or_else(BackgroundConfig::from_document).sanitized();
	let style = format!(
		"position: fixed; inset: 0; pointer-events: none; z-index: 0; opacity: {};",
		config.canvas_opacity
	);

	let handle: Rc<RefCell<Option<BackgroundHandle>>> = Rc::new(RefCell::new(None));
	let handle_init = handle.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// Exactly one loop per mounted canvas
		if handle_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match BackgroundHandle::start(canvas, config.clone()) {
			Ok(h) => *handle_init.borrow_mut() = Some(h),
			Err(e) => warn!("neon-bg: background disabled: {}", e),
		}
	});

	let handle_cleanup = SendWrapper::new(handle);
	on_cleanup(move || {
		if let Some(h) = handle_cleanup.take().borrow_mut().take() {
			h.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style=style
		/>
	}
}
