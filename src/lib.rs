//! neon-bg: animated particle background for the DefectPrediction front end.
//!
//! This crate provides a WASM canvas component that fills the viewport with
//! drifting neon particles, linking nearby particles with fading gradient lines.
//! The background is purely decorative and never blocks the page it sits under.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

// Selects the `js` entropy backend so `rand` can seed itself on wasm.
use getrandom as _;

pub mod components;

pub use components::particle_background::{BackgroundConfig, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neon-bg: logging initialized");
}

/// Main application shell.
/// Layers the particle background beneath the header and the content slot
/// where the code submission form mounts.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = BackgroundConfig::from_document();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="DefectPrediction" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="app-root">
			<ParticleBackground config=config />
			<header class="app-header">
				<h1>"DefectPrediction"</h1>
				<p class="subtitle">"GraphCodeBERT Neural Vulnerability Scanner"</p>
			</header>
			<main id="app-content" class="app-content"></main>
		</div>
	}
}
