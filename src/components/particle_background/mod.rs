//! Animated neon particle background.
//!
//! Fills the viewport with slowly drifting particles and links every pair that
//! drifts close together:
//! - Constant-velocity motion with edge wraparound
//! - Per-particle glow from a fixed neon palette
//! - Gradient links that fade out with distance
//! - Population proportional to viewport area, rebuilt on resize
//!
//! # Example
//!
//! ```ignore
//! use neon_bg::{BackgroundConfig, ParticleBackground};
//!
//! view! {
//!     <ParticleBackground config=BackgroundConfig { link_distance: 120.0, ..Default::default() } />
//!     <main class="content">"..."</main>
//! }
//! ```

mod component;
pub mod config;
pub mod field;
pub mod palette;
pub mod render;
pub mod renderer;
pub mod surface;
#[cfg(test)]
mod testing;
mod web;

pub use component::ParticleBackground;
pub use config::BackgroundConfig;
pub use field::{Particle, ParticleField};
pub use renderer::{BackgroundRenderer, FrameScheduler, LoopState};
pub use surface::{Surface, SurfaceError};
