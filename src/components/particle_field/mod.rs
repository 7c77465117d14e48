//! Ambient ember and dust particle field.
//!
//! Renders a constant population of softly glowing particles drifting up a
//! full-viewport canvas behind the page content:
//! - Pure particle model with explicit, injectable randomness
//! - Per-frame update and redraw driven by `requestAnimationFrame`
//! - Canvas kept at viewport size across window resizes
//! - A stop hook so the loop can be shut down cleanly
//!
//! # Example
//!
//! ```ignore
//! use slonski_gothic::ParticleCanvas;
//!
//! view! { <ParticleCanvas count=50 /> }
//! ```

mod component;
pub mod frame_loop;
pub mod particles;
mod render;
pub mod theme;

pub use component::ParticleCanvas;
pub use frame_loop::FrameLoop;
pub use particles::{Particle, ParticleField};
pub use theme::{Color, ParticleKind, ParticleStyle};
