//! slonski-gothic: ambient effects for the Ślonski Gothic site.
//!
//! This crate provides a WASM-based particle field that renders rising embers
//! and dust behind the page, plus the small DOM effects the page relies on:
//! scroll reveals, a progress bar, the FAQ accordion, the ambient audio
//! toggle, smooth anchor scrolling, nav highlighting and hero parallax.

use leptos::prelude::*;
use log::{Level, info, warn};

pub mod components;
pub mod config;
pub mod dom;
pub mod effects;
pub mod error;

pub use components::particle_field::{ParticleCanvas, ParticleField, ParticleStyle};
pub use config::{FxConfig, load_config};
pub use error::{FxError, FxResult};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("slonski-gothic: logging initialized");
}

/// Read the page config and attach every DOM effect.
///
/// Returns the config so the caller can size the particle field from it.
pub fn init_page() -> FxConfig {
	match dom::document() {
		Ok(document) => {
			let config = load_config(&document);
			effects::init_page_effects(&document, &config);
			config
		}
		Err(e) => {
			warn!("slonski-gothic: page effects disabled: {}", e);
			FxConfig::default()
		}
	}
}

/// Main application component.
/// Renders the ambient particle canvas behind the static page.
#[component]
pub fn App(config: FxConfig) -> impl IntoView {
	view! { <ParticleCanvas count=config.particle_count /> }
}
