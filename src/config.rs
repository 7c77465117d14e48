//! Page-level tuning, optionally overridden from the page itself.
//!
//! The page may carry a `<script id="fx-config" type="application/json">`
//! element; any field it omits keeps its default.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

/// Id of the script element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Tunables for the particle field and page effects.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FxConfig {
	/// Particles kept alive on the canvas.
	pub particle_count: usize,
	/// Viewports this wide or narrower have no fixed header to clear.
	pub mobile_breakpoint: f64,
	/// Height of the fixed header on wide viewports.
	pub header_offset: f64,
	/// Distance below the scroll position used to pick the active section.
	pub nav_marker_offset: f64,
	/// Delay before the progress bar fills.
	pub progress_delay_ms: i32,
	/// Fill percentage when `data-progress` is absent or unusable.
	pub progress_default: f64,
	/// Ambient track volume.
	pub audio_volume: f64,
	/// Hero background shift per pixel scrolled.
	pub parallax_factor: f64,
}

impl Default for FxConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			mobile_breakpoint: 768.0,
			header_offset: 150.0,
			nav_marker_offset: 200.0,
			progress_delay_ms: 300,
			progress_default: 98.0,
			audio_volume: 0.3,
			parallax_factor: 0.3,
		}
	}
}

impl FxConfig {
	/// Parse overrides from JSON text.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Load the config from the page, falling back to defaults.
pub fn load_config(document: &Document) -> FxConfig {
	let Some(script) = document
		.get_element_by_id(CONFIG_ELEMENT_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
	else {
		return FxConfig::default();
	};
	let Ok(text) = script.text() else {
		return FxConfig::default();
	};

	match FxConfig::from_json(&text) {
		Ok(config) => {
			info!(
				"slonski-gothic: loaded config ({} particles)",
				config.particle_count
			);
			config
		}
		Err(e) => {
			warn!("slonski-gothic: failed to parse config: {}", e);
			FxConfig::default()
		}
	}
}
