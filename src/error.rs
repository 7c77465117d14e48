//! Errors raised while wiring effects into the page.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur while attaching effects to the DOM.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
	/// No global `window` (not running in a browser).
	#[error("no window available")]
	NoWindow,

	/// The window has no document.
	#[error("no document available")]
	NoDocument,

	/// A required element is absent from the page.
	#[error("element not found: {0}")]
	MissingElement(String),

	/// The canvas refused to hand out a 2d context.
	#[error("canvas 2d context unavailable")]
	NoCanvasContext,

	/// A JS call threw; holds the stringified exception.
	#[error("javascript error: {0}")]
	Js(String),
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Result alias for effect wiring.
pub type FxResult<T> = Result<T, FxError>;
