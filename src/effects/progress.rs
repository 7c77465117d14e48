//! Progress bar that fills once scrolled into view.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use super::observer::{Visibility, observe_once};
use crate::config::FxConfig;
use crate::dom;
use crate::error::FxResult;

pub const FILL_SELECTOR: &str = ".progress-fill";
/// Attribute carrying the target fill percentage.
pub const TARGET_ATTRIBUTE: &str = "data-progress";

/// Fill once half the bar is visible.
pub const FILL_VISIBILITY: Visibility = Visibility {
	root_margin: "0px",
	threshold: 0.5,
};

/// Target percentage from the raw attribute value.
///
/// Absent, blank or non-numeric values fall back to `fallback`.
pub fn progress_target(attribute: Option<&str>, fallback: f64) -> f64 {
	attribute
		.map(str::trim)
		.and_then(|raw| raw.parse::<f64>().ok())
		.filter(|v| v.is_finite())
		.unwrap_or(fallback)
}

/// CSS width for a fill percentage.
pub fn fill_width(target: f64) -> String {
	format!("{target}%")
}

pub fn init(document: &Document, config: &FxConfig) -> FxResult<()> {
	let fill: HtmlElement = match dom::query_html(document, FILL_SELECTOR) {
		Ok(fill) => fill,
		Err(_) => {
			debug!("slonski-gothic: no progress bar on page");
			return Ok(());
		}
	};
	let width = fill_width(progress_target(
		fill.get_attribute(TARGET_ATTRIBUTE).as_deref(),
		config.progress_default,
	));
	let delay_ms = config.progress_delay_ms;

	let target = fill.clone();
	observe_once(&[fill.into()], FILL_VISIBILITY, move |_| {
		let (target, width) = (target.clone(), width.clone());
		let apply = Closure::once_into_js(move || {
			let _ = target.style().set_property("width", &width);
		});
		if let Ok(window) = dom::window() {
			let _ = window
				.set_timeout_with_callback_and_timeout_and_arguments_0(apply.unchecked_ref(), delay_ms);
		}
	})
}
