//! Smooth scrolling for same-page anchors, clearing the fixed header.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, ScrollBehavior, ScrollToOptions};

use crate::config::FxConfig;
use crate::dom;
use crate::error::FxResult;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Geometry read at click time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
	/// Target's top edge relative to the viewport.
	pub target_top: f64,
	pub scroll_y: f64,
	pub viewport_width: f64,
	pub viewport_height: f64,
	/// Full scrollable height of the document.
	pub document_height: f64,
}

/// Height of the fixed header to clear; narrow viewports have none.
pub fn header_offset(viewport_width: f64, config: &FxConfig) -> f64 {
	if viewport_width <= config.mobile_breakpoint {
		0.0
	} else {
		config.header_offset
	}
}

/// Scroll position that puts the target just under the header, without
/// overshooting the bottom of the document.
pub fn scroll_destination(metrics: &ScrollMetrics, config: &FxConfig) -> f64 {
	let desired = metrics.target_top + metrics.scroll_y
		- header_offset(metrics.viewport_width, config);
	let max_scroll = metrics.document_height - metrics.viewport_height;
	desired.min(max_scroll)
}

pub fn init(document: &Document, config: &FxConfig) -> FxResult<()> {
	let anchors = dom::query_all(document, ANCHOR_SELECTOR)?;
	debug!("slonski-gothic: smooth scroll on {} anchors", anchors.len());

	for anchor in anchors {
		let (doc, config, link) = (document.clone(), config.clone(), anchor.clone());
		let on_click = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			ev.prevent_default();
			let Some(href) = link.get_attribute("href") else {
				return;
			};
			// A bare "#" is not a valid selector; treat it like a missing target.
			let Ok(Some(target)) = doc.query_selector(&href) else {
				return;
			};
			let Ok(window) = dom::window() else {
				return;
			};
			let Ok((viewport_width, viewport_height)) = dom::viewport_size(&window) else {
				return;
			};
			let metrics = ScrollMetrics {
				target_top: target.get_bounding_client_rect().top(),
				scroll_y: window.page_y_offset().unwrap_or(0.0),
				viewport_width,
				viewport_height,
				document_height: doc
					.document_element()
					.map(|root| root.scroll_height() as f64)
					.unwrap_or(viewport_height),
			};

			let options = ScrollToOptions::new();
			options.set_top(scroll_destination(&metrics, &config));
			options.set_behavior(ScrollBehavior::Smooth);
			window.scroll_to_with_scroll_to_options(&options);
		});
		anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn metrics(target_top: f64, viewport_width: f64) -> ScrollMetrics {
		ScrollMetrics {
			target_top,
			scroll_y: 400.0,
			viewport_width,
			viewport_height: 800.0,
			document_height: 5000.0,
		}
	}

	#[test]
	fn wide_viewport_clears_header() {
		let config = FxConfig::default();
		assert_eq!(scroll_destination(&metrics(1000.0, 1280.0), &config), 1250.0);
	}

	#[test]
	fn narrow_viewport_has_no_header() {
		let config = FxConfig::default();
		assert_eq!(header_offset(768.0, &config), 0.0);
		assert_eq!(header_offset(769.0, &config), 150.0);
		assert_eq!(scroll_destination(&metrics(1000.0, 768.0), &config), 1400.0);
	}

	#[test]
	fn clamps_to_bottom_of_document() {
		let config = FxConfig::default();
		// 4500 + 400 - 150 = 4750, max is 5000 - 800 = 4200.
		assert_eq!(scroll_destination(&metrics(4500.0, 1280.0), &config), 4200.0);
	}
}
