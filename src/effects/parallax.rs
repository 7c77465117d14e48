//! Hero background parallax.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::FxConfig;
use crate::dom;
use crate::error::FxResult;

pub const HERO_SELECTOR: &str = ".hero";

/// Vertical background offset for a given scroll position.
pub fn parallax_offset(scroll_y: f64, factor: f64) -> f64 {
	scroll_y * factor
}

pub fn init(document: &Document, config: &FxConfig) -> FxResult<()> {
	let hero = match dom::query_html(document, HERO_SELECTOR) {
		Ok(hero) => hero,
		Err(_) => {
			debug!("slonski-gothic: no hero, parallax skipped");
			return Ok(());
		}
	};
	let window = dom::window()?;
	let factor = config.parallax_factor;

	let win = window.clone();
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		let scrolled = win.page_y_offset().unwrap_or(0.0);
		let _ = hero.style().set_property(
			"background-position-y",
			&format!("{}px", parallax_offset(scrolled, factor)),
		);
	});
	window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
	on_scroll.forget();
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn offset_scales_with_scroll() {
		assert_eq!(parallax_offset(0.0, 0.3), 0.0);
		assert!((parallax_offset(1000.0, 0.3) - 300.0).abs() < 1e-9);
	}
}
