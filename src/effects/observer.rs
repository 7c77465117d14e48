//! One-shot visibility tracking on top of `IntersectionObserver`.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::FxResult;

/// Viewport-relative observation settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visibility {
	/// CSS margin applied to the viewport before testing intersection.
	pub root_margin: &'static str,
	/// Fraction of the target that must be visible.
	pub threshold: f64,
}

/// Call `on_visible` the first time each target intersects, then stop watching it.
pub fn observe_once(
	targets: &[Element],
	visibility: Visibility,
	mut on_visible: impl FnMut(&Element) + 'static,
) -> FxResult<()> {
	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let target = entry.target();
					on_visible(&target);
					observer.unobserve(&target);
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_root_margin(visibility.root_margin);
	options.set_threshold(&JsValue::from_f64(visibility.threshold));
	let observer =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
	for target in targets {
		observer.observe(target);
	}

	// The observer holds the callback for the rest of the page's life.
	callback.forget();
	Ok(())
}
