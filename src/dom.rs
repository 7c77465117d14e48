//! Small helpers over `web_sys` shared by the effects.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::{FxError, FxResult};

pub fn window() -> FxResult<Window> {
	web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document() -> FxResult<Document> {
	window()?.document().ok_or(FxError::NoDocument)
}

/// Viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> FxResult<(f64, f64)> {
	let width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let height = window.inner_height()?.as_f64().unwrap_or(0.0);
	Ok((width, height))
}

/// Every element matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> FxResult<Vec<Element>> {
	Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
	(0..list.length())
		.filter_map(|i| list.get(i))
		.filter_map(|node| node.dyn_into::<Element>().ok())
		.collect()
}

/// The first element matching `selector` as an [`HtmlElement`].
pub fn query_html(root: &Document, selector: &str) -> FxResult<HtmlElement> {
	root.query_selector(selector)?
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		.ok_or_else(|| FxError::MissingElement(selector.to_string()))
}

/// Set a class on or off.
pub fn set_class(el: &Element, class: &str, on: bool) {
	let classes = el.class_list();
	let _ = if on {
		classes.add_1(class)
	} else {
		classes.remove_1(class)
	};
}
