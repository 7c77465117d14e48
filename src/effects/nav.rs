//! Highlights the nav link of the section currently under the header.

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::FxConfig;
use crate::dom;
use crate::error::FxResult;

pub const SECTION_SELECTOR: &str = "section[id]";
pub const LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// Vertical extent of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
	pub id: String,
	pub top: f64,
	pub height: f64,
}

impl SectionBounds {
	pub fn contains(&self, y: f64) -> bool {
		y >= self.top && y < self.top + self.height
	}
}

/// Id of the section containing `marker`. Later sections win on overlap.
pub fn active_section(marker: f64, sections: &[SectionBounds]) -> Option<&str> {
	sections
		.iter()
		.rev()
		.find(|s| s.contains(marker))
		.map(|s| s.id.as_str())
}

fn section_bounds(document: &Document) -> FxResult<Vec<SectionBounds>> {
	Ok(dom::query_all(document, SECTION_SELECTOR)?
		.into_iter()
		.filter_map(|el| el.dyn_into::<HtmlElement>().ok())
		.map(|section| SectionBounds {
			id: section.id(),
			top: section.offset_top() as f64,
			height: section.offset_height() as f64,
		})
		.collect())
}

fn highlight(document: &Document, marker_offset: f64) -> FxResult<()> {
	let marker = dom::window()?.scroll_y()? + marker_offset;
	let sections = section_bounds(document)?;
	let Some(id) = active_section(marker, &sections) else {
		return Ok(());
	};

	let href = format!("#{id}");
	for link in dom::query_all(document, LINK_SELECTOR)? {
		let active = link.get_attribute("href").as_deref() == Some(href.as_str());
		dom::set_class(&link, ACTIVE_CLASS, active);
	}
	Ok(())
}

pub fn init(document: &Document, config: &FxConfig) -> FxResult<()> {
	let marker_offset = config.nav_marker_offset;
	let doc = document.clone();
	let on_scroll = Closure::<dyn FnMut()>::new(move || {
		if let Err(e) = highlight(&doc, marker_offset) {
			debug!("slonski-gothic: nav highlight skipped: {}", e);
		}
	});
	dom::window()?.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
	on_scroll.forget();

	highlight(document, marker_offset)
}
