//! Stone-wall texture overlays for page sections.

use web_sys::Document;

use crate::dom;
use crate::error::FxResult;

/// Sections that receive an overlay.
pub const SECTION_SELECTOR: &str = ".section";
/// Class given to each injected overlay.
pub const OVERLAY_CLASS: &str = "section-marble-overlay";

/// Insert one decorative overlay as the first child of every section.
///
/// Returns the number of overlays inserted.
pub fn init(document: &Document) -> FxResult<usize> {
	let sections = dom::query_all(document, SECTION_SELECTOR)?;
	for section in &sections {
		let overlay = document.create_element("div")?;
		overlay.set_class_name(OVERLAY_CLASS);
		overlay.set_attribute("aria-hidden", "true")?;
		section.insert_before(&overlay, section.first_child().as_ref())?;
	}
	Ok(sections.len())
}
