//! Scroll-triggered reveal of section frames.

use log::debug;
use web_sys::Document;

use super::observer::{Visibility, observe_once};
use crate::dom;
use crate::error::FxResult;

/// Elements that fade in when scrolled into view.
pub const FRAME_SELECTOR: &str = ".section-frame";
/// Class marking an element as revealed. Never removed.
pub const REVEALED_CLASS: &str = "revealed";

/// Reveal once 10% is visible, with the viewport's bottom pulled up by 100px.
pub const REVEAL_VISIBILITY: Visibility = Visibility {
	root_margin: "0px 0px -100px 0px",
	threshold: 0.1,
};

pub fn init(document: &Document) -> FxResult<()> {
	let frames = dom::query_all(document, FRAME_SELECTOR)?;
	if frames.is_empty() {
		debug!("slonski-gothic: no section frames to reveal");
		return Ok(());
	}
	observe_once(&frames, REVEAL_VISIBILITY, |frame| {
		dom::set_class(frame, REVEALED_CLASS, true);
	})
}
