//! Page effects attached once at start-up.
//!
//! Each effect is independent: a missing element turns it into a no-op and a
//! failure in one never stops the others from being attached.

pub mod audio;
pub mod faq;
pub mod marble;
pub mod nav;
mod observer;
pub mod parallax;
pub mod progress;
pub mod reveal;
pub mod scroll;

use log::{info, warn};
use web_sys::Document;

use crate::config::FxConfig;
use crate::error::FxResult;

pub use observer::Visibility;

fn report(effect: &str, result: FxResult<()>) {
	if let Err(e) = result {
		warn!("slonski-gothic: {effect} disabled: {e}");
	}
}

/// Attach every page effect to `document`.
pub fn init_page_effects(document: &Document, config: &FxConfig) {
	match marble::init(document) {
		Ok(count) => info!("slonski-gothic: {count} marble overlays"),
		Err(e) => warn!("slonski-gothic: marble overlays disabled: {e}"),
	}
	report("progress bar", progress::init(document, config));
	report("faq", faq::init(document));
	report("audio toggle", audio::init(document, config));
	report("smooth scroll", scroll::init(document, config));
	report("nav highlight", nav::init(document, config));
	report("scroll reveal", reveal::init(document));
	report("parallax", parallax::init(document, config));
}
