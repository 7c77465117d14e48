//! FAQ accordion: at most one answer open at a time.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom;
use crate::error::FxResult;

pub const ITEM_SELECTOR: &str = ".faq-item";
pub const QUESTION_SELECTOR: &str = ".faq-question";
/// Class marking the open item.
pub const ACTIVE_CLASS: &str = "active";

/// Which item, if any, is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
	open: Option<usize>,
}

impl Accordion {
	pub fn with_open(open: Option<usize>) -> Self {
		Self { open }
	}

	/// Open `index`, closing any other; close it if it was already open.
	pub fn toggle(&mut self, index: usize) {
		self.open = if self.open == Some(index) {
			None
		} else {
			Some(index)
		};
	}

	pub fn is_open(&self, index: usize) -> bool {
		self.open == Some(index)
	}

	pub fn open_item(&self) -> Option<usize> {
		self.open
	}
}

pub fn init(document: &Document) -> FxResult<()> {
	let items = dom::query_all(document, ITEM_SELECTOR)?;
	if items.is_empty() {
		debug!("slonski-gothic: no FAQ items");
		return Ok(());
	}

	let initially_open = items
		.iter()
		.position(|item| item.class_list().contains(ACTIVE_CLASS));
	let state = Rc::new(RefCell::new(Accordion::with_open(initially_open)));
	let items = Rc::new(items);

	for (index, item) in items.iter().enumerate() {
		let Some(question) = item.query_selector(QUESTION_SELECTOR)? else {
			debug!("slonski-gothic: FAQ item {index} has no question");
			continue;
		};

		let (state, items) = (state.clone(), items.clone());
		let on_click = Closure::<dyn FnMut()>::new(move || {
			let mut accordion = state.borrow_mut();
			accordion.toggle(index);
			for (i, item) in items.iter().enumerate() {
				dom::set_class(item, ACTIVE_CLASS, accordion.is_open(i));
			}
		});
		question.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
	}
	Ok(())
}
