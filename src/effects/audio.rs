//! Ambient audio toggle button.
//!
//! [`AudioToggle`] owns the play state; the DOM wiring only translates clicks
//! and media events into calls on it and mirrors the result onto the button.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, HtmlElement, HtmlMediaElement};

use crate::config::FxConfig;
use crate::dom;
use crate::error::{FxError, FxResult};

pub const BUTTON_ID: &str = "audio-toggle";
pub const AUDIO_ID: &str = "ambient-audio";
pub const STATUS_SELECTOR: &str = ".audio-status";
pub const PLAYING_CLASS: &str = "playing";

/// Button label while silent.
pub const LABEL_STOPPED: &str = "DŹWIĘK";
/// Button label while the track plays.
pub const LABEL_PLAYING: &str = "GRA";

/// Where the toggle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Playback {
	#[default]
	Stopped,
	Playing,
	/// The track failed to load. Terminal for the session.
	Disabled,
}

/// What the media element should do after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioCommand {
	/// Start playback; `attempt` identifies this `play()` call when it settles.
	Play { attempt: u32 },
	Pause,
}

/// Play state of the ambient track.
#[derive(Clone, Debug, Default)]
pub struct AudioToggle {
	state: Playback,
	/// Id of the most recent play attempt.
	attempt: u32,
}

impl AudioToggle {
	pub fn state(&self) -> Playback {
		self.state
	}

	pub fn is_playing(&self) -> bool {
		self.state == Playback::Playing
	}

	/// Flip between playing and stopped. Disabled toggles ignore clicks.
	pub fn click(&mut self) -> Option<AudioCommand> {
		match self.state {
			Playback::Stopped => {
				self.state = Playback::Playing;
				self.attempt = self.attempt.wrapping_add(1);
				Some(AudioCommand::Play {
					attempt: self.attempt,
				})
			}
			Playback::Playing => {
				self.state = Playback::Stopped;
				Some(AudioCommand::Pause)
			}
			Playback::Disabled => None,
		}
	}

	/// The host refused to start playback (autoplay policy and the like).
	///
	/// Rejections of anything but the latest attempt are stale and ignored.
	pub fn play_rejected(&mut self, attempt: u32) {
		if attempt == self.attempt && self.state == Playback::Playing {
			self.state = Playback::Stopped;
		}
	}

	/// The track reached its end.
	pub fn ended(&mut self) {
		if self.state == Playback::Playing {
			self.state = Playback::Stopped;
		}
	}

	/// The track cannot be loaded or decoded.
	pub fn failed(&mut self) {
		self.state = Playback::Disabled;
	}

	pub fn label(&self) -> &'static str {
		if self.is_playing() {
			LABEL_PLAYING
		} else {
			LABEL_STOPPED
		}
	}
}

/// Mirror the toggle onto the button's class and label.
fn show(button: &HtmlElement, toggle: &AudioToggle) {
	dom::set_class(button, PLAYING_CLASS, toggle.is_playing());
	if let Ok(Some(status)) = button.query_selector(STATUS_SELECTOR) {
		status.set_text_content(Some(toggle.label()));
	}
}

fn disable(button: &HtmlElement) {
	let style = button.style();
	let _ = style.set_property("opacity", "0.5");
	let _ = style.set_property("pointer-events", "none");
}

pub fn init(document: &Document, config: &FxConfig) -> FxResult<()> {
	let (Some(button), Some(audio)) = (
		document.get_element_by_id(BUTTON_ID),
		document.get_element_by_id(AUDIO_ID),
	) else {
		info!("slonski-gothic: no audio controls on page");
		return Ok(());
	};
	let button: HtmlElement = button
		.dyn_into()
		.map_err(|_| FxError::MissingElement(format!("#{BUTTON_ID}")))?;
	let audio: HtmlMediaElement = audio
		.dyn_into()
		.map_err(|_| FxError::MissingElement(format!("#{AUDIO_ID}")))?;

	audio.set_volume(config.audio_volume);
	let toggle = Rc::new(RefCell::new(AudioToggle::default()));

	let on_click = {
		let (toggle, button, audio) = (toggle.clone(), button.clone(), audio.clone());
		Closure::<dyn FnMut()>::new(move || {
			let command = toggle.borrow_mut().click();
			match command {
				Some(AudioCommand::Play { attempt }) => {
					show(&button, &toggle.borrow());
					let played = audio.play();
					let (toggle, button) = (toggle.clone(), button.clone());
					spawn_local(async move {
						let result = match played {
							Ok(promise) => JsFuture::from(promise).await.map(|_| ()),
							Err(err) => Err(err),
						};
						if let Err(err) = result {
							warn!("slonski-gothic: audio playback failed: {:?}", err);
							let mut t = toggle.borrow_mut();
							t.play_rejected(attempt);
							show(&button, &t);
						}
					});
				}
				Some(AudioCommand::Pause) => {
					let _ = audio.pause();
					show(&button, &toggle.borrow());
				}
				None => {}
			}
		})
	};
	button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
	on_click.forget();

	let on_ended = {
		let (toggle, button) = (toggle.clone(), button.clone());
		Closure::<dyn FnMut()>::new(move || {
			let mut t = toggle.borrow_mut();
			t.ended();
			show(&button, &t);
		})
	};
	audio.add_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref())?;
	on_ended.forget();

	let on_error = Closure::<dyn FnMut()>::new(move || {
		warn!("slonski-gothic: audio file not found or cannot be played");
		let mut t = toggle.borrow_mut();
		t.failed();
		show(&button, &t);
		disable(&button);
	});
	audio.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())?;
	on_error.forget();

	Ok(())
}
