//! Stop hook for the `requestAnimationFrame` loop.

use std::cell::Cell;
use std::rc::Rc;

/// Shared handle deciding whether the animation loop keeps scheduling frames.
///
/// Clones share the same flag, so a clone handed to a `pagehide` listener can
/// stop the loop driven from the animation closure.
#[derive(Clone, Debug)]
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	frames: Rc<Cell<u64>>,
}

impl Default for FrameLoop {
	fn default() -> Self {
		Self::new()
	}
}

impl FrameLoop {
	pub fn new() -> Self {
		Self {
			running: Rc::new(Cell::new(true)),
			frames: Rc::new(Cell::new(0)),
		}
	}

	/// Run `frame` if the loop is still live. Returns whether to schedule another.
	pub fn tick(&self, frame: impl FnOnce()) -> bool {
		if !self.running.get() {
			return false;
		}
		frame();
		self.frames.set(self.frames.get() + 1);
		self.running.get()
	}

	pub fn stop(&self) {
		self.running.set(false);
	}

	pub fn is_running(&self) -> bool {
		self.running.get()
	}

	/// Frames rendered so far.
	pub fn frames(&self) -> u64 {
		self.frames.get()
	}
}
