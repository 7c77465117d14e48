//! Leptos component wrapping the particle canvas.
//!
//! The component creates a fixed, full-viewport canvas sized to the window and
//! keeps it sized on `resize`. An animation loop runs via
//! `requestAnimationFrame`, advancing the field and redrawing it each frame
//! until the page is unloaded for good (a `pagehide` that is not headed for
//! the back/forward cache).

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PageTransitionEvent};

use super::frame_loop::FrameLoop;
use super::particles::ParticleField;
use super::render;
use super::theme::ParticleStyle;
use crate::dom;
use crate::error::{FxError, FxResult};

type Field = ParticleField<StdRng>;
type Callback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// State shared between the animation, resize and pagehide callbacks.
#[derive(Clone, Default)]
struct Shared {
	field: Rc<RefCell<Option<Field>>>,
	animate: Callback,
	resize: Callback,
	pagehide: Rc<RefCell<Option<Closure<dyn FnMut(PageTransitionEvent)>>>>,
	frame_loop: FrameLoop,
}

/// Seed for the particle RNG. Visual only, so browser randomness is plenty.
fn entropy_seed() -> u64 {
	let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
	let clock = js_sys::Date::now() as u64;
	(noise << 32) ^ clock
}

/// Renders the ambient ember field on a full-viewport canvas.
///
/// The canvas ignores pointer events and is stacked below page content
/// (`z-index: -1`), whatever its position in the body.
#[component]
pub fn ParticleCanvas(#[prop(default = 50)] count: usize) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let shared = Shared::default();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if shared.field.borrow().is_some() {
			return;
		}
		if let Err(e) = start(canvas.into(), count, &shared) {
			warn!("slonski-gothic: particle field disabled: {}", e);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particles"
			class="particles-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; display: block; pointer-events: none;"
		/>
	}
}

fn start(canvas: HtmlCanvasElement, count: usize, shared: &Shared) -> FxResult<()> {
	let window = dom::window()?;
	let (w, h) = dom::viewport_size(&window)?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let ctx = canvas
		.get_context("2d")?
		.ok_or(FxError::NoCanvasContext)?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(|_| FxError::NoCanvasContext)?;

	let rng = StdRng::seed_from_u64(entropy_seed());
	*shared.field.borrow_mut() = Some(ParticleField::new(
		ParticleStyle::embers(count),
		w,
		h,
		rng,
	));
	info!("slonski-gothic: particle field {w}x{h} with {count} particles");

	let (field_resize, canvas_resize) = (shared.field.clone(), canvas.clone());
	*shared.resize.borrow_mut() = Some(Closure::new(move || {
		let Ok((nw, nh)) = dom::window().and_then(|win| dom::viewport_size(&win)) else {
			return;
		};
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		if let Some(ref mut f) = *field_resize.borrow_mut() {
			f.resize(nw, nh);
		}
	}));
	if let Some(ref cb) = *shared.resize.borrow() {
		window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref())?;
	}

	let stopper = shared.frame_loop.clone();
	*shared.pagehide.borrow_mut() = Some(Closure::new(move |ev: PageTransitionEvent| {
		if ev.persisted() {
			return;
		}
		stopper.stop();
		info!(
			"slonski-gothic: particle loop stopped after {} frames",
			stopper.frames()
		);
	}));
	if let Some(ref cb) = *shared.pagehide.borrow() {
		window.add_event_listener_with_callback("pagehide", cb.as_ref().unchecked_ref())?;
	}

	let (field_anim, animate_inner, frame_loop) = (
		shared.field.clone(),
		shared.animate.clone(),
		shared.frame_loop.clone(),
	);
	*shared.animate.borrow_mut() = Some(Closure::new(move || {
		let again = frame_loop.tick(|| {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.update();
				render::render(&ctx, f);
			}
		});
		if !again {
			return;
		}
		if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
			let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	}));
	if let Some(ref cb) = *shared.animate.borrow() {
		window.request_animation_frame(cb.as_ref().unchecked_ref())?;
	}

	Ok(())
}
