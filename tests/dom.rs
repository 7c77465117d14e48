//! Browser tests for the DOM wiring of the page effects.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use js_sys::Promise;
use leptos::prelude::*;
use slonski_gothic::dom;
use slonski_gothic::effects::{audio, faq, marble, progress};
use slonski_gothic::{FxConfig, ParticleCanvas};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlCanvasElement, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Mount `html` in a fresh container appended to the body.
fn fixture(html: &str) -> Element {
	let document = dom::document().unwrap();
	let root = document.create_element("div").unwrap();
	root.set_inner_html(html);
	document.body().unwrap().append_child(&root).unwrap();
	root
}

fn find(root: &Element, selector: &str) -> HtmlElement {
	root.query_selector(selector)
		.unwrap()
		.unwrap()
		.dyn_into::<HtmlElement>()
		.unwrap()
}

fn click(root: &Element, selector: &str) {
	find(root, selector).click();
}

fn is_active(root: &Element, selector: &str) -> bool {
	find(root, selector).class_list().contains(faq::ACTIVE_CLASS)
}

fn style(el: &HtmlElement, property: &str) -> String {
	el.style().get_property_value(property).unwrap()
}

async fn sleep(ms: i32) {
	let timer = Promise::new(&mut |resolve, _| {
		dom::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
			.unwrap();
	});
	JsFuture::from(timer).await.unwrap();
}

#[wasm_bindgen_test]
fn marble_overlay_becomes_first_child() {
	let root = fixture(
		r#"<div class="section"><p>one</p></div><div class="section"><p>two</p></div>"#,
	);
	let document = dom::document().unwrap();

	assert_eq!(marble::init(&document).unwrap(), 2);

	let sections = dom::query_all(&document, marble::SECTION_SELECTOR).unwrap();
	assert_eq!(sections.len(), 2);
	for section in sections {
		let first = section.first_element_child().unwrap();
		assert_eq!(first.class_name(), marble::OVERLAY_CLASS);
		assert_eq!(first.get_attribute("aria-hidden").as_deref(), Some("true"));
	}
	root.remove();
}

#[wasm_bindgen_test]
fn faq_keeps_at_most_one_item_open() {
	let root = fixture(
		r#"
		<div class="faq-item active" id="faq-a"><button class="faq-question">A?</button></div>
		<div class="faq-item" id="faq-b"><button class="faq-question">B?</button></div>
		"#,
	);
	let document = dom::document().unwrap();
	faq::init(&document).unwrap();

	click(&root, "#faq-b .faq-question");
	assert!(!is_active(&root, "#faq-a"));
	assert!(is_active(&root, "#faq-b"));

	click(&root, "#faq-b .faq-question");
	assert!(!is_active(&root, "#faq-a"));
	assert!(!is_active(&root, "#faq-b"));
	root.remove();
}

#[wasm_bindgen_test]
async fn progress_fills_to_default_after_delay() {
	let root = fixture(r#"<div class="progress-fill" style="display: block; height: 20px;"></div>"#);
	root.set_attribute("style", "position: fixed; top: 0; left: 0; width: 200px;")
		.unwrap();
	let document = dom::document().unwrap();
	let fill = find(&root, progress::FILL_SELECTOR);

	progress::init(&document, &FxConfig::default()).unwrap();
	assert_eq!(style(&fill, "width"), "");

	// Visible by now, but still inside the 300ms delay.
	sleep(100).await;
	assert_eq!(style(&fill, "width"), "");

	sleep(700).await;
	assert_eq!(style(&fill, "width"), "98%");
	root.remove();
}

#[wasm_bindgen_test]
async fn audio_load_error_disables_toggle() {
	let root = fixture(
		r#"
		<button id="audio-toggle"><span class="audio-status">DŹWIĘK</span></button>
		<audio id="ambient-audio"></audio>
		"#,
	);
	let document = dom::document().unwrap();
	audio::init(&document, &FxConfig::default()).unwrap();

	let player = find(&root, "#ambient-audio");
	player.dispatch_event(&Event::new("error").unwrap()).unwrap();

	let button = find(&root, "#audio-toggle");
	assert_eq!(style(&button, "opacity"), "0.5");
	assert_eq!(style(&button, "pointer-events"), "none");

	button.click();
	sleep(50).await;
	assert!(!button.class_list().contains(audio::PLAYING_CLASS));
	assert_eq!(
		find(&root, audio::STATUS_SELECTOR).text_content().as_deref(),
		Some(audio::LABEL_STOPPED)
	);
	root.remove();
}

#[wasm_bindgen_test]
async fn rejected_play_resets_toggle() {
	// No source and no user gesture: the browser rejects play().
	let root = fixture(
		r#"
		<button id="audio-toggle"><span class="audio-status">DŹWIĘK</span></button>
		<audio id="ambient-audio"></audio>
		"#,
	);
	let document = dom::document().unwrap();
	audio::init(&document, &FxConfig::default()).unwrap();

	let button = find(&root, "#audio-toggle");
	let status = find(&root, audio::STATUS_SELECTOR);
	button.click();
	assert!(button.class_list().contains(audio::PLAYING_CLASS));
	assert_eq!(status.text_content().as_deref(), Some(audio::LABEL_PLAYING));

	sleep(300).await;
	assert!(!button.class_list().contains(audio::PLAYING_CLASS));
	assert_eq!(status.text_content().as_deref(), Some(audio::LABEL_STOPPED));
	root.remove();
}

#[wasm_bindgen_test]
async fn particle_canvas_tracks_viewport_on_resize() {
	let root = fixture("");
	let container: HtmlElement = root.clone().dyn_into().unwrap();
	let handle = leptos::mount::mount_to(container, || view! { <ParticleCanvas count=5 /> });

	// Let the mount effect run.
	sleep(100).await;

	let window = dom::window().unwrap();
	let (width, height) = dom::viewport_size(&window).unwrap();
	let canvas: HtmlCanvasElement = root
		.query_selector("canvas#particles")
		.unwrap()
		.unwrap()
		.dyn_into()
		.unwrap();
	assert_eq!(canvas.width(), width as u32);
	assert_eq!(canvas.height(), height as u32);
	assert_eq!(style(&canvas, "z-index"), "-1");

	canvas.set_width(1);
	canvas.set_height(1);
	window.dispatch_event(&Event::new("resize").unwrap()).unwrap();
	assert_eq!(canvas.width(), width as u32);
	assert_eq!(canvas.height(), height as u32);

	handle.forget();
	root.remove();
}
