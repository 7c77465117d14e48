//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use slonski_gothic::{App, init_logging, init_page};

fn main() {
	init_logging();
	let config = init_page();

	mount_to_body(move || {
		view! { <App config=config /> }
	})
}
