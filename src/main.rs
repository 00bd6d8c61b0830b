//! CSR entry point: mount the app to the document body.

use neural_portfolio::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
