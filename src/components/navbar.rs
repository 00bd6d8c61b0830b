//! Fixed navigation bar: mobile menu, scroll styling, active-link tracking.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::tasks::WindowListener;
use crate::util::Throttle;

/// Section anchors shown in the navigation bar, in page order.
const SECTIONS: &[(&str, &str)] = &[
	("home", "Home"),
	("about", "About"),
	("projects", "Projects"),
	("skills", "Skills"),
	("resume", "Resume"),
	("contact", "Contact"),
];

const NAVBAR_HEIGHT: f64 = 70.0;
const ACTIVATION_MARGIN: f64 = 200.0;
const SCROLLED_AFTER: f64 = 50.0;
const SCROLL_THROTTLE_MS: f64 = 16.0;

/// The id of the lowest section whose top has scrolled into the activation
/// margin, given `(id, offset_top)` pairs in page order.
fn active_section<'a>(scroll_y: f64, offsets: &[(&'a str, f64)]) -> Option<&'a str> {
	offsets
		.iter()
		.filter(|&&(_, top)| scroll_y >= top - ACTIVATION_MARGIN)
		.map(|&(id, _)| id)
		.last()
}

fn section_offsets() -> Vec<(&'static str, f64)> {
	let document = web_sys::window().unwrap().document().unwrap();
	SECTIONS
		.iter()
		.filter_map(|&(id, _)| {
			let element = document.get_element_by_id(id)?;
			let element: HtmlElement = element.dyn_into().ok()?;
			Some((id, element.offset_top() as f64))
		})
		.collect()
}

/// Smooth-scrolls so `id`'s section top sits just under the fixed navbar.
pub(crate) fn scroll_to_section(id: &str) {
	let window = web_sys::window().unwrap();
	let Some(element) = window.document().unwrap().get_element_by_id(id) else {
		return;
	};
	let Ok(element) = element.dyn_into::<HtmlElement>() else {
		return;
	};
	let options = ScrollToOptions::new();
	options.set_top(element.offset_top() as f64 - NAVBAR_HEIGHT);
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
}

/// The site's fixed navigation bar.
#[component]
pub fn NavBar() -> impl IntoView {
	let (menu_open, set_menu_open) = signal(false);
	let (scrolled, set_scrolled) = signal(false);
	let (active, set_active) = signal(None::<&'static str>);
	let listener: Rc<RefCell<Option<WindowListener>>> = Rc::new(RefCell::new(None));

	// Shared by the scroll listener and the initial check on mount.
	let update = move || {
		let y = web_sys::window().unwrap().scroll_y().unwrap_or(0.0);
		set_scrolled.set(y > SCROLLED_AFTER);
		set_active.set(active_section(y, &section_offsets()));
	};

	let listener_init = listener.clone();
	Effect::new(move |_| {
		let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
		*listener_init.borrow_mut() = Some(WindowListener::listen("scroll", move |_| {
			if throttle.accept(js_sys::Date::now()) {
				update();
			}
		}));
		update();
	});

	on_cleanup(move || {
		listener.borrow_mut().take();
	});

	view! {
		<nav class="navbar" class:scrolled=scrolled>
			<div class="nav-container">
				<a
					href="#home"
					class="nav-logo"
					on:click=move |ev| {
						ev.prevent_default();
						scroll_to_section("home");
					}
				>
					"HS"
					<span class="logo-dot">"."</span>
				</a>
				<ul class="nav-menu" class:active=menu_open>
					{SECTIONS
						.iter()
						.map(|&(id, label)| {
							view! {
								<li>
									<a
										href=format!("#{id}")
										class="nav-link"
										class:active=move || active.get() == Some(id)
										on:click=move |ev| {
											ev.prevent_default();
											scroll_to_section(id);
											set_menu_open.set(false);
										}
									>
										{label}
									</a>
								</li>
							}
						})
						.collect_view()}
				</ul>
				<div
					class="hamburger"
					class:active=menu_open
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					<span class="bar"></span>
					<span class="bar"></span>
					<span class="bar"></span>
				</div>
			</div>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const OFFSETS: &[(&str, f64)] = &[
		("home", 0.0),
		("about", 600.0),
		("projects", 1400.0),
		("contact", 2400.0),
	];

	#[test]
	fn top_of_page_activates_the_first_section() {
		assert_eq!(active_section(0.0, OFFSETS), Some("home"));
	}

	#[test]
	fn sections_activate_within_the_margin() {
		assert_eq!(active_section(399.0, OFFSETS), Some("home"));
		assert_eq!(active_section(400.0, OFFSETS), Some("about"));
		assert_eq!(active_section(1300.0, OFFSETS), Some("projects"));
	}

	#[test]
	fn the_lowest_reached_section_wins() {
		assert_eq!(active_section(10_000.0, OFFSETS), Some("contact"));
	}

	#[test]
	fn no_sections_means_no_active_link() {
		assert_eq!(active_section(100.0, &[]), None);
	}
}
