//! The portfolio page: hero, about, projects, skills, resume and contact.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
	Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
	KeyboardEvent,
};

use crate::components::binary_rain::BinaryRain;
use crate::components::contact::ContactForm;
use crate::components::navbar::{NavBar, scroll_to_section};
use crate::components::neural_network::NeuralNetworkCanvas;
use crate::components::notification::Notifier;
use crate::components::projects::ProjectsSection;
use crate::components::resume::ResumeCard;
use crate::components::typing::TypingText;
use crate::tasks::{self, WindowListener};
use crate::util::{KonamiTracker, Throttle};

const REVEAL_SELECTOR: &str = ".project-card, .skill-category, .contact-item, .resume-card";
const PARALLAX_RATE: f64 = -0.5;
const SCROLL_THROTTLE_MS: f64 = 16.0;
const RAINBOW_MS: i32 = 5000;

/// Marks elements with `fade-in-up` once they scroll into view.
struct RevealObserver {
	observer: IntersectionObserver,
	_callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl RevealObserver {
	fn observe(document: &Document, selector: &str) -> Option<Self> {
		let callback: Closure<dyn FnMut(js_sys::Array)> =
			Closure::new(|entries: js_sys::Array| {
				for entry in entries.iter() {
					let entry: IntersectionObserverEntry = entry.unchecked_into();
					if entry.is_intersecting() {
						let _ = entry.target().class_list().add_1("fade-in-up");
					}
				}
			});

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(0.1));
		options.set_root_margin("0px 0px -50px 0px");
		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
				.ok()?;

		let nodes = document.query_selector_all(selector).ok()?;
		for index in 0..nodes.length() {
			if let Some(node) = nodes.item(index) {
				let element: Element = node.unchecked_into();
				let _ = element.class_list().add_1("loading");
				observer.observe(&element);
			}
		}

		Some(RevealObserver {
			observer,
			_callback: callback,
		})
	}
}

impl Drop for RevealObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}

/// Everything the page registers against the browser, torn down on unmount.
#[derive(Default)]
struct PageTasks {
	listeners: Vec<WindowListener>,
	reveals: Option<RevealObserver>,
}

fn body_rainbow(notifier: Notifier) {
	notifier.success("Easter egg activated! You found the secret code!");
	let Some(body) = web_sys::window().unwrap().document().unwrap().body() else {
		return;
	};
	let _ = body.class_list().add_1("rainbow");
	tasks::fire_and_forget(RAINBOW_MS, move || {
		let _ = body.class_list().remove_1("rainbow");
	});
}

/// The portfolio landing page.
#[component]
pub fn Home() -> impl IntoView {
	let notifier = Notifier::expect();
	let (parallax, set_parallax) = signal(0.0_f64);
	let page_tasks: Rc<RefCell<PageTasks>> = Rc::new(RefCell::new(PageTasks::default()));

	let tasks_init = page_tasks.clone();
	Effect::new(move |_| {
		let mut registry = tasks_init.borrow_mut();
		if registry.reveals.is_some() {
			return;
		}
		let document = web_sys::window().unwrap().document().unwrap();
		registry.reveals = RevealObserver::observe(&document, REVEAL_SELECTOR);

		let mut throttle = Throttle::new(SCROLL_THROTTLE_MS);
		registry.listeners.push(WindowListener::listen("scroll", move |_| {
			if throttle.accept(js_sys::Date::now()) {
				let y = web_sys::window().unwrap().scroll_y().unwrap_or(0.0);
				set_parallax.set(y * PARALLAX_RATE);
			}
		}));

		let mut tracker = KonamiTracker::new();
		registry.listeners.push(WindowListener::listen("keydown", move |ev| {
			let Ok(ev) = ev.dyn_into::<KeyboardEvent>() else {
				return;
			};
			if tracker.push(ev.key_code()) {
				body_rainbow(notifier);
			}
		}));
	});

	on_cleanup(move || {
		let mut registry = page_tasks.borrow_mut();
		registry.listeners.clear();
		registry.reveals.take();
	});

	view! {
		<NavBar />
		<main>
			<HeroSection parallax=parallax />
			<AboutSection />
			<ProjectsSection />
			<SkillsSection />
			<section id="resume" class="resume">
				<h2 class="section-title">"Resume"</h2>
				<ResumeCard />
			</section>
			<ContactSection />
		</main>
		<footer class="footer">
			<p>"Hritik Singh. Built with Rust, Leptos and too much coffee."</p>
		</footer>
	}
}

#[component]
fn HeroSection(parallax: ReadSignal<f64>) -> impl IntoView {
	view! {
		<section id="home" class="hero">
			<div
				class="hero-background"
				style:transform=move || format!("translateY({}px)", parallax.get())
			>
				<BinaryRain />
			</div>
			<div class="hero-content">
				<h1>"Hritik Singh"</h1>
				<h2 class="hero-subtitle">"I'm a " <TypingText /></h2>
				<p class="hero-description">
					"I build intelligent systems that learn, adapt and ship, from research \
					 notebooks all the way to production."
				</p>
				<div class="hero-buttons">
					<button class="btn btn-primary" on:click=move |_| scroll_to_section("projects")>
						"View My Work"
					</button>
					<button class="btn btn-secondary" on:click=move |_| scroll_to_section("contact")>
						"Get In Touch"
					</button>
				</div>
			</div>
			<div class="hero-visual">
				<NeuralNetworkCanvas />
			</div>
		</section>
	}
}

#[component]
fn AboutSection() -> impl IntoView {
	view! {
		<section id="about" class="about">
			<h2 class="section-title">"About Me"</h2>
			<div class="about-grid">
				<div class="about-text">
					<p>
						"AI engineer with six years across the stack: data wrangling, model \
						 architecture, training infrastructure and the unglamorous plumbing \
						 that keeps it all running."
					</p>
					<p>
						"Currently focused on deep learning systems for computer vision and \
						 NLP, and on making them fast enough to matter."
					</p>
				</div>
				<div class="about-stats">
					<div class="stat">
						<span class="stat-number">"6+"</span>
						<span class="stat-label">"Years Experience"</span>
					</div>
					<div class="stat">
						<span class="stat-number">"20+"</span>
						<span class="stat-label">"Models Shipped"</span>
					</div>
					<div class="stat">
						<span class="stat-number">"4"</span>
						<span class="stat-label">"Production Platforms"</span>
					</div>
				</div>
			</div>
		</section>
	}
}

#[component]
fn SkillsSection() -> impl IntoView {
	let categories: &[(&str, &[&str])] = &[
		(
			"Languages & Frameworks",
			&["Python", "Rust", "TensorFlow", "PyTorch", "Scikit-learn"],
		),
		(
			"Machine Learning",
			&["Deep Learning", "Computer Vision", "NLP", "Recommenders"],
		),
		("Infrastructure", &["AWS", "Docker", "Kubernetes", "MLOps"]),
	];

	view! {
		<section id="skills" class="skills">
			<h2 class="section-title">"Skills"</h2>
			<div class="skills-grid">
				{categories
					.iter()
					.map(|&(title, tags)| {
						view! {
							<div class="skill-category">
								<h3>{title}</h3>
								<div class="skill-tags">
									{tags
										.iter()
										.map(|tag| view! { <span class="tech-tag">{*tag}</span> })
										.collect_view()}
								</div>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}

#[component]
fn ContactSection() -> impl IntoView {
	view! {
		<section id="contact" class="contact">
			<h2 class="section-title">"Get In Touch"</h2>
			<div class="contact-grid">
				<div class="contact-info">
					<div class="contact-item">
						<i class="fas fa-envelope"></i>
						<span>"hritik.singh@example.com"</span>
					</div>
					<div class="contact-item">
						<i class="fas fa-phone"></i>
						<span>"+91 98765 43210"</span>
					</div>
					<div class="contact-item">
						<i class="fas fa-location-dot"></i>
						<span>"Mumbai, India"</span>
					</div>
				</div>
				<ContactForm />
			</div>
		</section>
	}
}
