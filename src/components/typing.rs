//! Hero headline that types and deletes role titles in a loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::tasks::TimeoutChain;

/// Role titles cycled by the hero headline.
const PHRASES: &[&str] = &[
	"AI Engineer",
	"Machine Learning Expert",
	"Deep Learning Specialist",
	"Python Developer",
	"Data Scientist",
	"Neural Network Architect",
];

const TYPE_DELAY_MS: i32 = 100;
const DELETE_DELAY_MS: i32 = 50;
const HOLD_DELAY_MS: i32 = 2000;

/// Progress of the type-hold-delete cycle across [`PHRASES`].
#[derive(Debug, PartialEq, Eq)]
struct TypingCycle {
	phrase: usize,
	shown: usize,
	deleting: bool,
}

impl TypingCycle {
	fn new() -> Self {
		TypingCycle {
			phrase: 0,
			shown: 0,
			deleting: false,
		}
	}

	/// Advances one tick and returns the delay until the next.
	fn step(&mut self) -> i32 {
		let full = PHRASES[self.phrase].chars().count();
		if self.deleting {
			self.shown -= 1;
			if self.shown == 0 {
				self.deleting = false;
				self.phrase = (self.phrase + 1) % PHRASES.len();
			}
			DELETE_DELAY_MS
		} else {
			self.shown += 1;
			if self.shown == full {
				self.deleting = true;
				HOLD_DELAY_MS
			} else {
				TYPE_DELAY_MS
			}
		}
	}

	fn text(&self) -> String {
		PHRASES[self.phrase].chars().take(self.shown).collect()
	}
}

/// The animated role line under the hero name.
#[component]
pub fn TypingText() -> impl IntoView {
	let (text, set_text) = signal(String::new());
	let chain: Rc<RefCell<Option<TimeoutChain>>> = Rc::new(RefCell::new(None));

	let chain_init = chain.clone();
	Effect::new(move |_| {
		let mut cycle = TypingCycle::new();
		*chain_init.borrow_mut() = Some(TimeoutChain::start(TYPE_DELAY_MS, move || {
			let delay = cycle.step();
			if set_text.try_set(cycle.text()).is_some() {
				// The signal is gone; the component has been disposed.
				return None;
			}
			Some(delay)
		}));
	});

	on_cleanup(move || {
		chain.borrow_mut().take();
	});

	view! {
		<span class="typing-text">{text}</span>
		<span class="cursor">"|"</span>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn types_the_first_phrase_one_char_at_a_time() {
		let mut cycle = TypingCycle::new();
		assert_eq!(cycle.step(), TYPE_DELAY_MS);
		assert_eq!(cycle.text(), "A");
		assert_eq!(cycle.step(), TYPE_DELAY_MS);
		assert_eq!(cycle.text(), "AI");
	}

	#[test]
	fn holds_once_the_phrase_is_complete() {
		let mut cycle = TypingCycle::new();
		let full = PHRASES[0].chars().count();
		for _ in 0..full - 1 {
			assert_eq!(cycle.step(), TYPE_DELAY_MS);
		}
		assert_eq!(cycle.step(), HOLD_DELAY_MS);
		assert_eq!(cycle.text(), PHRASES[0]);
		assert!(cycle.deleting);
	}

	#[test]
	fn deletes_back_to_empty_then_advances_to_the_next_phrase() {
		let mut cycle = TypingCycle::new();
		let full = PHRASES[0].chars().count();
		for _ in 0..full {
			cycle.step();
		}
		for _ in 0..full - 1 {
			assert_eq!(cycle.step(), DELETE_DELAY_MS);
		}
		assert_eq!(cycle.step(), DELETE_DELAY_MS);
		assert_eq!(cycle.text(), "");
		assert_eq!(cycle.phrase, 1);
		assert!(!cycle.deleting);
	}

	#[test]
	fn wraps_around_after_the_last_phrase() {
		let mut cycle = TypingCycle::new();
		cycle.phrase = PHRASES.len() - 1;
		let full = PHRASES[cycle.phrase].chars().count();
		for _ in 0..2 * full {
			cycle.step();
		}
		assert_eq!(cycle.phrase, 0);
	}
}
