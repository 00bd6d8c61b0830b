//! Small helpers for the page glue.

const KONAMI: [u32; 10] = [38, 38, 40, 40, 37, 39, 37, 39, 66, 65];

/// Rate limiter for chatty event streams like `scroll`.
pub struct Throttle {
	min_gap_ms: f64,
	last_fired: Option<f64>,
}

impl Throttle {
	/// A throttle that accepts at most one event per `min_gap_ms`.
	pub fn new(min_gap_ms: f64) -> Self {
		Throttle {
			min_gap_ms,
			last_fired: None,
		}
	}

	/// Returns true when enough time has passed since the last accepted event.
	pub fn accept(&mut self, now_ms: f64) -> bool {
		match self.last_fired {
			Some(last) if now_ms - last < self.min_gap_ms => false,
			_ => {
				self.last_fired = Some(now_ms);
				true
			}
		}
	}
}

/// Recognizes the ↑↑↓↓←→←→BA key-code sequence from a keydown stream.
#[derive(Default)]
pub struct KonamiTracker {
	recent: Vec<u32>,
}

impl KonamiTracker {
	/// An empty tracker.
	pub fn new() -> Self {
		Self::default()
	}

	/// Feeds one key code; true when the full sequence has just been entered.
	pub fn push(&mut self, key_code: u32) -> bool {
		self.recent.push(key_code);
		if self.recent.len() > KONAMI.len() {
			self.recent.remove(0);
		}
		self.recent == KONAMI
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn throttle_rejects_events_inside_the_gap() {
		let mut throttle = Throttle::new(16.0);
		assert!(throttle.accept(1000.0));
		assert!(!throttle.accept(1010.0));
		assert!(!throttle.accept(1015.9));
		assert!(throttle.accept(1016.0));
	}

	#[test]
	fn throttle_accepts_the_first_event() {
		assert!(Throttle::new(1000.0).accept(0.0));
	}

	#[test]
	fn konami_matches_the_exact_sequence() {
		let mut tracker = KonamiTracker::new();
		for &code in &KONAMI[..9] {
			assert!(!tracker.push(code));
		}
		assert!(tracker.push(KONAMI[9]));
	}

	#[test]
	fn konami_recovers_after_noise() {
		let mut tracker = KonamiTracker::new();
		tracker.push(13);
		tracker.push(27);
		for &code in &KONAMI[..9] {
			assert!(!tracker.push(code));
		}
		assert!(tracker.push(KONAMI[9]));
	}

	#[test]
	fn konami_does_not_fire_twice_without_reentry() {
		let mut tracker = KonamiTracker::new();
		for &code in &KONAMI {
			tracker.push(code);
		}
		assert!(!tracker.push(65));
	}
}
