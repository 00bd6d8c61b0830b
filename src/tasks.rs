//! Ownable handles around the browser's scheduling primitives.
//!
//! Every periodic or deferred callback in the app (frame loops, intervals,
//! timeout chains, window listeners) is held as one of these handles so that
//! component teardown can cancel it. Dropping a handle cancels the underlying
//! browser registration.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

fn window() -> Window {
	web_sys::window().unwrap()
}

/// A `requestAnimationFrame` loop that re-schedules itself until cancelled.
pub struct FrameLoop {
	running: Rc<Cell<bool>>,
	frame_id: Rc<Cell<i32>>,
	_callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
	/// Starts the loop. `tick` receives the frame timestamp in milliseconds.
	pub fn start(mut tick: impl FnMut(f64) + 'static) -> Self {
		let running = Rc::new(Cell::new(true));
		let frame_id = Rc::new(Cell::new(0));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

		let (running_cb, frame_id_cb, callback_inner) =
			(running.clone(), frame_id.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move |now: f64| {
			if !running_cb.get() {
				return;
			}
			tick(now);
			if running_cb.get() {
				if let Some(ref cb) = *callback_inner.borrow() {
					frame_id_cb.set(request_frame(cb));
				}
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			frame_id.set(request_frame(cb));
		}

		FrameLoop {
			running,
			frame_id,
			_callback: callback,
		}
	}

	/// Stops scheduling further frames. Safe to call more than once.
	pub fn cancel(&self) {
		if self.running.replace(false) {
			let _ = window().cancel_animation_frame(self.frame_id.get());
		}
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.cancel();
	}
}

fn request_frame(callback: &Closure<dyn FnMut(f64)>) -> i32 {
	window()
		.request_animation_frame(callback.as_ref().unchecked_ref())
		.unwrap_or_default()
}

/// A `setInterval` task cancelled when the handle drops.
pub struct Interval {
	id: i32,
	_callback: Closure<dyn FnMut()>,
}

impl Interval {
	/// Runs `tick` every `period_ms` milliseconds until the handle drops.
	pub fn every(period_ms: i32, tick: impl FnMut() + 'static) -> Self {
		let callback = Closure::new(tick);
		let id = window()
			.set_interval_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				period_ms,
			)
			.unwrap_or_default();
		Interval {
			id,
			_callback: callback,
		}
	}
}

impl Drop for Interval {
	fn drop(&mut self) {
		window().clear_interval_with_handle(self.id);
	}
}

/// A one-shot `setTimeout`. Dropping the handle cancels a pending run.
pub struct Timeout {
	id: i32,
	_callback: Closure<dyn FnMut()>,
}

impl Timeout {
	/// Runs `run` once after `delay_ms` milliseconds.
	pub fn after(delay_ms: i32, run: impl FnMut() + 'static) -> Self {
		let callback = Closure::new(run);
		let id = window()
			.set_timeout_with_callback_and_timeout_and_arguments_0(
				callback.as_ref().unchecked_ref(),
				delay_ms,
			)
			.unwrap_or_default();
		Timeout {
			id,
			_callback: callback,
		}
	}
}

impl Drop for Timeout {
	fn drop(&mut self) {
		window().clear_timeout_with_handle(self.id);
	}
}

/// Fires `run` once after `delay_ms` with no handle to keep alive.
///
/// The callback must only touch state that outlives the scheduling component,
/// e.g. app-level signals.
pub fn fire_and_forget(delay_ms: i32, run: impl FnOnce() + 'static) {
	let callback = Closure::once_into_js(run);
	let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
		callback.unchecked_ref(),
		delay_ms,
	);
}

/// A `setTimeout` chain where each tick chooses the delay before the next.
pub struct TimeoutChain {
	running: Rc<Cell<bool>>,
	timeout_id: Rc<Cell<i32>>,
	_callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl TimeoutChain {
	/// Runs `tick` after `first_delay_ms`, then again after whatever delay the
	/// previous call returned. Returning `None` ends the chain.
	pub fn start(first_delay_ms: i32, mut tick: impl FnMut() -> Option<i32> + 'static) -> Self {
		let running = Rc::new(Cell::new(true));
		let timeout_id = Rc::new(Cell::new(0));
		let callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

		let (running_cb, timeout_id_cb, callback_inner) =
			(running.clone(), timeout_id.clone(), callback.clone());
		*callback.borrow_mut() = Some(Closure::new(move || {
			if !running_cb.get() {
				return;
			}
			match tick() {
				Some(delay) => {
					if running_cb.get() {
						if let Some(ref cb) = *callback_inner.borrow() {
							timeout_id_cb.set(request_timeout(cb, delay));
						}
					}
				}
				None => running_cb.set(false),
			}
		}));
		if let Some(ref cb) = *callback.borrow() {
			timeout_id.set(request_timeout(cb, first_delay_ms));
		}

		TimeoutChain {
			running,
			timeout_id,
			_callback: callback,
		}
	}

	/// Stops the chain before its next tick. Safe to call more than once.
	pub fn cancel(&self) {
		if self.running.replace(false) {
			window().clear_timeout_with_handle(self.timeout_id.get());
		}
	}
}

impl Drop for TimeoutChain {
	fn drop(&mut self) {
		self.cancel();
	}
}

fn request_timeout(callback: &Closure<dyn FnMut()>, delay_ms: i32) -> i32 {
	window()
		.set_timeout_with_callback_and_timeout_and_arguments_0(
			callback.as_ref().unchecked_ref(),
			delay_ms,
		)
		.unwrap_or_default()
}

/// A window event listener removed when the handle drops.
pub struct WindowListener {
	event: &'static str,
	callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
	/// Registers `handler` for `event` on the window.
	pub fn listen(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Self {
		let callback = Closure::new(handler);
		let _ = window()
			.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
		WindowListener { event, callback }
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = window()
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}
