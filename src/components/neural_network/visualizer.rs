use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::camera::Camera;
use super::render;
use super::state::NetworkState;
use super::types::VisualizerError;
use crate::tasks::FrameLoop;

struct Inner {
	state: NetworkState,
	camera: Camera,
	ctx: CanvasRenderingContext2d,
	canvas: HtmlCanvasElement,
	width: f64,
	height: f64,
	started_at: Option<f64>,
}

/// Handle to a running neural-network animation bound to one canvas.
///
/// The animation keeps rendering until [`NeuralNetwork::stop`] is called or
/// the handle is dropped.
pub struct NeuralNetwork {
	inner: Rc<RefCell<Inner>>,
	frames: RefCell<Option<FrameLoop>>,
}

impl NeuralNetwork {
	/// Builds the graph and starts the frame loop against `canvas`, which the
	/// caller has already sized in device pixels.
	pub fn start(
		canvas: HtmlCanvasElement,
		layer_sizes: &[usize],
	) -> Result<Self, VisualizerError> {
		let width = canvas.width() as f64;
		let height = canvas.height() as f64;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
			.ok_or(VisualizerError::SurfaceUnavailable)?;

		let mut random = || js_sys::Math::random();
		let state = NetworkState::new(layer_sizes, &mut random)?;
		info!(
			"neural network visualizer started: {} nodes, {} edges",
			state.nodes.len(),
			state.edges.len()
		);

		let inner = Rc::new(RefCell::new(Inner {
			state,
			camera: Camera::new(width / height.max(1.0)),
			ctx,
			canvas,
			width,
			height,
			started_at: None,
		}));

		let frame_inner = inner.clone();
		let frames = FrameLoop::start(move |now_ms| {
			let mut guard = frame_inner.borrow_mut();
			let start = *guard.started_at.get_or_insert(now_ms);
			let t = (now_ms - start) / 1000.0;
			guard.state.advance(t);
			let Inner {
				ref state,
				ref camera,
				ref ctx,
				width,
				height,
				..
			} = *guard;
			render::render(state, camera, ctx, width, height);
		});

		Ok(NeuralNetwork {
			inner,
			frames: RefCell::new(Some(frames)),
		})
	}

	/// Adapts the projection and the canvas backing size to new surface
	/// dimensions. The graph itself is not rebuilt.
	pub fn resize(&self, width: f64, height: f64) {
		if width <= 0.0 || height <= 0.0 {
			return;
		}
		let mut inner = self.inner.borrow_mut();
		inner.canvas.set_width(width as u32);
		inner.canvas.set_height(height as u32);
		inner.camera.set_aspect(width / height);
		inner.width = width;
		inner.height = height;
	}

	/// Stops scheduling frames. Safe to call more than once.
	pub fn stop(&self) {
		if let Some(frames) = self.frames.borrow_mut().take() {
			frames.cancel();
			debug!("neural network visualizer stopped");
		}
	}
}

impl Drop for NeuralNetwork {
	fn drop(&mut self) {
		self.stop();
	}
}
