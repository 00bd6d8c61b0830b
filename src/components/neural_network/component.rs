use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlCanvasElement;

use super::visualizer::NeuralNetwork;
use crate::tasks::WindowListener;

/// Layer sizes mirroring a small dense network.
pub const DEFAULT_LAYERS: &[usize] = &[8, 12, 8, 4];

fn surface_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|parent| (parent.client_width() as f64, parent.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

/// Canvas hosting the animated neural-network graph.
///
/// The visualizer starts when the canvas mounts, follows window resizes, and
/// is torn down when the component unmounts.
#[component]
pub fn NeuralNetworkCanvas(
	#[prop(default = DEFAULT_LAYERS)] layers: &'static [usize],
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let network: Rc<RefCell<Option<NeuralNetwork>>> = Rc::new(RefCell::new(None));
	let resize: Rc<RefCell<Option<WindowListener>>> = Rc::new(RefCell::new(None));
	let (network_init, resize_init) = (network.clone(), resize.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = surface_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		match NeuralNetwork::start(canvas.clone(), layers) {
			Ok(net) => {
				*network_init.borrow_mut() = Some(net);
				let network_resize = network_init.clone();
				*resize_init.borrow_mut() = Some(WindowListener::listen("resize", move |_| {
					let (nw, nh) = surface_size(&canvas);
					if let Some(ref net) = *network_resize.borrow() {
						net.resize(nw, nh);
					}
				}));
			}
			Err(err) => log::error!("could not start the neural network visualizer: {err}"),
		}
	});

	on_cleanup(move || {
		resize.borrow_mut().take();
		if let Some(ref net) = *network.borrow() {
			net.stop();
		}
	});

	view! { <canvas node_ref=canvas_ref class="neural-network" aria-hidden="true"></canvas> }
}
