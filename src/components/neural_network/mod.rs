//! Animated layered-graph visualization for the hero section.
//!
//! `state` owns the graph and its per-frame animation, `camera` and `render`
//! put it on a 2d canvas, `visualizer` ties both to a frame loop, and
//! `component` exposes the whole thing as a Leptos component.

mod camera;
mod component;
mod render;
mod state;
mod types;
mod visualizer;

pub use component::NeuralNetworkCanvas;
