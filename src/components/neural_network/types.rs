use thiserror::Error;

/// Why a visualizer could not be constructed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VisualizerError {
	#[error("a layered network needs at least two layers, got {0}")]
	TooFewLayers(usize),
	#[error("layer {0} has no nodes")]
	EmptyLayer(usize),
	#[error("could not acquire a 2d drawing context from the canvas")]
	SurfaceUnavailable,
}

/// A point in the visualization's world space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Vec3 { x, y, z }
	}

	/// Rotation about the vertical axis (yaw).
	pub fn rotated_y(self, angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Vec3 {
			x: self.x * cos + self.z * sin,
			y: self.y,
			z: -self.x * sin + self.z * cos,
		}
	}

	/// Rotation about the horizontal axis (pitch).
	pub fn rotated_x(self, angle: f64) -> Self {
		let (sin, cos) = angle.sin_cos();
		Vec3 {
			x: self.x,
			y: self.y * cos - self.z * sin,
			z: self.y * sin + self.z * cos,
		}
	}
}

/// One neuron in the layered graph.
///
/// `base` is fixed at construction; `position`, `scale` and `hue` are
/// recomputed every frame from the elapsed time and the node id.
#[derive(Clone, Debug)]
pub struct Node {
	pub id: usize,
	pub layer: usize,
	pub base: Vec3,
	pub position: Vec3,
	pub scale: f64,
	pub hue: f64,
}

/// A directed connection from a node into the next layer.
///
/// The endpoint is addressed by layer and creation-order slot, not by node
/// id; it is resolved against the node list on every frame.
#[derive(Clone, Debug)]
pub struct Edge {
	pub from: usize,
	pub target_layer: usize,
	pub target_slot: usize,
	pub base_opacity: f64,
	pub opacity: f64,
}

#[cfg(test)]
mod tests {
	use std::f64::consts::FRAC_PI_2;

	use super::*;

	fn assert_close(a: Vec3, b: Vec3) {
		assert!(
			(a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12 && (a.z - b.z).abs() < 1e-12,
			"{a:?} != {b:?}"
		);
	}

	#[test]
	fn yaw_quarter_turn_swings_x_into_z() {
		let rotated = Vec3::new(1.0, 0.0, 0.0).rotated_y(FRAC_PI_2);
		assert_close(rotated, Vec3::new(0.0, 0.0, -1.0));
	}

	#[test]
	fn pitch_quarter_turn_swings_y_into_z() {
		let rotated = Vec3::new(0.0, 1.0, 0.0).rotated_x(FRAC_PI_2);
		assert_close(rotated, Vec3::new(0.0, 0.0, 1.0));
	}

	#[test]
	fn rotations_preserve_length() {
		let point = Vec3::new(0.3, -1.2, 2.5);
		let rotated = point.rotated_y(0.7).rotated_x(-0.4);
		let len = |v: Vec3| (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
		assert!((len(point) - len(rotated)).abs() < 1e-12);
	}

	#[test]
	fn construction_errors_render_a_reason() {
		assert_eq!(
			VisualizerError::TooFewLayers(1).to_string(),
			"a layered network needs at least two layers, got 1"
		);
		assert!(VisualizerError::EmptyLayer(2).to_string().contains("layer 2"));
	}
}
