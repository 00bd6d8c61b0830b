use super::types::Vec3;

const FOV_Y_DEGREES: f64 = 75.0;
const NEAR: f64 = 0.1;
const FAR: f64 = 1000.0;
const CAMERA_DISTANCE: f64 = 8.0;

/// Perspective projection from world space onto the canvas.
///
/// The camera sits on the z axis at a fixed distance from the graph's visual
/// center and looks toward it; only the aspect ratio changes after
/// construction (on resize).
pub struct Camera {
	aspect: f64,
	position: Vec3,
}

/// A world-space point mapped onto the canvas.
///
/// `px_per_unit` is the on-screen length of one world unit at the point's
/// depth, used to size sprites.
#[derive(Clone, Copy, Debug)]
pub struct Projected {
	pub x: f64,
	pub y: f64,
	pub px_per_unit: f64,
}

impl Camera {
	pub fn new(aspect: f64) -> Self {
		Camera {
			aspect,
			position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
		}
	}

	/// Updates the projection for a resized viewport.
	pub fn set_aspect(&mut self, aspect: f64) {
		self.aspect = aspect;
	}

	/// Projects a world-space point to canvas pixels, or `None` when the
	/// point falls outside the near/far planes.
	pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
		let focal = 1.0 / (FOV_Y_DEGREES.to_radians() / 2.0).tan();
		let depth = self.position.z - point.z;
		if !(NEAR..=FAR).contains(&depth) {
			return None;
		}
		let ndc_x = focal / self.aspect * (point.x - self.position.x) / depth;
		let ndc_y = focal * (point.y - self.position.y) / depth;
		Some(Projected {
			x: (ndc_x + 1.0) / 2.0 * width,
			y: (1.0 - ndc_y) / 2.0 * height,
			px_per_unit: focal / depth * height / 2.0,
		})
	}
}
