use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::camera::{Camera, Projected};
use super::state::NetworkState;
use super::types::Vec3;

// World-space radius of a node sphere before the pulse scale.
const NODE_RADIUS: f64 = 0.1;
const NODE_ALPHA: f64 = 0.8;
const EDGE_WIDTH: f64 = 1.0;

pub fn render(state: &NetworkState, camera: &Camera, ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
	draw_edges(state, camera, ctx, width, height);
	draw_nodes(state, camera, ctx, width, height);
}

fn to_screen(
	state: &NetworkState,
	camera: &Camera,
	point: Vec3,
	width: f64,
	height: f64,
) -> Option<Projected> {
	camera.project(point.rotated_y(state.yaw).rotated_x(state.pitch), width, height)
}

fn draw_edges(
	state: &NetworkState,
	camera: &Camera,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	ctx.set_line_width(EDGE_WIDTH);
	for edge in &state.edges {
		// A miss means the slot no longer resolves; skip the edge this frame.
		let Some(source) = state.nodes.get(edge.from) else {
			continue;
		};
		let Some(target) = state.resolve_target(edge) else {
			continue;
		};
		let (Some(from), Some(to)) = (
			to_screen(state, camera, source.position, width, height),
			to_screen(state, camera, target.position, width, height),
		) else {
			continue;
		};

		ctx.set_stroke_style_str(&format!("rgba(138, 43, 226, {:.3})", edge.opacity));
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
}

fn draw_nodes(
	state: &NetworkState,
	camera: &Camera,
	ctx: &CanvasRenderingContext2d,
	width: f64,
	height: f64,
) {
	for node in &state.nodes {
		let Some(projected) = to_screen(state, camera, node.position, width, height) else {
			continue;
		};
		let radius = NODE_RADIUS * node.scale * projected.px_per_unit;
		if radius <= 0.0 {
			continue;
		}

		ctx.set_fill_style_str(&format!(
			"hsla({:.1}, 100%, 60%, {NODE_ALPHA})",
			node.hue * 360.0
		));
		ctx.begin_path();
		let _ = ctx.arc(projected.x, projected.y, radius, 0.0, 2.0 * PI);
		ctx.fill();
	}
}
