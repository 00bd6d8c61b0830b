use super::types::{Edge, Node, Vec3, VisualizerError};

const LAYER_SPACING: f64 = 3.0;
const ROW_SPACING: f64 = 0.8;
const FLOAT_AMPLITUDE: f64 = 0.2;
const PULSE_AMPLITUDE: f64 = 0.2;
const BASE_HUE: f64 = 0.55;
const MIN_EDGE_OPACITY: f64 = 0.1;
const MAX_FAN_OUT: f64 = 3.0;

/// The animated layered graph: all nodes and edges, plus the current
/// whole-graph rotation.
///
/// Construction fixes the structure; [`NetworkState::advance`] recomputes the
/// per-frame fields from the elapsed time alone, so rendering never mutates.
#[derive(Debug)]
pub struct NetworkState {
	pub nodes: Vec<Node>,
	pub edges: Vec<Edge>,
	pub yaw: f64,
	pub pitch: f64,
}

impl NetworkState {
	/// Builds the graph for the given layer sizes.
	///
	/// `random` supplies uniform samples in [0, 1): node depth, fan-out,
	/// target slots and base opacities are rolled from it once, at
	/// construction time.
	pub fn new(
		layer_sizes: &[usize],
		random: &mut dyn FnMut() -> f64,
	) -> Result<Self, VisualizerError> {
		if layer_sizes.len() < 2 {
			return Err(VisualizerError::TooFewLayers(layer_sizes.len()));
		}
		if let Some(index) = layer_sizes.iter().position(|&size| size == 0) {
			return Err(VisualizerError::EmptyLayer(index));
		}

		let mut nodes = Vec::with_capacity(layer_sizes.iter().sum());
		let mut edges = Vec::new();
		let layer_count = layer_sizes.len() as f64;

		let mut id = 0;
		for (layer, &size) in layer_sizes.iter().enumerate() {
			let first_id = id;
			for slot in 0..size {
				let base = Vec3::new(
					(layer as f64 - layer_count / 2.0) * LAYER_SPACING,
					(slot as f64 - size as f64 / 2.0) * ROW_SPACING,
					random() * 2.0 - 1.0,
				);
				nodes.push(Node {
					id,
					layer,
					base,
					position: base,
					scale: 1.0,
					hue: BASE_HUE,
				});
				id += 1;
			}

			// Each node fans out to a handful of random slots one layer over.
			if let Some(&next_size) = layer_sizes.get(layer + 1) {
				for from in first_id..id {
					let fan_out = (random() * MAX_FAN_OUT) as usize + 1;
					for _ in 0..fan_out {
						let base_opacity = random() * 0.3 + 0.1;
						edges.push(Edge {
							from,
							target_layer: layer + 1,
							target_slot: (random() * next_size as f64) as usize,
							base_opacity,
							opacity: base_opacity,
						});
					}
				}
			}
		}

		Ok(NetworkState {
			nodes,
			edges,
			yaw: 0.0,
			pitch: 0.0,
		})
	}

	/// Recomputes every per-frame field for elapsed time `t` (seconds).
	pub fn advance(&mut self, t: f64) {
		for node in &mut self.nodes {
			let phase = node.id as f64;
			node.position = Vec3::new(
				node.base.x,
				node.base.y + (t + phase * 0.5).sin() * FLOAT_AMPLITUDE,
				node.base.z,
			);
			node.scale = 1.0 + (t * 2.0 + phase).sin() * PULSE_AMPLITUDE;
			node.hue = BASE_HUE + ((t * 0.1 + phase * 0.1) % 1.0) * 0.1;
		}
		for edge in &mut self.edges {
			edge.opacity = (edge.base_opacity + (t * 3.0).sin() * 0.1).max(MIN_EDGE_OPACITY);
		}
		self.yaw = t * 0.1;
		self.pitch = (t * 0.05).sin() * 0.1;
	}

	/// Looks an edge's endpoint up by layer and creation-order slot.
	///
	/// Returns `None` when the slot is out of range for the layer; callers
	/// skip the edge for the frame rather than failing.
	pub fn resolve_target(&self, edge: &Edge) -> Option<&Node> {
		self.nodes
			.iter()
			.filter(|node| node.layer == edge.target_layer)
			.nth(edge.target_slot)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Deterministic stand-in for `Math.random`.
	fn rng_from(seed: u64) -> impl FnMut() -> f64 {
		let mut state = seed;
		move || {
			state = state
				.wrapping_mul(6364136223846793005)
				.wrapping_add(1442695040888963407);
			(state >> 11) as f64 / (1u64 << 53) as f64
		}
	}

	fn build(layer_sizes: &[usize], seed: u64) -> NetworkState {
		let mut random = rng_from(seed);
		NetworkState::new(layer_sizes, &mut random).expect("valid layer sizes")
	}

	#[test]
	fn node_counts_partition_into_layers() {
		let sizes = [8, 12, 8, 4];
		let state = build(&sizes, 7);
		assert_eq!(state.nodes.len(), 32);
		for (layer, &size) in sizes.iter().enumerate() {
			let count = state.nodes.iter().filter(|n| n.layer == layer).count();
			assert_eq!(count, size, "layer {layer}");
		}
	}

	#[test]
	fn node_ids_are_sequential_in_creation_order() {
		let state = build(&[3, 5, 2], 11);
		for (index, node) in state.nodes.iter().enumerate() {
			assert_eq!(node.id, index);
		}
	}

	#[test]
	fn edges_connect_adjacent_layers_only() {
		let sizes = [8, 12, 8, 4];
		let state = build(&sizes, 42);
		assert!(!state.edges.is_empty());
		for edge in &state.edges {
			let source = &state.nodes[edge.from];
			assert_eq!(edge.target_layer, source.layer + 1);
			assert!(edge.target_slot < sizes[edge.target_layer]);
		}
	}

	#[test]
	fn fan_out_is_between_one_and_three() {
		let sizes = [8, 12, 8, 4];
		let state = build(&sizes, 3);
		for node in &state.nodes {
			let outgoing = state.edges.iter().filter(|e| e.from == node.id).count();
			if node.layer + 1 < sizes.len() {
				assert!((1..=3).contains(&outgoing), "node {} has {outgoing}", node.id);
			} else {
				assert_eq!(outgoing, 0, "terminal layer must not fan out");
			}
		}
	}

	#[test]
	fn base_geometry_follows_the_layer_grid() {
		let state = build(&[2, 3], 19);
		let node = &state.nodes[0];
		assert_eq!(node.base.x, (0.0 - 1.0) * LAYER_SPACING);
		assert_eq!(node.base.y, (0.0 - 1.0) * ROW_SPACING);
		assert!((-1.0..1.0).contains(&node.base.z));
		let last = &state.nodes[4];
		assert_eq!(last.base.x, 0.0 * LAYER_SPACING);
		assert_eq!(last.base.y, (2.0 - 1.5) * ROW_SPACING);
	}

	#[test]
	fn base_opacity_is_rolled_inside_its_band() {
		let state = build(&[6, 6, 6], 23);
		for edge in &state.edges {
			assert!((0.1..0.4).contains(&edge.base_opacity));
		}
	}

	#[test]
	fn two_by_three_scenario() {
		let sizes = [2, 3];
		let state = build(&sizes, 99);
		assert_eq!(state.nodes.iter().filter(|n| n.layer == 0).count(), 2);
		assert_eq!(state.nodes.iter().filter(|n| n.layer == 1).count(), 3);
		for node in state.nodes.iter().filter(|n| n.layer == 0) {
			let outgoing: Vec<_> = state.edges.iter().filter(|e| e.from == node.id).collect();
			assert!((1..=3).contains(&outgoing.len()));
			for edge in outgoing {
				assert_eq!(edge.target_layer, 1);
				assert!(edge.target_slot < 3);
			}
		}
	}

	#[test]
	fn single_layer_is_rejected() {
		let mut random = rng_from(1);
		let err = NetworkState::new(&[1], &mut random).unwrap_err();
		assert_eq!(err, VisualizerError::TooFewLayers(1));
	}

	#[test]
	fn empty_sequence_is_rejected() {
		let mut random = rng_from(1);
		let err = NetworkState::new(&[], &mut random).unwrap_err();
		assert_eq!(err, VisualizerError::TooFewLayers(0));
	}

	#[test]
	fn zero_sized_layer_is_rejected() {
		let mut random = rng_from(1);
		let err = NetworkState::new(&[3, 0, 2], &mut random).unwrap_err();
		assert_eq!(err, VisualizerError::EmptyLayer(1));
	}

	#[test]
	fn scale_and_opacity_stay_bounded_over_time() {
		let mut state = build(&[8, 12, 8, 4], 5);
		for step in 0..500 {
			let t = step as f64 * 0.173;
			state.advance(t);
			for node in &state.nodes {
				assert!((0.8..=1.2).contains(&node.scale), "scale {}", node.scale);
				assert!((node.position.y - node.base.y).abs() <= FLOAT_AMPLITUDE + 1e-12);
				assert_eq!(node.position.x, node.base.x);
				assert_eq!(node.position.z, node.base.z);
			}
			for edge in &state.edges {
				assert!((0.1..0.5).contains(&edge.opacity), "opacity {}", edge.opacity);
			}
		}
	}

	#[test]
	fn rotation_tracks_elapsed_time() {
		let mut state = build(&[2, 2], 8);
		state.advance(10.0);
		assert!((state.yaw - 1.0).abs() < 1e-12);
		assert!((state.pitch - (0.5_f64).sin() * 0.1).abs() < 1e-12);
	}

	#[test]
	fn hue_stays_inside_its_band() {
		let mut state = build(&[4, 4], 13);
		for step in 0..200 {
			state.advance(step as f64 * 0.31);
			for node in &state.nodes {
				assert!((0.55..0.65 + 1e-12).contains(&node.hue), "hue {}", node.hue);
			}
		}
	}

	#[test]
	fn target_resolution_follows_creation_order() {
		let state = build(&[2, 3], 77);
		let probe = Edge {
			from: 0,
			target_layer: 1,
			target_slot: 2,
			base_opacity: 0.2,
			opacity: 0.2,
		};
		let target = state.resolve_target(&probe).expect("slot 2 exists");
		assert_eq!(target.layer, 1);
		assert_eq!(target.id, 4);
	}

	#[test]
	fn out_of_range_slot_misses_without_panicking() {
		let state = build(&[2, 3], 77);
		let probe = Edge {
			from: 0,
			target_layer: 1,
			target_slot: 3,
			base_opacity: 0.2,
			opacity: 0.2,
		};
		assert!(state.resolve_target(&probe).is_none());
	}

	#[test]
	fn same_seed_builds_the_same_graph() {
		let a = build(&[4, 6, 3], 123);
		let b = build(&[4, 6, 3], 123);
		assert_eq!(a.edges.len(), b.edges.len());
		for (left, right) in a.nodes.iter().zip(&b.nodes) {
			assert_eq!(left.base, right.base);
		}
		for (left, right) in a.edges.iter().zip(&b.edges) {
			assert_eq!(left.target_slot, right.target_slot);
			assert_eq!(left.base_opacity, right.base_opacity);
		}
	}
}
