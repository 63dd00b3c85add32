//! Layout passes: proportional-area shape packing and axis label
//! placement. Both are synchronous, CPU-bound and deterministic given
//! the request (the packer's randomness is seeded from the request).

mod labels;
mod pack;
mod rng;
mod seed;
mod sizing;
pub(crate) mod types;

pub use types::{
    LabelPlacement, LabelRequest, LabelResult, LabelSpec, NodeSpec, PackedNode, PackingRequest,
    PackingResult, ShapeKind,
};

use std::collections::BTreeMap;

use crate::config::PackConfig;
use crate::error::{Error, Result};

use rng::XorShift64Star;
use types::SimNode;

/// Size, warm-start and pack the request's shapes.
///
/// Only malformed input is an error. A canvas too small for the
/// minimum sizes is not: the run completes and reports the residual
/// overlap in [`PackingResult::max_penetration`]; likewise a budget
/// that min-size clamping cannot honor shows up as
/// `achieved_budget_ratio > 1`.
pub fn pack(request: &PackingRequest, config: &PackConfig) -> Result<PackingResult> {
    validate_packing(request)?;

    let group_of = assign_groups(&request.nodes);
    let values: Vec<f32> = request.nodes.iter().map(|n| n.value).collect();
    let budget_area =
        request.canvas_width * request.canvas_height * request.area_budget_fraction;
    let (sizes, achieved_budget_ratio) = sizing::compute_sizes(
        &values,
        request.shape,
        budget_area,
        request.min_size,
        request.max_size,
    );

    let mut nodes: Vec<SimNode> = request
        .nodes
        .iter()
        .zip(&sizes)
        .enumerate()
        .map(|(idx, (spec, &size))| SimNode {
            id: spec.id.clone(),
            group: group_of[idx],
            size,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            fixed: spec.fixed,
        })
        .collect();

    let mut rng = XorShift64Star::new(request.rng_seed);
    seed::warm_start(
        &mut nodes,
        request.shape,
        request.canvas_width,
        request.canvas_height,
        request.protected_top_height,
        config.seed_jitter_fraction,
        &mut rng,
    );
    let mut sim = pack::Simulation::new(
        &mut nodes,
        request.shape,
        config,
        request.canvas_width,
        request.canvas_height,
        request.protected_top_height,
        &mut rng,
    );
    sim.run(request.iterations);

    let max_penetration = pack::max_penetration(&nodes, request.shape, config).max(0.0);
    tracing::debug!(
        nodes = nodes.len(),
        iterations = request.iterations,
        achieved_budget_ratio,
        max_penetration,
        "packing run finished"
    );

    let z_index = draw_order(&nodes);
    let packed = nodes
        .iter()
        .zip(z_index)
        .map(|(node, z_index)| PackedNode {
            id: node.id.clone(),
            x: node.x,
            y: node.y,
            size: node.size,
            z_index,
        })
        .collect();

    Ok(PackingResult {
        nodes: packed,
        achieved_budget_ratio,
        max_penetration,
    })
}

/// Assign each label a vertical position so that labels never overlap
/// each other or any anchor's protection band, keeping anchor order and
/// minimizing total displacement. Infeasible inputs fall back to a
/// greedy sweep (`used_fallback`), never an error.
pub fn place_labels(request: &LabelRequest) -> Result<LabelResult> {
    validate_labels(request)?;
    if request.labels.is_empty() {
        return Ok(LabelResult {
            placements: Vec::new(),
            used_fallback: false,
        });
    }

    // Process sorted by anchor; report in request order.
    let mut order: Vec<usize> = (0..request.labels.len()).collect();
    order.sort_by(|&a, &b| {
        request.labels[a]
            .anchor_y
            .partial_cmp(&request.labels[b].anchor_y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    let sorted: Vec<(f32, f32)> = order
        .iter()
        .map(|&i| (request.labels[i].anchor_y, request.labels[i].height))
        .collect();

    let (ys, used_fallback) = labels::place_sorted(
        &sorted,
        request.chart_height,
        request.grid_size,
        request.protection_radius,
    );

    let mut placements = vec![
        LabelPlacement {
            id: String::new(),
            label_y: 0.0,
        };
        request.labels.len()
    ];
    for (&original, &label_y) in order.iter().zip(&ys) {
        placements[original] = LabelPlacement {
            id: request.labels[original].id.clone(),
            label_y,
        };
    }

    Ok(LabelResult {
        placements,
        used_fallback,
    })
}

fn validate_packing(request: &PackingRequest) -> Result<()> {
    if request.nodes.is_empty() {
        return Err(Error::EmptyNodes);
    }
    if !(request.canvas_width > 0.0 && request.canvas_width.is_finite())
        || !(request.canvas_height > 0.0 && request.canvas_height.is_finite())
    {
        return Err(Error::InvalidCanvas {
            width: request.canvas_width,
            height: request.canvas_height,
        });
    }
    if !(request.area_budget_fraction > 0.0 && request.area_budget_fraction < 1.0) {
        return Err(Error::InvalidBudget {
            fraction: request.area_budget_fraction,
        });
    }
    if !(request.min_size > 0.0
        && request.min_size.is_finite()
        && request.max_size.is_finite()
        && request.min_size <= request.max_size)
    {
        return Err(Error::InvalidSizeBounds {
            min: request.min_size,
            max: request.max_size,
        });
    }
    if !(request.protected_top_height >= 0.0
        && request.protected_top_height < request.canvas_height)
    {
        return Err(Error::ProtectedBandTooTall {
            protected: request.protected_top_height,
            height: request.canvas_height,
        });
    }
    let mut seen = BTreeMap::new();
    for node in &request.nodes {
        if !(node.value > 0.0 && node.value.is_finite()) {
            return Err(Error::InvalidValue {
                id: node.id.clone(),
                value: node.value,
            });
        }
        if seen.insert(node.id.as_str(), ()).is_some() {
            return Err(Error::DuplicateId {
                id: node.id.clone(),
            });
        }
    }
    Ok(())
}

fn validate_labels(request: &LabelRequest) -> Result<()> {
    if !(request.chart_height > 0.0 && request.chart_height.is_finite()) {
        return Err(Error::InvalidChartHeight {
            height: request.chart_height,
        });
    }
    if !(request.grid_size > 0.0 && request.grid_size.is_finite()) {
        return Err(Error::InvalidGridSize {
            grid_size: request.grid_size,
        });
    }
    for label in &request.labels {
        if !label.anchor_y.is_finite() || !(label.height > 0.0 && label.height.is_finite()) {
            return Err(Error::InvalidLabel {
                id: label.id.clone(),
                anchor_y: label.anchor_y,
                height: label.height,
            });
        }
    }
    Ok(())
}

/// Group keys to dense indices, in order of first appearance. Absent
/// groups share one implicit bucket.
fn assign_groups(nodes: &[NodeSpec]) -> Vec<usize> {
    let mut index_of: BTreeMap<Option<&str>, usize> = BTreeMap::new();
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let key = node.group.as_deref();
        let next = index_of.len();
        let idx = *index_of.entry(key).or_insert(next);
        out.push(idx);
    }
    out
}

/// Drawing-order hints: render ascending, so larger shapes get lower
/// values and smaller shapes stay visible on top.
fn draw_order(nodes: &[SimNode]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| {
        nodes[b]
            .size
            .partial_cmp(&nodes[a].size)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(nodes[a].id.cmp(&nodes[b].id))
    });
    let mut z = vec![0u32; nodes.len()];
    for (rank, &idx) in order.iter().enumerate() {
        z[idx] = rank as u32;
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(nodes: Vec<NodeSpec>) -> PackingRequest {
        PackingRequest {
            nodes,
            shape: ShapeKind::Circle,
            canvas_width: 400.0,
            canvas_height: 400.0,
            area_budget_fraction: 0.35,
            min_size: 2.0,
            max_size: 120.0,
            protected_top_height: 0.0,
            iterations: 120,
            rng_seed: 1,
        }
    }

    fn node(id: &str, value: f32, group: Option<&str>) -> NodeSpec {
        NodeSpec {
            id: id.to_string(),
            value,
            group: group.map(str::to_string),
            fixed: false,
        }
    }

    #[test]
    fn empty_nodes_is_an_error() {
        assert!(matches!(
            pack(&request(Vec::new()), &PackConfig::default()),
            Err(Error::EmptyNodes)
        ));
    }

    #[test]
    fn negative_value_is_an_error() {
        let req = request(vec![node("a", -1.0, None)]);
        assert!(matches!(
            pack(&req, &PackConfig::default()),
            Err(Error::InvalidValue { .. })
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let req = request(vec![node("a", 1.0, None), node("a", 2.0, None)]);
        assert!(matches!(
            pack(&req, &PackConfig::default()),
            Err(Error::DuplicateId { .. })
        ));
    }

    #[test]
    fn groups_index_in_first_appearance_order() {
        let nodes = vec![
            node("a", 1.0, Some("x")),
            node("b", 1.0, None),
            node("c", 1.0, Some("y")),
            node("d", 1.0, Some("x")),
        ];
        assert_eq!(assign_groups(&nodes), vec![0, 1, 2, 0]);
    }

    #[test]
    fn draw_order_puts_smallest_on_top() {
        let specs = vec![
            node("a", 10.0, None),
            node("b", 40.0, None),
            node("c", 20.0, None),
        ];
        let result = pack(&request(specs), &PackConfig::default()).unwrap();
        let by_id: BTreeMap<&str, &PackedNode> =
            result.nodes.iter().map(|n| (n.id.as_str(), n)).collect();
        assert!(by_id["b"].z_index < by_id["c"].z_index);
        assert!(by_id["c"].z_index < by_id["a"].z_index);
    }

    #[test]
    fn same_seed_reproduces_positions_exactly() {
        let specs: Vec<NodeSpec> = (0..8)
            .map(|i| node(&format!("n{i}"), 1.0 + i as f32, Some(if i % 2 == 0 { "a" } else { "b" })))
            .collect();
        let req = request(specs);
        let a = pack(&req, &PackConfig::default()).unwrap();
        let b = pack(&req, &PackConfig::default()).unwrap();
        for (x, y) in a.nodes.iter().zip(&b.nodes) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.y, y.y);
            assert_eq!(x.size, y.size);
        }
    }

    #[test]
    fn label_placements_come_back_in_request_order() {
        let req = LabelRequest {
            labels: vec![
                LabelSpec {
                    id: "low".into(),
                    anchor_y: 200.0,
                    height: 12.0,
                },
                LabelSpec {
                    id: "high".into(),
                    anchor_y: 20.0,
                    height: 12.0,
                },
            ],
            chart_height: 300.0,
            grid_size: 3.0,
            protection_radius: 0,
        };
        let result = place_labels(&req).unwrap();
        assert_eq!(result.placements[0].id, "low");
        assert_eq!(result.placements[1].id, "high");
        assert!(result.placements[1].label_y < result.placements[0].label_y);
    }

    #[test]
    fn zero_labels_yield_empty_result() {
        let req = LabelRequest {
            labels: Vec::new(),
            chart_height: 300.0,
            grid_size: 3.0,
            protection_radius: 2,
        };
        let result = place_labels(&req).unwrap();
        assert!(result.placements.is_empty());
        assert!(!result.used_fallback);
    }
}
