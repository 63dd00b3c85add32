use serde::{Deserialize, Serialize};

use crate::geometry;

/// Shape family for a packing run. The shape drives both the
/// area-to-extent mapping and the collision half-extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// `size` is the radius.
    Circle,
    /// `size` is the side length.
    Square,
}

impl ShapeKind {
    pub fn size_from_area(self, area: f32) -> f32 {
        match self {
            ShapeKind::Circle => geometry::circle_radius_from_area(area),
            ShapeKind::Square => geometry::square_side_from_area(area),
        }
    }

    pub fn area_from_size(self, size: f32) -> f32 {
        match self {
            ShapeKind::Circle => geometry::circle_area(size),
            ShapeKind::Square => geometry::square_area(size),
        }
    }

    /// Half of the shape's extent along any axis through its center.
    pub fn half_extent(self, size: f32) -> f32 {
        match self {
            ShapeKind::Circle => size,
            ShapeKind::Square => size * 0.5,
        }
    }
}

/// One packable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    /// Positive magnitude driving shape area. Zero, negative and
    /// non-finite values are rejected, not silently dropped.
    pub value: f32,
    /// Cluster key; absent means a single implicit group.
    #[serde(default)]
    pub group: Option<String>,
    /// Pinned nodes keep their warm-start position but still repel and
    /// collide, so movable nodes flow around them.
    #[serde(default)]
    pub fixed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingRequest {
    pub nodes: Vec<NodeSpec>,
    pub shape: ShapeKind,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Fraction of canvas area the shapes may collectively occupy, in (0, 1).
    pub area_budget_fraction: f32,
    pub min_size: f32,
    pub max_size: f32,
    /// Vertical band at the top of the canvas (e.g. a legend) that no
    /// shape extent may intrude into.
    #[serde(default)]
    pub protected_top_height: f32,
    /// Fixed simulation step count. There is no convergence check; the
    /// step count alone bounds the run.
    pub iterations: usize,
    pub rng_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackedNode {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    /// Drawing-order hint: smaller shapes draw above larger ones.
    pub z_index: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingResult {
    pub nodes: Vec<PackedNode>,
    /// Total final shape area over the requested budget area. Values
    /// above 1 mean min-size clamping kept the run over budget.
    pub achieved_budget_ratio: f32,
    /// Worst remaining pairwise penetration (required separation minus
    /// actual distance), 0 when the layout is fully separated. Callers
    /// needing a hard non-overlap guarantee check this post-hoc.
    pub max_penetration: f32,
}

/// One label to place along the vertical axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSpec {
    pub id: String,
    /// Ideal (data-point) vertical position of the label's top edge.
    pub anchor_y: f32,
    /// Label block height, pre-computed via the caller's `TextMeasurer`.
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelRequest {
    pub labels: Vec<LabelSpec>,
    pub chart_height: f32,
    /// Quantization cell for the DP slot grid.
    pub grid_size: f32,
    /// Cells on each side of every anchor that no label may cover.
    pub protection_radius: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub id: String,
    pub label_y: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelResult {
    /// Placements in the same order as the request's labels.
    pub placements: Vec<LabelPlacement>,
    /// True when the DP found no feasible assignment and the greedy
    /// sweep produced the (degraded but always defined) result.
    pub used_fallback: bool,
}

/// Mutable simulation state for one node, threaded through the warm
/// start and the force loop.
#[derive(Debug, Clone)]
pub(crate) struct SimNode {
    pub id: String,
    pub group: usize,
    pub size: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub fixed: bool,
}

impl SimNode {
    pub fn half_extent(&self, shape: ShapeKind) -> f32 {
        shape.half_extent(self.size)
    }
}
