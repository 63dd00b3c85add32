use serde::{Deserialize, Serialize};

/// Force-simulation tuning for the shape packer.
///
/// Every knob is explicit; there are no implicit defaults inside the
/// algorithmic core. The `Default` values are the empirically-tuned
/// constants the chart templates shipped with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackConfig {
    /// Weak attraction of every movable node toward canvas center.
    pub gravity_strength: f32,
    /// Pairwise repulsion scale; bigger nodes repel more.
    pub repulsion_strength: f32,
    /// Attraction of each node toward its group centroid.
    pub cluster_strength: f32,
    /// Group centroids are scattered around canvas center by this
    /// fraction of the smaller canvas dimension, so groups do not all
    /// collapse onto the same point.
    pub cluster_offset_fraction: f32,
    /// Collision push strength for same-group pairs. Kept lower than
    /// the cross-group constant so same-group nodes settle tighter.
    pub collision_same_group: f32,
    /// Collision push strength for cross-group pairs.
    pub collision_cross_group: f32,
    /// Minimum extra separation between nodes of different groups.
    pub cross_group_padding_floor: f32,
    /// Extra cross-group separation per unit of combined half-extent.
    pub cross_group_padding_scale: f32,
    /// Fraction of velocity lost per step.
    pub velocity_decay: f32,
    /// Per-step displacement cap; keeps early high-overlap steps from
    /// flinging nodes across the canvas.
    pub max_step_displacement: f32,
    /// Warm-start jitter as a fraction of the placement grid cell.
    pub seed_jitter_fraction: f32,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            gravity_strength: 0.02,
            repulsion_strength: 0.9,
            cluster_strength: 0.015,
            cluster_offset_fraction: 0.12,
            collision_same_group: 0.6,
            collision_cross_group: 0.9,
            cross_group_padding_floor: 15.0,
            cross_group_padding_scale: 0.15,
            velocity_decay: 0.4,
            max_step_displacement: 14.0,
            seed_jitter_fraction: 0.25,
        }
    }
}
