//! Iterative force simulation for shape packing.
//!
//! Each step applies, in order: center gravity, size-scaled charge
//! repulsion, per-group clustering, pairwise collision resolution and
//! boundary containment. The step count is fixed; there is no
//! convergence or oscillation check, and the stage has no error path.
//! Infeasible inputs (combined minimum sizes larger than the canvas)
//! settle into a locally-tight, possibly still overlapping layout.

use crate::config::PackConfig;

use super::ShapeKind;
use super::rng::XorShift64Star;
use super::types::SimNode;

const MIN_DISTANCE: f32 = 1e-3;
// Collision passes per step. Gravity and clustering re-introduce about a
// pixel of overlap between steps; two passes keep chains of touching
// shapes from accumulating it.
const COLLISION_PASSES: usize = 2;

pub(super) struct Simulation<'a> {
    nodes: &'a mut [SimNode],
    shape: ShapeKind,
    cfg: &'a PackConfig,
    canvas_width: f32,
    canvas_height: f32,
    protected_top: f32,
    /// One centroid per group, scattered around canvas center once at
    /// setup so distinct groups pull apart.
    centroids: Vec<(f32, f32)>,
}

impl<'a> Simulation<'a> {
    pub fn new(
        nodes: &'a mut [SimNode],
        shape: ShapeKind,
        cfg: &'a PackConfig,
        canvas_width: f32,
        canvas_height: f32,
        protected_top: f32,
        rng: &mut XorShift64Star,
    ) -> Self {
        let group_count = nodes.iter().map(|n| n.group + 1).max().unwrap_or(1);
        let center_x = canvas_width * 0.5;
        let center_y = (protected_top + canvas_height) * 0.5;
        let scatter = canvas_width.min(canvas_height - protected_top) * cfg.cluster_offset_fraction;
        // Centroids sit evenly on a circle around center with a seeded
        // phase: distinct groups always pull apart, and the phase keeps
        // repeated charts from looking stamped from one mold.
        let phase = rng.next_f32_unit() * std::f32::consts::TAU;
        let centroids = (0..group_count)
            .map(|g| {
                if group_count == 1 {
                    (center_x, center_y)
                } else {
                    let angle = phase + g as f32 * std::f32::consts::TAU / group_count as f32;
                    (
                        center_x + angle.cos() * scatter,
                        center_y + angle.sin() * scatter,
                    )
                }
            })
            .collect();
        Self {
            nodes,
            shape,
            cfg,
            canvas_width,
            canvas_height,
            protected_top,
            centroids,
        }
    }

    pub fn run(&mut self, iterations: usize) {
        for _ in 0..iterations {
            self.apply_center_gravity();
            self.apply_repulsion();
            self.apply_clustering();
            self.integrate();
            for _ in 0..COLLISION_PASSES {
                self.resolve_collisions();
            }
            self.contain();
        }
        // Step interactions can leave sub-pixel violations; one last
        // clamp makes the containment invariant exact.
        self.contain();
    }

    fn center(&self) -> (f32, f32) {
        (
            self.canvas_width * 0.5,
            (self.protected_top + self.canvas_height) * 0.5,
        )
    }

    fn apply_center_gravity(&mut self) {
        let (cx, cy) = self.center();
        let g = self.cfg.gravity_strength;
        for node in self.nodes.iter_mut() {
            if node.fixed {
                continue;
            }
            node.vx += (cx - node.x) * g;
            node.vy += (cy - node.y) * g;
        }
    }

    fn apply_repulsion(&mut self) {
        let strength = self.cfg.repulsion_strength;
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let (ux, uy, dist) = self.separation_axis(i, j);
                let combined =
                    self.nodes[i].half_extent(self.shape) + self.nodes[j].half_extent(self.shape);
                // Inverse-square falloff, scaled by combined size so
                // big shapes carve out more room. Capped so nearly
                // coincident nodes do not explode.
                let force = (strength * combined * combined / (dist * dist))
                    .min(self.cfg.max_step_displacement);
                if !self.nodes[i].fixed {
                    self.nodes[i].vx += ux * force;
                    self.nodes[i].vy += uy * force;
                }
                if !self.nodes[j].fixed {
                    self.nodes[j].vx -= ux * force;
                    self.nodes[j].vy -= uy * force;
                }
            }
        }
    }

    fn apply_clustering(&mut self) {
        let strength = self.cfg.cluster_strength;
        for node in self.nodes.iter_mut() {
            if node.fixed {
                continue;
            }
            let (gx, gy) = self.centroids[node.group];
            node.vx += (gx - node.x) * strength;
            node.vy += (gy - node.y) * strength;
        }
    }

    fn integrate(&mut self) {
        let retain = 1.0 - self.cfg.velocity_decay;
        let cap = self.cfg.max_step_displacement;
        for node in self.nodes.iter_mut() {
            if node.fixed {
                node.vx = 0.0;
                node.vy = 0.0;
                continue;
            }
            let dx = node.vx.clamp(-cap, cap);
            let dy = node.vy.clamp(-cap, cap);
            node.x += dx;
            node.y += dy;
            node.vx *= retain;
            node.vy *= retain;
        }
    }

    fn resolve_collisions(&mut self) {
        for i in 0..self.nodes.len() {
            for j in (i + 1)..self.nodes.len() {
                let min_sep = self.required_separation(i, j);
                let (ux, uy, dist) = self.separation_axis(i, j);
                if dist >= min_sep {
                    continue;
                }
                let same_group = self.nodes[i].group == self.nodes[j].group;
                let strength = if same_group {
                    self.cfg.collision_same_group
                } else {
                    self.cfg.collision_cross_group
                };
                let push = (min_sep - dist) * strength;
                match (self.nodes[i].fixed, self.nodes[j].fixed) {
                    (false, false) => {
                        self.nodes[i].x += ux * push * 0.5;
                        self.nodes[i].y += uy * push * 0.5;
                        self.nodes[j].x -= ux * push * 0.5;
                        self.nodes[j].y -= uy * push * 0.5;
                    }
                    (false, true) => {
                        self.nodes[i].x += ux * push;
                        self.nodes[i].y += uy * push;
                    }
                    (true, false) => {
                        self.nodes[j].x -= ux * push;
                        self.nodes[j].y -= uy * push;
                    }
                    (true, true) => {}
                }
            }
        }
    }

    fn contain(&mut self) {
        for node in self.nodes.iter_mut() {
            if node.fixed {
                continue;
            }
            let half = node.half_extent(self.shape);
            let min_x = half;
            let max_x = (self.canvas_width - half).max(min_x);
            let min_y = self.protected_top + half;
            let max_y = (self.canvas_height - half).max(min_y);
            if node.x < min_x || node.x > max_x {
                node.x = node.x.clamp(min_x, max_x);
                node.vx = 0.0;
            }
            if node.y < min_y || node.y > max_y {
                node.y = node.y.clamp(min_y, max_y);
                node.vy = 0.0;
            }
        }
    }

    /// Unit vector from node `j` toward node `i`, plus their distance.
    /// Coincident nodes get a fixed axis so the push stays deterministic.
    fn separation_axis(&self, i: usize, j: usize) -> (f32, f32, f32) {
        let dx = self.nodes[i].x - self.nodes[j].x;
        let dy = self.nodes[i].y - self.nodes[j].y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < MIN_DISTANCE {
            (1.0, 0.0, MIN_DISTANCE)
        } else {
            (dx / dist, dy / dist, dist)
        }
    }

    fn required_separation(&self, i: usize, j: usize) -> f32 {
        required_separation(&self.nodes[i], &self.nodes[j], self.shape, self.cfg)
    }
}

pub(super) fn required_separation(
    a: &SimNode,
    b: &SimNode,
    shape: ShapeKind,
    cfg: &PackConfig,
) -> f32 {
    let combined = a.half_extent(shape) + b.half_extent(shape);
    if a.group == b.group {
        combined
    } else {
        combined + (combined * cfg.cross_group_padding_scale).max(cfg.cross_group_padding_floor)
    }
}

/// Worst remaining penetration against the full separation requirement
/// (cross-group padding included). Zero when the layout is clean.
pub(super) fn max_penetration(nodes: &[SimNode], shape: ShapeKind, cfg: &PackConfig) -> f32 {
    let mut worst = 0.0f32;
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let dx = nodes[i].x - nodes[j].x;
            let dy = nodes[i].y - nodes[j].y;
            let dist = (dx * dx + dy * dy).sqrt();
            let required = required_separation(&nodes[i], &nodes[j], shape, cfg);
            worst = worst.max(required - dist);
        }
    }
    worst
}
