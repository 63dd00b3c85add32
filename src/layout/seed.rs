//! Warm-start placement.
//!
//! Nodes start on a coarse grid whose cells are visited in order of
//! increasing distance from canvas center, with a little seeded jitter
//! so the simulation does not begin from a perfectly aligned lattice.
//! The largest node starts at canvas center itself; the center-gravity
//! force then holds it there as a soft anchor. This pass only speeds up
//! convergence, the final layout does not depend on it for correctness.

use super::ShapeKind;
use super::rng::XorShift64Star;
use super::types::SimNode;

pub(super) fn warm_start(
    nodes: &mut [SimNode],
    shape: ShapeKind,
    canvas_width: f32,
    canvas_height: f32,
    protected_top: f32,
    jitter_fraction: f32,
    rng: &mut XorShift64Star,
) {
    if nodes.is_empty() {
        return;
    }

    let usable_top = protected_top;
    let usable_height = (canvas_height - usable_top).max(1.0);
    let center_x = canvas_width * 0.5;
    let center_y = canvas_height * 0.5;

    // Cell edge at least the largest node's extent so one cell can hold
    // any node without immediate deep overlap.
    let largest_extent = nodes
        .iter()
        .map(|n| n.half_extent(shape) * 2.0)
        .fold(1.0f32, f32::max);
    let cell = largest_extent;

    let cols = (canvas_width / cell).ceil().max(1.0) as usize;
    let rows = (usable_height / cell).ceil().max(1.0) as usize;

    let mut cells: Vec<(f32, usize)> = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let cx = ((col as f32 + 0.5) * cell).min(canvas_width);
            let cy = (usable_top + (row as f32 + 0.5) * cell).min(canvas_height);
            let dx = cx - center_x;
            let dy = cy - center_y;
            cells.push((dx * dx + dy * dy, row * cols + col));
        }
    }
    cells.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    // Biggest shapes get the centermost cells.
    let mut order: Vec<usize> = (0..nodes.len()).collect();
    order.sort_by(|&a, &b| {
        nodes[b]
            .size
            .partial_cmp(&nodes[a].size)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let jitter = cell * jitter_fraction;
    let largest = order[0];
    for (rank, &idx) in order.iter().enumerate() {
        let half = nodes[idx].half_extent(shape);
        if idx == largest {
            // Soft anchor: centered start, no jitter.
            nodes[largest].x = center_x;
            nodes[largest].y = center_y.max(usable_top + half);
            continue;
        }
        let cell_idx = cells[rank % cells.len()].1;
        let col = cell_idx % cols;
        let row = cell_idx / cols;
        let x = (col as f32 + 0.5) * cell + rng.next_f32_signed() * jitter;
        let y = usable_top + (row as f32 + 0.5) * cell + rng.next_f32_signed() * jitter;
        nodes[idx].x = x.clamp(half, (canvas_width - half).max(half));
        nodes[idx].y = y.clamp(usable_top + half, (canvas_height - half).max(usable_top + half));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_nodes(sizes: &[f32]) -> Vec<SimNode> {
        sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| SimNode {
                id: format!("n{i}"),
                group: 0,
                size,
                x: 0.0,
                y: 0.0,
                vx: 0.0,
                vy: 0.0,
                fixed: false,
            })
            .collect()
    }

    #[test]
    fn largest_node_starts_at_center() {
        let mut nodes = make_nodes(&[10.0, 30.0, 20.0]);
        let mut rng = XorShift64Star::new(1);
        warm_start(&mut nodes, ShapeKind::Circle, 400.0, 400.0, 0.0, 0.25, &mut rng);
        assert_eq!(nodes[1].x, 200.0);
        assert_eq!(nodes[1].y, 200.0);
    }

    #[test]
    fn all_nodes_start_inside_usable_region() {
        let mut nodes = make_nodes(&[12.0, 8.0, 25.0, 5.0, 16.0, 9.0]);
        let mut rng = XorShift64Star::new(9);
        warm_start(&mut nodes, ShapeKind::Circle, 300.0, 300.0, 40.0, 0.25, &mut rng);
        for node in &nodes {
            let half = node.half_extent(ShapeKind::Circle);
            assert!(node.x >= half - 1e-3 && node.x <= 300.0 - half + 1e-3, "x {}", node.x);
            assert!(node.y >= 40.0 + half - 1e-3 && node.y <= 300.0 - half + 1e-3, "y {}", node.y);
        }
    }

    #[test]
    fn warm_start_is_seed_deterministic() {
        let mut a = make_nodes(&[12.0, 8.0, 25.0, 5.0]);
        let mut b = make_nodes(&[12.0, 8.0, 25.0, 5.0]);
        let mut rng_a = XorShift64Star::new(77);
        let mut rng_b = XorShift64Star::new(77);
        warm_start(&mut a, ShapeKind::Square, 400.0, 300.0, 0.0, 0.25, &mut rng_a);
        warm_start(&mut b, ShapeKind::Square, 400.0, 300.0, 0.0, 0.25, &mut rng_b);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.x, y.x);
            assert_eq!(x.y, y.y);
        }
    }

    #[test]
    fn more_nodes_than_cells_wraps_around() {
        // One giant node forces a coarse grid; the rest reuse cells.
        let sizes: Vec<f32> = std::iter::once(120.0).chain((0..30).map(|_| 4.0)).collect();
        let mut nodes = make_nodes(&sizes);
        let mut rng = XorShift64Star::new(3);
        warm_start(&mut nodes, ShapeKind::Circle, 260.0, 260.0, 0.0, 0.25, &mut rng);
        for node in &nodes {
            assert!(node.x.is_finite() && node.y.is_finite());
        }
    }
}
