//! Dynamic-programming label placement along a vertical axis.
//!
//! The axis is quantized into `grid_size` cells. Cells within the
//! protection radius of any anchor are off limits, and labels must keep
//! the top-to-bottom order of their anchors. Subject to that, the DP
//! minimizes the summed displacement of every label from the cell
//! nearest its anchor. When no feasible chain exists (the final DP row
//! holds no finite cost) a greedy sweep produces a degraded but always
//! defined result.

use tracing::debug;

const INF: u32 = u32::MAX / 2;

/// Input is sorted by anchor; output is one `label_y` per input, plus
/// whether the greedy fallback ran.
pub(super) fn place_sorted(
    labels: &[(f32, f32)],
    chart_height: f32,
    grid_size: f32,
    protection_radius: usize,
) -> (Vec<f32>, bool) {
    if labels.is_empty() {
        return (Vec::new(), false);
    }

    let grid_count = (chart_height / grid_size).ceil().max(1.0) as usize;
    let occupied = occupied_cells(labels, grid_count, grid_size, protection_radius);

    let ideal: Vec<usize> = labels
        .iter()
        .map(|&(anchor, _)| ((anchor / grid_size).round() as usize).min(grid_count - 1))
        .collect();
    let height_cells: Vec<usize> = labels
        .iter()
        .map(|&(_, height)| ((height / grid_size).ceil() as usize).max(1))
        .collect();

    match solve_dp(
        labels,
        chart_height,
        grid_size,
        grid_count,
        &occupied,
        &ideal,
        &height_cells,
    ) {
        Some(slots) => {
            let ys = slots.iter().map(|&slot| slot as f32 * grid_size).collect();
            (ys, false)
        }
        None => {
            debug!(
                labels = labels.len(),
                grid_count, "label DP infeasible, using greedy sweep"
            );
            (
                greedy_sweep(labels, chart_height, grid_size, &ideal),
                true,
            )
        }
    }
}

fn occupied_cells(
    labels: &[(f32, f32)],
    grid_count: usize,
    grid_size: f32,
    protection_radius: usize,
) -> Vec<bool> {
    let mut occupied = vec![false; grid_count];
    if protection_radius == 0 {
        return occupied;
    }
    for &(anchor, _) in labels {
        let cell = ((anchor / grid_size).round() as usize).min(grid_count - 1);
        let lo = cell.saturating_sub(protection_radius);
        let hi = (cell + protection_radius).min(grid_count - 1);
        for slot in occupied.iter_mut().take(hi + 1).skip(lo) {
            *slot = true;
        }
    }
    occupied
}

fn span_is_free(occupied: &[bool], start: usize, len: usize) -> bool {
    occupied[start..start + len].iter().all(|cell| !cell)
}

/// Top slots for every label, or `None` when the final DP row has no
/// finite entry.
#[allow(clippy::too_many_arguments)]
fn solve_dp(
    labels: &[(f32, f32)],
    chart_height: f32,
    grid_size: f32,
    grid_count: usize,
    occupied: &[bool],
    ideal: &[usize],
    height_cells: &[usize],
) -> Option<Vec<usize>> {
    let n = labels.len();
    let m = grid_count;

    // A slot is usable when the whole span sits inside the chart in
    // pixel terms too: the last ceil-rounded cell may overhang.
    let fits = |i: usize, j: usize| -> bool {
        j + height_cells[i] <= m
            && (j as f32) * grid_size + labels[i].1 <= chart_height + 1e-3
            && span_is_free(occupied, j, height_cells[i])
    };
    let cost = |i: usize, j: usize| -> u32 { ideal[i].abs_diff(j) as u32 };

    let mut dp = vec![vec![INF; m]; n];
    for j in 0..m {
        if fits(0, j) {
            dp[0][j] = cost(0, j);
        }
    }

    // prefix_min[i][k] = (best cost, best slot) over dp[i][0..=k].
    let mut prefix_min = vec![vec![(INF, 0usize); m]; n];
    fill_prefix_min(&dp[0], &mut prefix_min[0]);

    for i in 1..n {
        let prev_h = height_cells[i - 1];
        for j in 0..m {
            if !fits(i, j) || j < prev_h {
                continue;
            }
            let (best, _) = prefix_min[i - 1][j - prev_h];
            if best < INF {
                dp[i][j] = best + cost(i, j);
            }
        }
        let (row, row_prefix) = (&dp[i], &mut prefix_min[i]);
        fill_prefix_min(row, row_prefix);
    }

    let (terminal_cost, mut slot) = prefix_min[n - 1][m - 1];
    if terminal_cost >= INF {
        return None;
    }

    let mut slots = vec![0usize; n];
    slots[n - 1] = slot;
    for i in (1..n).rev() {
        let limit = slot - height_cells[i - 1];
        let (_, prev_slot) = prefix_min[i - 1][limit];
        slot = prev_slot;
        slots[i - 1] = slot;
    }
    Some(slots)
}

fn fill_prefix_min(row: &[u32], out: &mut [(u32, usize)]) {
    let mut best = (INF, 0usize);
    for (j, &value) in row.iter().enumerate() {
        if value < best.0 {
            best = (value, j);
        }
        out[j] = best;
    }
}

/// Degraded-quality sweep: top-to-bottom, each label at its ideal slot
/// or one grid step below the previous label, clamped into the chart.
/// Clamping can compress labels back together when their combined
/// height exceeds the chart; that is the documented degenerate result.
fn greedy_sweep(
    labels: &[(f32, f32)],
    chart_height: f32,
    grid_size: f32,
    ideal: &[usize],
) -> Vec<f32> {
    let mut out = Vec::with_capacity(labels.len());
    let mut prev_bottom = f32::NEG_INFINITY;
    for (i, &(_, height)) in labels.iter().enumerate() {
        let ideal_y = ideal[i] as f32 * grid_size;
        let y = ideal_y
            .max(prev_bottom + grid_size)
            .clamp(0.0, (chart_height - height).max(0.0));
        prev_bottom = y + height;
        out.push(y);
    }
    out
}
