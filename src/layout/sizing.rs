//! Value-to-size mapping under a global area budget.
//!
//! Raw per-item area is proportional to value, with the proportionality
//! constant chosen so the raw total exactly fills the budget. Clamping
//! to `[min_size, max_size]` can push the clamped total back over
//! budget; a single global rescale corrects that, followed by a second
//! clamp. The budget may remain exceeded when min-size clamping wins;
//! that is reported, not raised.

use super::ShapeKind;

/// Sizes for `values`, plus the achieved-over-requested budget ratio.
///
/// Callers validate inputs first: values must be finite and positive,
/// `budget_area` positive, `0 < min_size <= max_size`.
pub(super) fn compute_sizes(
    values: &[f32],
    shape: ShapeKind,
    budget_area: f32,
    min_size: f32,
    max_size: f32,
) -> (Vec<f32>, f32) {
    if values.is_empty() {
        return (Vec::new(), 0.0);
    }
    let total_value: f32 = values.iter().sum();
    let area_per_unit = budget_area / total_value;

    let mut sizes: Vec<f32> = values
        .iter()
        .map(|value| {
            let raw = shape.size_from_area(value * area_per_unit);
            raw.clamp(min_size, max_size)
        })
        .collect();

    let clamped_area: f32 = sizes.iter().map(|s| shape.area_from_size(*s)).sum();
    if clamped_area > budget_area {
        // One global correction pass, not iterative. Area scales with
        // the square of linear extent, hence the sqrt.
        let scale = (budget_area / clamped_area).sqrt();
        for size in &mut sizes {
            *size = (*size * scale).clamp(min_size, max_size);
        }
    }

    let final_area: f32 = sizes.iter().map(|s| shape.area_from_size(*s)).sum();
    let ratio = final_area / budget_area;
    if ratio > 1.0 + 1e-3 {
        tracing::debug!(
            achieved = final_area,
            budget = budget_area,
            "size clamping kept total shape area over budget"
        );
    }
    (sizes, ratio)
}
