//! Shared geometry helpers. All functions here work with pure geometry,
//! no layout state.

/// Axis-aligned rectangle as `(x, y, w, h)`.
pub type Rect = (f32, f32, f32, f32);

pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.0 < b.0 + b.2 && b.0 < a.0 + a.2 && a.1 < b.1 + b.3 && b.1 < a.1 + a.3
}

pub fn circles_overlap(a: (f32, f32), ra: f32, b: (f32, f32), rb: f32) -> bool {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    let min = ra + rb;
    dx * dx + dy * dy < min * min
}

/// Overlap area of two rectangles (0 when disjoint).
pub fn overlap_area(a: &Rect, b: &Rect) -> f32 {
    let x = (a.0 + a.2).min(b.0 + b.2) - a.0.max(b.0);
    let y = (a.1 + a.3).min(b.1 + b.3) - a.1.max(b.1);
    if x <= 0.0 || y <= 0.0 { 0.0 } else { x * y }
}

pub fn circle_area(radius: f32) -> f32 {
    std::f32::consts::PI * radius * radius
}

pub fn circle_radius_from_area(area: f32) -> f32 {
    (area.max(0.0) / std::f32::consts::PI).sqrt()
}

pub fn square_area(side: f32) -> f32 {
    side * side
}

pub fn square_side_from_area(area: f32) -> f32 {
    area.max(0.0).sqrt()
}

pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_area_no_overlap() {
        let a: Rect = (0.0, 0.0, 10.0, 10.0);
        let b: Rect = (20.0, 20.0, 10.0, 10.0);
        assert_eq!(overlap_area(&a, &b), 0.0);
    }

    #[test]
    fn overlap_area_partial_overlap() {
        let a: Rect = (0.0, 0.0, 10.0, 10.0);
        let b: Rect = (5.0, 5.0, 10.0, 10.0);
        assert_eq!(overlap_area(&a, &b), 25.0);
    }

    #[test]
    fn circles_touching_do_not_overlap() {
        assert!(!circles_overlap((0.0, 0.0), 5.0, (10.0, 0.0), 5.0));
        assert!(circles_overlap((0.0, 0.0), 5.0, (9.9, 0.0), 5.0));
    }

    #[test]
    fn area_maps_round_trip() {
        let r = circle_radius_from_area(circle_area(7.5));
        assert!((r - 7.5).abs() < 1e-4);
        let s = square_side_from_area(square_area(7.5));
        assert!((s - 7.5).abs() < 1e-4);
    }

    #[test]
    fn clamp_orders_bounds() {
        assert_eq!(clamp(5.0, 0.0, 10.0), 5.0);
        assert_eq!(clamp(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(clamp(11.0, 0.0, 10.0), 10.0);
    }
}
