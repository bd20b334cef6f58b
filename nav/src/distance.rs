// Directional distance scoring between element bounds.
//
// A candidate is only reachable in a direction when at least one of three
// overlap heuristics places it ahead of the source on the movement axis.
// The perpendicular offset is weighted double so that aligned elements beat
// nearer diagonal ones.

use crate::bounds::Bounds;
use crate::direction::Direction;

/// One axis of a rectangle: low edge, high edge and midpoint, normalized so
/// that movement always goes toward larger values.
#[derive(Debug, Clone, Copy)]
struct Span {
    near: f32,
    far: f32,
    center: f32,
}

impl Span {
    /// The extent along the movement axis, mirrored for leftward and upward
    /// moves so a single forward comparison covers all four directions.
    fn along(bounds: &Bounds, direction: Direction) -> Self {
        let (lo, hi, center) = if direction.is_horizontal() {
            (bounds.left, bounds.right(), bounds.center_x())
        } else {
            (bounds.top, bounds.bottom(), bounds.center_y())
        };
        if direction.is_reverse() {
            Span { near: -hi, far: -lo, center: -center }
        } else {
            Span { near: lo, far: hi, center }
        }
    }

    /// The extent across the movement axis. Offsets on this axis are taken
    /// as absolute values, so no mirroring is needed.
    fn across(bounds: &Bounds, direction: Direction) -> Self {
        let (lo, hi, center) = if direction.is_horizontal() {
            (bounds.top, bounds.bottom(), bounds.center_y())
        } else {
            (bounds.left, bounds.right(), bounds.center_x())
        };
        Span { near: lo, far: hi, center }
    }
}

/// Distance from `from` to `to` when moving in `direction`, or `None` when
/// the candidate does not lie in that direction at all.
///
/// The movement-axis gap is the smallest applicable of three heuristics:
/// the source's leading edge to the candidate's trailing edge, the leading
/// edge to the candidate's center, and trailing edge to trailing edge (the
/// last one strictly, so an exactly aligned candidate does not count as
/// ahead). The perpendicular offset is twice the smallest distance from the
/// source's center line to the candidate's edges or center. The result is
/// the floored Euclidean combination of the two.
pub fn distance_in_direction(from: &Bounds, to: &Bounds, direction: Direction) -> Option<f32> {
    let axis_gap = forward_gap(
        Span::along(from, direction),
        Span::along(to, direction),
    )?;
    let cross = 2.0 * cross_offset(
        Span::across(from, direction),
        Span::across(to, direction),
    );
    Some((axis_gap * axis_gap + cross * cross).sqrt().floor())
}

fn forward_gap(from: Span, to: Span) -> Option<f32> {
    let mut best: Option<f32> = None;
    if from.far <= to.near {
        best = min_gap(best, to.near - from.far);
    }
    if from.far <= to.center {
        best = min_gap(best, to.center - from.far);
    }
    if from.near < to.near {
        best = min_gap(best, to.near - from.near);
    }
    best
}

fn min_gap(current: Option<f32>, candidate: f32) -> Option<f32> {
    match current {
        Some(value) if value <= candidate => current,
        _ => Some(candidate),
    }
}

fn cross_offset(from: Span, to: Span) -> f32 {
    let to_near = (from.center - to.near).abs();
    let to_center = (from.center - to.center).abs();
    let to_far = (from.center - to.far).abs();
    to_near.min(to_center).min(to_far)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(left: f32, top: f32) -> Bounds {
        Bounds::new(left, top, 50.0, 50.0)
    }

    #[test]
    fn test_separated_neighbor_uses_edge_gap() {
        let from = square(0.0, 0.0);
        let to = square(100.0, 0.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), Some(50.0));
    }

    #[test]
    fn test_touching_edges_give_zero_gap() {
        let from = square(0.0, 0.0);
        let to = square(50.0, 0.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), Some(0.0));
    }

    #[test]
    fn test_overlapping_neighbor_uses_center_gap() {
        // Edges overlap, so the leading-edge-to-center heuristic wins:
        // right edge 50 to candidate center 65.
        let from = square(0.0, 0.0);
        let to = square(40.0, 0.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), Some(15.0));
    }

    #[test]
    fn test_contained_candidate_uses_trailing_edges() {
        // Candidate sits inside the source; only the trailing-edge rule
        // applies (0 -> 20).
        let from = Bounds::new(0.0, 0.0, 100.0, 50.0);
        let to = Bounds::new(20.0, 0.0, 30.0, 50.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), Some(20.0));
    }

    #[test]
    fn test_candidate_behind_is_unreachable() {
        let from = square(100.0, 0.0);
        let to = square(0.0, 0.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), None);
    }

    #[test]
    fn test_identical_bounds_are_unreachable() {
        let from = square(30.0, 30.0);
        let to = square(30.0, 30.0);
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(distance_in_direction(&from, &to, direction), None);
        }
    }

    #[test]
    fn test_left_mirrors_right() {
        let a = Bounds::new(0.0, 10.0, 40.0, 30.0);
        let b = Bounds::new(90.0, 0.0, 60.0, 50.0);
        assert_eq!(
            distance_in_direction(&a, &b, Direction::Right),
            distance_in_direction(&b, &a, Direction::Left),
        );
    }

    #[test]
    fn test_up_mirrors_down() {
        let a = Bounds::new(10.0, 0.0, 30.0, 40.0);
        let b = Bounds::new(0.0, 90.0, 50.0, 60.0);
        assert_eq!(
            distance_in_direction(&a, &b, Direction::Down),
            distance_in_direction(&b, &a, Direction::Up),
        );
    }

    #[test]
    fn test_vertical_gap_upward() {
        let from = square(0.0, 100.0);
        let to = square(0.0, 0.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Up), Some(50.0));
    }

    #[test]
    fn test_misalignment_is_doubled() {
        // Axis gap 10, centers 35 apart on the cross axis: the penalty is
        // 70, so the total is floor(sqrt(100 + 4900)) = 70.
        let from = square(0.0, 0.0);
        let to = square(60.0, 60.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), Some(70.0));
    }

    #[test]
    fn test_aligned_beats_nearer_diagonal() {
        let from = square(0.0, 0.0);
        let aligned = square(100.0, 0.0);
        let diagonal = square(60.0, 60.0);
        let straight = distance_in_direction(&from, &aligned, Direction::Right);
        let skewed = distance_in_direction(&from, &diagonal, Direction::Right);
        assert!(straight < skewed);
    }

    #[test]
    fn test_result_is_floored() {
        // Axis gap 1, center offset 1 doubled to 2: sqrt(1 + 4) = 2.23 -> 2.
        let from = Bounds::new(0.0, 0.0, 10.0, 10.0);
        let to = Bounds::new(11.0, 1.0, 10.0, 10.0);
        assert_eq!(distance_in_direction(&from, &to, Direction::Right), Some(2.0));
    }
}
