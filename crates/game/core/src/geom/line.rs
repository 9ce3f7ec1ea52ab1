//! Bresenham line construction.
//!
//! `line_to` is the inverse of the map's visibility sweep: the tie-breaker
//! returned by a successful `sees` call selects, among the candidate
//! Bresenham lines between two tiles, the exact one the sweep matched.

use super::{Point, sgn};

/// Build the Bresenham line from `from` (exclusive) to `to` (inclusive).
///
/// `tiebreak` selects between equally valid rasterizations; pass the value a
/// successful line-of-sight query returned to reconstruct the matching line,
/// or 0 for the canonical one.
pub fn line_to(from: Point, to: Point, tiebreak: i32) -> Vec<Point> {
    let mut ret = Vec::new();
    if from == to {
        return ret;
    }
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let ax = dx.abs() << 1;
    let ay = dy.abs() << 1;
    let sx = sgn(dx);
    let sy = sgn(dy);
    let mut cur = from;
    let mut t = tiebreak;
    if ax > ay {
        loop {
            if t > 0 {
                cur.y += sy;
                t -= ax;
            }
            cur.x += sx;
            t += ay;
            ret.push(cur);
            if cur == to {
                break;
            }
        }
    } else {
        loop {
            if t > 0 {
                cur.x += sx;
                t -= ay;
            }
            cur.y += sy;
            t += ax;
            ret.push(cur);
            if cur == to {
                break;
            }
        }
    }
    ret
}

/// Extend a trajectory `distance` more steps past its endpoint, along the
/// line's overall direction. Used for blood spurts past an impact point.
pub fn continue_line(trajectory: &[Point], distance: i32) -> Vec<Point> {
    let Some(&end) = trajectory.last() else {
        return Vec::new();
    };
    let start = trajectory.first().copied().unwrap_or(end);
    let delta = end - start;
    let span = delta.x.abs().max(delta.y.abs()).max(1);
    let target = Point::new(
        end.x + delta.x * distance / span,
        end.y + delta.y * distance / span,
    );
    let mut ext = line_to(end, target, 0);
    ext.truncate(distance as usize);
    ext
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::chebyshev_dist;

    #[test]
    fn straight_horizontal_line() {
        let line = line_to(Point::new(0, 0), Point::new(4, 0), 0);
        assert_eq!(
            line,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(3, 0),
                Point::new(4, 0)
            ]
        );
    }

    #[test]
    fn excludes_origin_includes_destination() {
        let line = line_to(Point::new(2, 2), Point::new(5, 7), 0);
        assert!(!line.contains(&Point::new(2, 2)));
        assert_eq!(*line.last().unwrap(), Point::new(5, 7));
    }

    #[test]
    fn consecutive_steps_are_adjacent() {
        let line = line_to(Point::new(-3, 4), Point::new(6, -2), 1);
        let mut prev = Point::new(-3, 4);
        for p in line {
            assert_eq!(chebyshev_dist(prev, p), 1);
            prev = p;
        }
    }

    #[test]
    fn empty_for_zero_length() {
        assert!(line_to(Point::new(1, 1), Point::new(1, 1), 0).is_empty());
    }

    #[test]
    fn continue_line_extends_past_endpoint() {
        let traj = line_to(Point::new(0, 0), Point::new(4, 0), 0);
        let ext = continue_line(&traj, 3);
        assert_eq!(
            ext,
            vec![Point::new(5, 0), Point::new(6, 0), Point::new(7, 0)]
        );
    }
}
