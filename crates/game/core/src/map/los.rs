//! Line of sight over terrain and fields.

use crate::geom::{Point, sgn};
use crate::map::Map;

impl Map {
    /// Can `from` see `to` within `range` (negative range means unlimited)?
    ///
    /// Bresenham sweep over the longer axis. The minor-axis offset counts
    /// down from its upper bound to -1 so straight lines are preferred;
    /// the winning offset is returned and feeds `line_to` to reconstruct the
    /// exact sight line. Blocking is opaque terrain or an opaque field.
    pub fn sees(&self, from: Point, to: Point, range: i32) -> Option<i32> {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let ax = dx.abs() << 1;
        let ay = dy.abs() << 1;
        let sx = sgn(dx);
        let sy = sgn(dy);

        if range >= 0 && (dx.abs() > range || dy.abs() > range) {
            return None;
        }
        if ax > ay {
            // Mostly horizontal.
            let st = sgn(ay - (ax >> 1));
            let mut tc = (ay - (ax >> 1)).abs() * 2 + 1;
            while tc >= -1 {
                let mut t = tc * st;
                let mut x = from.x;
                let mut y = from.y;
                loop {
                    if t > 0 {
                        y += sy;
                        t -= ax;
                    }
                    x += sx;
                    t += ay;
                    let cur = Point::new(x, y);
                    if cur == to {
                        return Some(tc * st);
                    }
                    if !self.trans(cur) || !self.inbounds(cur) {
                        break;
                    }
                }
                tc -= 1;
            }
            None
        } else {
            // Mostly vertical.
            let st = sgn(ax - (ay >> 1));
            let mut tc = (ax - (ay >> 1)).abs() * 2 + 1;
            while tc >= -1 {
                let mut t = tc * st;
                let mut x = from.x;
                let mut y = from.y;
                loop {
                    if t > 0 {
                        x += sx;
                        t -= ay;
                    }
                    y += sy;
                    t += ax;
                    let cur = Point::new(x, y);
                    if cur == to {
                        return Some(tc * st);
                    }
                    if !self.trans(cur) || !self.inbounds(cur) {
                        break;
                    }
                }
                tc -= 1;
            }
            None
        }
    }
}
