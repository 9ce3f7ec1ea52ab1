//! A* routing over the reality bubble.

use crate::config::GameConfig;
use crate::geom::{Point, chebyshev_dist, line_to};
use crate::map::Map;

const BUBBLE: usize = GameConfig::BUBBLE_SIZE;

#[derive(Clone, Copy, PartialEq, Eq)]
enum ListState {
    None,
    Open,
    Closed,
}

impl Map {
    /// Route from `from` (exclusive) to `to` (inclusive). An empty result
    /// means unreachable.
    ///
    /// 8-connected over walkable and bashable tiles. A closed door costs +4
    /// (open, then step); a bashable obstacle +18 (worst-case smashing). The
    /// heuristic `2 * chebyshev` overweights distance on purpose: the search
    /// stays fast at the cost of strict optimality. Ties break toward the
    /// most recently opened node, which keeps routes looking straight.
    pub fn route(&self, from: Point, to: Point) -> Vec<Point> {
        if !self.inbounds(from) || !self.inbounds(to) {
            // Degrade to the straight line when one endpoint is unloaded.
            return match self.sees(from, to, -1) {
                Some(t) => line_to(from, to, t),
                None => Vec::new(),
            };
        }

        let mut list = [[ListState::None; BUBBLE]; BUBBLE];
        let mut score = [[0i32; BUBBLE]; BUBBLE];
        let mut gscore = [[0i32; BUBBLE]; BUBBLE];
        let mut parent = [[Point::new(-1, -1); BUBBLE]; BUBBLE];
        let mut open: Vec<Point> = Vec::new();

        list[from.x as usize][from.y as usize] = ListState::Open;
        open.push(from);

        let step_cost = |q: Point, base: i32| {
            let def = self.terrain(q);
            let mut g = base + self.move_cost(q);
            if def.open_to.is_some()
                && !def.flags.contains(crate::catalog::TerrainFlags::LOCKED)
            {
                // Closed door: a turn to open it and a turn to move there.
                g += 4;
            } else if def.move_cost == 0 && def.is_bashable() {
                // Worst case scenario with damage penalty.
                g += 18;
            }
            g
        };

        let mut done = false;
        while !done && !open.is_empty() {
            // Most recently pushed node wins ties (strict < while scanning).
            let mut best = i32::MAX;
            let mut index = 0;
            for (i, p) in open.iter().enumerate() {
                if i == 0 || score[p.x as usize][p.y as usize] < best {
                    best = score[p.x as usize][p.y as usize];
                    index = i;
                }
            }
            let cur = open[index];

            for q in cur.adjacent() {
                if q == to {
                    done = true;
                    parent[q.x as usize][q.y as usize] = cur;
                } else if self.inbounds(q) && (self.move_cost(q) > 0 || self.is_bashable(q)) {
                    let (qx, qy) = (q.x as usize, q.y as usize);
                    match list[qx][qy] {
                        ListState::None => {
                            list[qx][qy] = ListState::Open;
                            open.push(q);
                            parent[qx][qy] = cur;
                            gscore[qx][qy] =
                                step_cost(q, gscore[cur.x as usize][cur.y as usize]);
                            score[qx][qy] = gscore[qx][qy] + 2 * chebyshev_dist(q, to);
                        }
                        ListState::Open => {
                            let newg = step_cost(q, gscore[cur.x as usize][cur.y as usize]);
                            if newg < gscore[qx][qy] {
                                gscore[qx][qy] = newg;
                                parent[qx][qy] = cur;
                                score[qx][qy] = newg + 2 * chebyshev_dist(q, to);
                            }
                        }
                        ListState::Closed => {}
                    }
                }
            }
            list[cur.x as usize][cur.y as usize] = ListState::Closed;
            open.remove(index);
        }

        let mut ret = Vec::new();
        if done {
            let mut tmp = Vec::new();
            let mut cur = to;
            while cur != from {
                tmp.push(cur);
                let par = parent[cur.x as usize][cur.y as usize];
                if chebyshev_dist(cur, par) > 1 {
                    tracing::warn!(%cur, %par, "discontinuous route, discarding");
                    return ret;
                }
                cur = par;
            }
            ret.extend(tmp.into_iter().rev());
        }
        ret
    }
}
