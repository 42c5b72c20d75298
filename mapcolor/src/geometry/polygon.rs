//! Point-in-polygon testing and bounds over ordered vertex loops.
//!
//! Uses horizontal ray casting with the even-odd rule. Points exactly on an
//! edge or vertex may resolve either way.

use serde::{Deserialize, Serialize};

use crate::model::Vec2;

/// Axis-aligned bounds in world units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
    pub fn intersects(&self, o: &BBox) -> bool {
        !(self.max_x < o.min_x || o.max_x < self.min_x || self.max_y < o.min_y || o.max_y < self.min_y)
    }
    pub fn union(self, o: BBox) -> BBox {
        BBox {
            min_x: self.min_x.min(o.min_x),
            min_y: self.min_y.min(o.min_y),
            max_x: self.max_x.max(o.max_x),
            max_y: self.max_y.max(o.max_y),
        }
    }
}

/// Union of optional boxes; `None` only when both are.
pub fn bbox_union(a: Option<BBox>, b: Option<BBox>) -> Option<BBox> {
    match (a, b) {
        (None, x) => x,
        (x, None) => x,
        (Some(a), Some(b)) => Some(a.union(b)),
    }
}

/// Bounding box of a vertex list, `None` when it is empty.
pub fn bounding_box(points: &[Vec2]) -> Option<BBox> {
    let first = points.first()?;
    let mut b = BBox {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };
    for p in &points[1..] {
        if p.x < b.min_x {
            b.min_x = p.x;
        }
        if p.x > b.max_x {
            b.max_x = p.x;
        }
        if p.y < b.min_y {
            b.min_y = p.y;
        }
        if p.y > b.max_y {
            b.max_y = p.y;
        }
    }
    Some(b)
}

/// Even-odd point-in-polygon test.
///
/// For each edge `(v[j], v[i])` with `j` the predecessor of `i`, a crossing
/// is counted when the edge straddles the horizontal line through `p` and the
/// intersection lies to the right of `p`. Horizontal edges never straddle, so
/// the division below never sees a zero denominator.
pub fn point_in_polygon(p: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let vi = polygon[i];
        let vj = polygon[j];
        if (vi.y > p.y) != (vj.y > p.y) && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Arithmetic mean of the vertices; used to anchor region labels.
pub fn vertex_mean(points: &[Vec2]) -> Option<Vec2> {
    if points.is_empty() {
        return None;
    }
    let mut sx = 0.0;
    let mut sy = 0.0;
    for p in points {
        sx += p.x;
        sy += p.y;
    }
    let n = points.len() as f64;
    Some(Vec2::new(sx / n, sy / n))
}
