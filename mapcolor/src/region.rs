use std::collections::BTreeSet;

use crate::geometry::polygon::{bounding_box, point_in_polygon, BBox};
use crate::model::{PaletteIndex, RegionId, Vec2};

/// A named polygon with a color slot and the ids of the regions it borders.
///
/// Geometry and neighbors are fixed at construction; only the color changes,
/// and only through the board.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    id: RegionId,
    name: String,
    vertices: Vec<Vec2>,
    bbox: Option<BBox>,
    neighbors: BTreeSet<RegionId>,
    pub(crate) color: Option<PaletteIndex>,
}

impl Region {
    pub fn new(
        id: RegionId,
        name: impl Into<String>,
        vertices: Vec<Vec2>,
        neighbors: impl IntoIterator<Item = RegionId>,
    ) -> Self {
        let bbox = bounding_box(&vertices);
        Region {
            id,
            name: name.into(),
            vertices,
            bbox,
            neighbors: neighbors.into_iter().collect(),
            color: None,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }
    pub fn bbox(&self) -> Option<BBox> {
        self.bbox
    }
    pub fn neighbors(&self) -> &BTreeSet<RegionId> {
        &self.neighbors
    }
    pub fn is_neighbor(&self, other: RegionId) -> bool {
        self.neighbors.contains(&other)
    }
    pub fn color(&self) -> Option<PaletteIndex> {
        self.color
    }

    /// Hit test in world coordinates: bounding box first, then even-odd.
    pub fn contains(&self, p: Vec2) -> bool {
        match self.bbox {
            Some(b) if b.contains(p) => point_in_polygon(p, &self.vertices),
            _ => false,
        }
    }
}
