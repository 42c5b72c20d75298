//! Level descriptions as handed over by the level source.
//!
//! A level is always an eager list of region records. `from_json_str` is the
//! strict ingestion path; [`crate::Board::load_level`] itself accepts any
//! descriptor and skips what it cannot use.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::geometry::limits;
use crate::geometry::polygon::{bbox_union, bounding_box, BBox};
use crate::model::{RegionId, Vec2};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionSpec {
    pub id: RegionId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub points: Vec<[f64; 2]>,
    #[serde(default)]
    pub neighbors: Vec<RegionId>,
}

impl RegionSpec {
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(n) => n.clone(),
            None => format!("Region {}", self.id),
        }
    }

    pub fn vertices(&self) -> Vec<Vec2> {
        self.points.iter().map(|&[x, y]| Vec2::new(x, y)).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub regions: Vec<RegionSpec>,
}

impl LevelDescriptor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, regions: Vec<RegionSpec>) -> Self {
        LevelDescriptor {
            id: id.into(),
            name: name.into(),
            regions,
        }
    }

    /// Parse and validate a level document.
    pub fn from_json_str(s: &str) -> Result<Self, LevelError> {
        let level: LevelDescriptor = serde_json::from_str(s)?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    /// Structural checks: size caps, coordinate bounds, unique ids, at least
    /// three vertices per region. Neighbor symmetry is not checked here, see
    /// [`LevelDescriptor::asymmetric_neighbors`].
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.regions.len() > limits::MAX_REGIONS {
            return Err(LevelError::CapsExceeded {
                what: "regions",
                limit: limits::MAX_REGIONS,
            });
        }
        let mut seen = HashSet::with_capacity(self.regions.len());
        let mut total_points = 0usize;
        for r in &self.regions {
            if !seen.insert(r.id) {
                return Err(LevelError::DuplicateId(r.id));
            }
            if r.points.len() > limits::MAX_POINTS_PER_REGION {
                return Err(LevelError::CapsExceeded {
                    what: "points per region",
                    limit: limits::MAX_POINTS_PER_REGION,
                });
            }
            total_points += r.points.len();
            if total_points > limits::MAX_POINTS_TOTAL {
                return Err(LevelError::CapsExceeded {
                    what: "points",
                    limit: limits::MAX_POINTS_TOTAL,
                });
            }
            if r.neighbors.len() > limits::MAX_NEIGHBORS_PER_REGION {
                return Err(LevelError::CapsExceeded {
                    what: "neighbors per region",
                    limit: limits::MAX_NEIGHBORS_PER_REGION,
                });
            }
            if r.points.len() < 3 {
                return Err(LevelError::DegeneratePolygon {
                    region: r.id,
                    points: r.points.len(),
                });
            }
            if r
                .points
                .iter()
                .any(|&[x, y]| !limits::in_coord_bounds(x) || !limits::in_coord_bounds(y))
            {
                return Err(LevelError::OutOfBounds { region: r.id });
            }
        }
        Ok(())
    }

    /// Pairs `(a, b)` where `a` lists `b` as a neighbor, `b` exists, and `b`
    /// does not list `a`. Sorted for stable reporting.
    pub fn asymmetric_neighbors(&self) -> Vec<(RegionId, RegionId)> {
        let lists: HashMap<RegionId, HashSet<RegionId>> = self
            .regions
            .iter()
            .map(|r| (r.id, r.neighbors.iter().copied().collect()))
            .collect();
        let mut out = Vec::new();
        for r in &self.regions {
            for n in &r.neighbors {
                if let Some(back) = lists.get(n) {
                    if !back.contains(&r.id) {
                        out.push((r.id, *n));
                    }
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Bounds of every vertex of every region.
    pub fn bounds(&self) -> Option<BBox> {
        self.regions
            .iter()
            .map(|r| bounding_box(&r.vertices()))
            .fold(None, bbox_union)
    }
}
