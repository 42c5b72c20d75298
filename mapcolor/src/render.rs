//! Read-only draw lists for renderers.

use serde::Serialize;

use crate::board::Board;
use crate::geometry::polygon::vertex_mean;
use crate::model::{Color, PaletteIndex, RegionId, Vec2};
use crate::palette::Palette;

/// Border width in pixels at zoom 1.
pub const BORDER_WIDTH: f64 = 2.0;
/// Labels are drawn only when zoomed in past this level.
pub const LABEL_MIN_ZOOM: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionFrame {
    pub id: RegionId,
    pub name: String,
    pub points: Vec<Vec2>,
    pub fill: Color,
    pub color: Option<PaletteIndex>,
    pub label: Option<Vec2>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub regions: Vec<RegionFrame>,
    pub border: Color,
    pub border_width: f64,
    pub zoom: f64,
    pub complete: bool,
    pub valid: bool,
    /// Seconds of play; filled in by the session, zero from a bare board.
    pub elapsed: f64,
}

impl Board {
    /// Screen-space draw list. Regions whose bounds fall entirely outside the
    /// viewport are left out; with no viewport set nothing is culled.
    pub fn frame(&self, palette: &Palette) -> Frame {
        let zoom = self.view.zoom();
        let cull = (self.viewport.width > 0.0 && self.viewport.height > 0.0)
            .then(|| self.view.visible_world(self.viewport));
        let show_labels = zoom > LABEL_MIN_ZOOM;
        let regions = self
            .regions
            .iter()
            .filter(|r| match (cull, r.bbox()) {
                (Some(vis), Some(b)) => vis.intersects(&b),
                _ => true,
            })
            .map(|r| {
                let points: Vec<Vec2> = r
                    .vertices()
                    .iter()
                    .map(|p| self.view.world_to_screen(*p))
                    .collect();
                let label = if show_labels && !r.name().is_empty() {
                    vertex_mean(&points)
                } else {
                    None
                };
                RegionFrame {
                    id: r.id(),
                    name: r.name().to_string(),
                    points,
                    fill: palette.fill(r.color()),
                    color: r.color(),
                    label,
                }
            })
            .collect();
        Frame {
            regions,
            border: palette.border,
            border_width: (BORDER_WIDTH * zoom).max(1.0),
            zoom,
            complete: self.status.complete,
            valid: self.status.valid,
            elapsed: 0.0,
        }
    }
}
