//! The puzzle board: regions, brush, undo log and view.
//!
//! Every mutation that can change a region color recomputes the completion
//! flags eagerly with a full pass over the adjacency lists.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::{EngineConfig, ViewConfig};
use crate::geometry::limits;
use crate::geometry::polygon::{bbox_union, BBox};
use crate::history::{UndoEntry, UndoHistory};
use crate::level::LevelDescriptor;
use crate::model::{Brush, Completion, PaletteIndex, RegionId, Vec2, PALETTE_SIZE};
use crate::region::Region;
use crate::view::{ViewTransform, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardPhase {
    /// No level loaded yet.
    Empty,
    Playing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorOutcome {
    Changed,
    /// The region already had the requested color; nothing recorded.
    Unchanged,
    /// Unknown region or unusable brush; nothing touched.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    Reverted(RegionId),
    Empty,
    /// The entry named a region that is not on the board; it was dropped.
    Stale(RegionId),
}

#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) level_id: Option<String>,
    pub(crate) level_name: String,
    pub(crate) regions: Vec<Region>,
    pub(crate) index: HashMap<RegionId, usize>,
    pub(crate) content_bounds: Option<BBox>,
    pub(crate) view: ViewTransform,
    pub(crate) view_cfg: ViewConfig,
    pub(crate) viewport: Viewport,
    pub(crate) brush: Brush,
    pub(crate) history: UndoHistory,
    pub(crate) status: Completion,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(&EngineConfig::default())
    }
}

impl Board {
    /// A view config that fails [`ViewConfig::validate`] is replaced by the
    /// desktop preset and undo depth is capped at the snapshot limit, both
    /// with a warning.
    pub fn new(cfg: &EngineConfig) -> Self {
        let view_cfg = match cfg.view.validate() {
            Ok(()) => cfg.view,
            Err(e) => {
                warn!(error = %e, "invalid view config, using desktop preset");
                ViewConfig::desktop()
            }
        };
        let max_undo_steps = if cfg.max_undo_steps > limits::MAX_SNAPSHOT_HISTORY {
            warn!(requested = cfg.max_undo_steps, "undo depth capped");
            limits::MAX_SNAPSHOT_HISTORY
        } else {
            cfg.max_undo_steps
        };
        Board {
            level_id: None,
            level_name: String::new(),
            regions: Vec::new(),
            index: HashMap::new(),
            content_bounds: None,
            view: ViewTransform::new(&view_cfg),
            view_cfg,
            viewport: Viewport::new(0.0, 0.0),
            brush: Brush::default(),
            history: UndoHistory::new(max_undo_steps),
            status: Completion::default(),
        }
    }

    pub fn phase(&self) -> BoardPhase {
        if self.level_id.is_some() {
            BoardPhase::Playing
        } else {
            BoardPhase::Empty
        }
    }

    pub fn level_id(&self) -> Option<&str> {
        self.level_id.as_deref()
    }
    pub fn level_name(&self) -> &str {
        &self.level_name
    }
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.index.get(&id).map(|&i| &self.regions[i])
    }
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    pub fn brush(&self) -> Brush {
        self.brush
    }
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }
    /// Flags as of the last mutation.
    pub fn status(&self) -> Completion {
        self.status
    }
    pub fn content_bounds(&self) -> Option<BBox> {
        self.content_bounds
    }

    /// Replace the board contents with `level` and fit it into `viewport`.
    ///
    /// Regions with fewer than three vertices and repeated ids are skipped.
    /// One-sided neighbor references are kept as given and only reported.
    pub fn load_level(&mut self, level: &LevelDescriptor, viewport: Viewport) {
        self.regions.clear();
        self.index.clear();
        for spec in &level.regions {
            if spec.points.len() < 3 {
                warn!(region = spec.id, points = spec.points.len(), "skipping degenerate region");
                continue;
            }
            if self.index.contains_key(&spec.id) {
                warn!(region = spec.id, "skipping duplicate region id");
                continue;
            }
            self.index.insert(spec.id, self.regions.len());
            self.regions.push(Region::new(
                spec.id,
                spec.display_name(),
                spec.vertices(),
                spec.neighbors.iter().copied(),
            ));
        }
        let one_sided = level.asymmetric_neighbors();
        if !one_sided.is_empty() {
            warn!(level = %level.id, pairs = ?one_sided, "level has one-sided neighbor references");
        }
        self.content_bounds = self.regions.iter().map(Region::bbox).fold(None, bbox_union);
        self.level_id = Some(level.id.clone());
        self.level_name = level.name.clone();
        self.brush = Brush::default();
        self.history.clear();
        self.viewport = viewport;
        self.fit_view();
        self.recompute();
        debug!(
            level = %level.id,
            regions = self.regions.len(),
            zoom = self.view.zoom(),
            "level loaded"
        );
    }

    fn fit_view(&mut self) {
        let area = self.viewport.minus_bottom(self.view_cfg.ui_margin);
        self.view
            .fit_to_content(self.content_bounds, area, self.view_cfg.fit_padding_ratio);
    }

    /// Re-fit when the viewport size changes. Returns whether it did.
    /// Non-finite or negative sizes are ignored.
    pub fn resize_viewport(&mut self, viewport: Viewport) -> bool {
        let usable = |v: f64| v.is_finite() && v >= 0.0;
        if !usable(viewport.width) || !usable(viewport.height) {
            warn!(width = viewport.width, height = viewport.height, "ignoring bad viewport size");
            return false;
        }
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.fit_view();
        true
    }

    pub fn select_color(&mut self, index: PaletteIndex) -> bool {
        if index as usize >= PALETTE_SIZE {
            return false;
        }
        self.brush = Brush::Paint(index);
        true
    }

    pub fn select_eraser(&mut self) {
        self.brush = Brush::Eraser;
    }

    /// First region, in load order, containing the world point under `screen`.
    pub fn resolve_click(&self, screen: Vec2) -> Option<RegionId> {
        if !screen.is_finite() {
            return None;
        }
        let world = self.view.screen_to_world(screen);
        if let Some(b) = self.content_bounds {
            if !b.contains(world) {
                return None;
            }
        }
        self.regions.iter().find(|r| r.contains(world)).map(Region::id)
    }

    /// Resolve a click and paint the hit region with the current brush.
    pub fn click(&mut self, screen: Vec2) -> (Option<RegionId>, ColorOutcome) {
        match self.resolve_click(screen) {
            Some(id) => (Some(id), self.color_region(id, self.brush)),
            None => (None, ColorOutcome::Ignored),
        }
    }

    pub fn color_region(&mut self, id: RegionId, brush: Brush) -> ColorOutcome {
        let Some(target) = brush.target() else {
            warn!(?brush, "ignoring out-of-range palette index");
            return ColorOutcome::Ignored;
        };
        let Some(&i) = self.index.get(&id) else {
            warn!(region = id, "ignoring color request for unknown region");
            return ColorOutcome::Ignored;
        };
        let region = &mut self.regions[i];
        if region.color == target {
            return ColorOutcome::Unchanged;
        }
        self.history.push(UndoEntry {
            region_id: id,
            previous_color: region.color,
        });
        region.color = target;
        trace!(region = id, color = ?target, "region colored");
        self.recompute();
        ColorOutcome::Changed
    }

    pub fn undo(&mut self) -> UndoOutcome {
        let Some(entry) = self.history.pop() else {
            return UndoOutcome::Empty;
        };
        let Some(&i) = self.index.get(&entry.region_id) else {
            warn!(region = entry.region_id, "dropping undo entry for unknown region");
            return UndoOutcome::Stale(entry.region_id);
        };
        self.regions[i].color = entry.previous_color;
        trace!(region = entry.region_id, color = ?entry.previous_color, "undo");
        self.recompute();
        UndoOutcome::Reverted(entry.region_id)
    }

    /// Clear every color and the undo log and go back to the first palette
    /// color. The level and view stay.
    pub fn reset(&mut self) {
        for r in &mut self.regions {
            r.color = None;
        }
        self.history.clear();
        self.brush = Brush::default();
        self.recompute();
        debug!(regions = self.regions.len(), "board reset");
    }

    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        self.view.pan_by(delta)
    }

    pub fn zoom_by(&mut self, factor: f64, anchor: Option<Vec2>) -> bool {
        self.view.zoom_by(factor, anchor)
    }

    pub fn zoom_in(&mut self, anchor: Option<Vec2>) -> bool {
        self.view.zoom_by(1.0 + self.view_cfg.zoom_step, anchor)
    }

    pub fn zoom_out(&mut self, anchor: Option<Vec2>) -> bool {
        self.view.zoom_by(1.0 - self.view_cfg.zoom_step, anchor)
    }

    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// `complete` when at least one region exists and all are colored;
    /// `valid` when additionally no listed neighbor shares a region's color.
    /// Neighbor ids missing from the board are not checked.
    pub fn check_completion(&self) -> Completion {
        if self.regions.is_empty() || self.regions.iter().any(|r| r.color.is_none()) {
            return Completion::default();
        }
        let valid = self.regions.iter().all(|r| {
            r.neighbors().iter().all(|n| {
                if *n == r.id() {
                    return true;
                }
                match self.index.get(n) {
                    Some(&j) => self.regions[j].color != r.color,
                    None => true,
                }
            })
        });
        Completion {
            complete: true,
            valid,
        }
    }

    /// Pairs of neighboring regions that currently share a color, each pair
    /// reported once with the smaller id first.
    pub fn conflicts(&self) -> Vec<(RegionId, RegionId)> {
        let mut out = Vec::new();
        for r in &self.regions {
            let Some(c) = r.color else { continue };
            for n in r.neighbors() {
                if *n == r.id() {
                    continue;
                }
                if let Some(&j) = self.index.get(n) {
                    if self.regions[j].color == Some(c) {
                        out.push((r.id().min(*n), r.id().max(*n)));
                    }
                }
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    pub(crate) fn recompute(&mut self) {
        self.status = self.check_completion();
    }
}
