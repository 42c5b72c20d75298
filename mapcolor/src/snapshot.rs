//! Flat save/restore contract for a board in play.
//!
//! The snapshot carries colors, brush, view and undo log. Completion flags are
//! never stored; they are recomputed from the colors on restore.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::board::Board;
use crate::error::SnapshotError;
use crate::geometry::limits;
use crate::history::UndoEntry;
use crate::model::{Brush, PaletteIndex, RegionId, Vec2, PALETTE_SIZE};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub level_id: String,
    pub region_colors: BTreeMap<RegionId, Option<PaletteIndex>>,
    pub selected_color: i32,
    pub eraser_mode: bool,
    pub zoom: f64,
    pub pan: [f64; 2],
    #[serde(default)]
    pub undo_history: Vec<UndoEntry>,
}

impl BoardSnapshot {
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }

    pub fn from_json_str(s: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(s)?)
    }
}

fn usable_color(c: Option<PaletteIndex>) -> bool {
    c.map_or(true, |i| (i as usize) < PALETTE_SIZE)
}

impl Board {
    /// `None` while no level is loaded.
    pub fn snapshot(&self) -> Option<BoardSnapshot> {
        let level_id = self.level_id.clone()?;
        let pan = self.view.pan();
        Some(BoardSnapshot {
            level_id,
            region_colors: self.regions.iter().map(|r| (r.id(), r.color())).collect(),
            selected_color: self.brush.selected_color(),
            eraser_mode: self.brush.is_eraser(),
            zoom: self.view.zoom(),
            pan: [pan.x, pan.y],
            undo_history: self.history.iter().copied().collect(),
        })
    }

    /// Apply `snap` on top of the level that is already loaded.
    ///
    /// Entries naming unknown regions or out-of-range colors are dropped with
    /// a warning; a non-finite view falls back to the fitted view. Undo entries
    /// beyond the configured depth are trimmed from the oldest end.
    pub fn restore(&mut self, snap: &BoardSnapshot) -> Result<(), SnapshotError> {
        let Some(level_id) = self.level_id.as_deref() else {
            return Err(SnapshotError::NoLevel);
        };
        if level_id != snap.level_id {
            return Err(SnapshotError::LevelMismatch {
                expected: level_id.to_string(),
                found: snap.level_id.clone(),
            });
        }
        if snap.undo_history.len() > limits::MAX_SNAPSHOT_HISTORY {
            return Err(SnapshotError::CapsExceeded(snap.undo_history.len()));
        }

        for r in &mut self.regions {
            r.color = None;
        }
        let mut dropped = 0usize;
        for (id, color) in &snap.region_colors {
            match self.index.get(id) {
                Some(&i) if usable_color(*color) => self.regions[i].color = *color,
                _ => dropped += 1,
            }
        }

        self.history.clear();
        let entries: Vec<UndoEntry> = snap
            .undo_history
            .iter()
            .filter(|e| self.index.contains_key(&e.region_id) && usable_color(e.previous_color))
            .copied()
            .collect();
        dropped += snap.undo_history.len() - entries.len();
        self.history.extend(entries);

        self.brush = Brush::from_parts(snap.selected_color, snap.eraser_mode);

        self.view.reset();
        if !self.view.set_state(snap.zoom, Vec2::new(snap.pan[0], snap.pan[1])) {
            warn!(zoom = snap.zoom, "snapshot view is unusable, keeping fitted view");
        }

        if dropped > 0 {
            warn!(dropped, "snapshot entries did not match the loaded level");
        }
        self.recompute();
        debug!(level = %snap.level_id, status = ?self.status, "snapshot restored");
        Ok(())
    }
}
