//! One play session: a board, the palette it is drawn with and the clock.
//!
//! Time is supplied by the caller as seconds on any monotonic scale, so the
//! session works the same on native targets and in the browser. The clock
//! stops the first time the board becomes complete and valid, and runs again
//! if a later edit breaks the solution.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, ColorOutcome, UndoOutcome};
use crate::config::EngineConfig;
use crate::error::SnapshotError;
use crate::level::LevelDescriptor;
use crate::model::{PaletteIndex, RegionId, Vec2};
use crate::palette::Palette;
use crate::render::Frame;
use crate::snapshot::BoardSnapshot;
use crate::view::Viewport;

/// Input already translated from pointer/wheel/keyboard events.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    Click { x: f64, y: f64 },
    Pan { dx: f64, dy: f64 },
    Zoom { factor: f64, anchor: Option<Vec2> },
    ZoomIn { anchor: Option<Vec2> },
    ZoomOut { anchor: Option<Vec2> },
    Undo,
    Reset,
    ResetView,
    SelectColor { index: PaletteIndex },
    SelectEraser,
    Resize { width: f64, height: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Colored { region: RegionId, outcome: ColorOutcome },
    /// A click that hit no region.
    Missed,
    Undone(UndoOutcome),
    Reset,
    ViewChanged(bool),
    BrushChanged(bool),
}

impl EventOutcome {
    /// Whether anything a renderer shows may have changed.
    pub fn needs_redraw(&self) -> bool {
        match *self {
            EventOutcome::Colored { outcome, .. } => outcome == ColorOutcome::Changed,
            EventOutcome::Missed => false,
            EventOutcome::Undone(u) => matches!(u, UndoOutcome::Reverted(_)),
            EventOutcome::Reset => true,
            EventOutcome::ViewChanged(c) | EventOutcome::BrushChanged(c) => c,
        }
    }
}

/// Board snapshot plus play time, stored as `{"board": {...}, "elapsed": s}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    /// Seconds played when the snapshot was taken.
    #[serde(default)]
    pub elapsed: f64,
}

#[derive(Debug)]
pub struct Session {
    board: Board,
    palette: Arc<Palette>,
    started_at: Option<f64>,
    solved_at: Option<f64>,
}

impl Session {
    pub fn new(cfg: &EngineConfig, palette: Arc<Palette>) -> Self {
        Session {
            board: Board::new(cfg),
            palette,
            started_at: None,
            solved_at: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Swap in a different palette; colors already on the board keep their
    /// indices and simply render with the new entries.
    pub fn set_palette(&mut self, palette: Arc<Palette>) {
        self.palette = palette;
    }

    pub fn load_level(&mut self, level: &LevelDescriptor, viewport: Viewport, now: f64) {
        self.board.load_level(level, viewport);
        self.started_at = Some(now);
        self.solved_at = None;
    }

    pub fn elapsed(&self, now: f64) -> f64 {
        match (self.started_at, self.solved_at) {
            (None, _) => 0.0,
            (Some(start), Some(end)) => (end - start).max(0.0),
            (Some(start), None) => (now - start).max(0.0),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.solved_at.is_some()
    }

    pub fn handle(&mut self, event: InputEvent, now: f64) -> EventOutcome {
        let outcome = match event {
            InputEvent::Click { x, y } => match self.board.click(Vec2::new(x, y)) {
                (Some(region), outcome) => EventOutcome::Colored { region, outcome },
                (None, _) => EventOutcome::Missed,
            },
            InputEvent::Pan { dx, dy } => {
                EventOutcome::ViewChanged(self.board.pan_by(Vec2::new(dx, dy)))
            }
            InputEvent::Zoom { factor, anchor } => {
                EventOutcome::ViewChanged(self.board.zoom_by(factor, anchor))
            }
            InputEvent::ZoomIn { anchor } => EventOutcome::ViewChanged(self.board.zoom_in(anchor)),
            InputEvent::ZoomOut { anchor } => {
                EventOutcome::ViewChanged(self.board.zoom_out(anchor))
            }
            InputEvent::Undo => EventOutcome::Undone(self.board.undo()),
            InputEvent::Reset => {
                self.board.reset();
                self.started_at = Some(now);
                self.solved_at = None;
                EventOutcome::Reset
            }
            InputEvent::ResetView => {
                self.board.reset_view();
                EventOutcome::ViewChanged(true)
            }
            InputEvent::SelectColor { index } => {
                EventOutcome::BrushChanged(self.board.select_color(index))
            }
            InputEvent::SelectEraser => {
                self.board.select_eraser();
                EventOutcome::BrushChanged(true)
            }
            InputEvent::Resize { width, height } => {
                EventOutcome::ViewChanged(self.board.resize_viewport(Viewport::new(width, height)))
            }
        };
        self.update_clock(now);
        outcome
    }

    /// Paint region `id` with the current brush, as a click on it would.
    pub fn paint(&mut self, id: RegionId, now: f64) -> ColorOutcome {
        let outcome = self.board.color_region(id, self.board.brush());
        self.update_clock(now);
        outcome
    }

    fn update_clock(&mut self, now: f64) {
        let status = self.board.status();
        if status.complete && status.valid {
            if self.solved_at.is_none() && self.started_at.is_some() {
                self.solved_at = Some(now);
                debug!(elapsed = self.elapsed(now), "puzzle solved");
            }
        } else {
            self.solved_at = None;
        }
    }

    pub fn frame(&self, now: f64) -> Frame {
        let mut frame = self.board.frame(&self.palette);
        frame.elapsed = self.elapsed(now);
        frame
    }

    pub fn snapshot(&self, now: f64) -> Option<SessionSnapshot> {
        Some(SessionSnapshot {
            board: self.board.snapshot()?,
            elapsed: self.elapsed(now),
        })
    }

    /// Load `level` and put the saved state on top of it. The level must be
    /// the one the snapshot was taken on. On error the current game, clock
    /// included, is left as it was.
    pub fn restore(
        &mut self,
        level: &LevelDescriptor,
        viewport: Viewport,
        snap: &SessionSnapshot,
        now: f64,
    ) -> Result<(), SnapshotError> {
        if level.id != snap.board.level_id {
            return Err(SnapshotError::LevelMismatch {
                expected: level.id.clone(),
                found: snap.board.level_id.clone(),
            });
        }
        let mut next = self.board.clone();
        next.load_level(level, viewport);
        next.restore(&snap.board)?;
        self.board = next;
        let elapsed = if snap.elapsed.is_finite() {
            snap.elapsed.max(0.0)
        } else {
            0.0
        };
        self.started_at = Some(now - elapsed);
        self.solved_at = None;
        self.update_clock(now);
        Ok(())
    }
}
