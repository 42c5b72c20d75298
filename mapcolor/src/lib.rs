//! Board engine for a four-color map puzzle.
//!
//! A [`Board`] holds named polygon regions and their adjacency, maps screen
//! clicks to regions through a zoom/pan [`ViewTransform`], keeps a bounded
//! undo log, and reports whether the map is completely and validly colored.
//! [`Session`] adds the palette and play clock on top.

pub mod board;
pub mod config;
pub mod error;
pub mod history;
pub mod level;
pub mod model;
pub mod palette;
pub mod region;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod view;
pub mod geometry {
    pub mod limits;
    pub mod polygon;
    pub mod tolerance;
}

pub use board::{Board, BoardPhase, ColorOutcome, UndoOutcome};
pub use config::{EngineConfig, ViewConfig};
pub use error::{ConfigError, LevelError, SnapshotError};
pub use history::{UndoEntry, UndoHistory};
pub use level::{LevelDescriptor, RegionSpec};
pub use model::{Brush, Color, Completion, PaletteIndex, RegionId, Vec2, PALETTE_SIZE};
pub use palette::Palette;
pub use region::Region;
pub use render::{Frame, RegionFrame};
pub use session::{EventOutcome, InputEvent, Session, SessionSnapshot};
pub use snapshot::BoardSnapshot;
pub use view::{ViewTransform, Viewport};
