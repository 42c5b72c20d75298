use std::sync::Arc;

use mapcolor::{EngineConfig, LevelDescriptor, Palette, Session};
use wasm_bindgen::prelude::*;

mod api;
mod error;
mod interop;

/// A puzzle board bound to JS. Holds the session and the level it was
/// loaded from, which restoring a saved game needs again.
#[wasm_bindgen]
pub struct MapBoard {
    pub(crate) inner: Session,
    pub(crate) level: Option<LevelDescriptor>,
}

impl MapBoard {
    pub fn rs_new(cfg: EngineConfig) -> MapBoard {
        MapBoard {
            inner: Session::new(&cfg, Arc::new(Palette::default())),
            level: None,
        }
    }
    pub fn rs_session(&self) -> &Session {
        &self.inner
    }
}

/// Seconds since the epoch from the JS clock.
pub(crate) fn now_secs() -> f64 {
    js_sys::Date::now() / 1000.0
}
