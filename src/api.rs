use std::sync::Arc;

use mapcolor::{
    Brush, Color, ColorOutcome, EngineConfig, InputEvent, LevelDescriptor, Palette, SessionSnapshot,
    UndoOutcome, Vec2, Viewport, PALETTE_SIZE,
};
use wasm_bindgen::prelude::*;

use crate::error;
use crate::interop::{new_obj, set_kv, FrameArrays};
use crate::{now_secs, MapBoard};

#[wasm_bindgen]
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn anchor(x: Option<f64>, y: Option<f64>) -> Option<Vec2> {
    match (x, y) {
        (Some(x), Some(y)) => Some(Vec2::new(x, y)),
        _ => None,
    }
}

fn to_js<T: serde::Serialize>(v: &T) -> JsValue {
    serde_wasm_bindgen::to_value(v).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
impl MapBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> MapBoard {
        MapBoard::rs_new(EngineConfig::default())
    }

    /// Board using the compact view preset (no toolbar strip, tighter zoom range).
    pub fn compact() -> MapBoard {
        MapBoard::rs_new(EngineConfig::compact())
    }

    /// Replace the engine config. Any loaded level is dropped.
    pub fn set_config_res(&mut self, json: &str) -> JsValue {
        match EngineConfig::from_json_str(json) {
            Ok(cfg) => {
                *self = MapBoard::rs_new(cfg);
                error::ok(JsValue::TRUE)
            }
            Err(e) => error::config(&e),
        }
    }

    // Level
    pub fn load_level_json(&mut self, json: &str, width: f64, height: f64) -> bool {
        let r = self.load_level_json_res(json, width, height);
        js_sys::Reflect::get(&r, &JsValue::from_str("ok"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }
    pub fn load_level_json_res(&mut self, json: &str, width: f64, height: f64) -> JsValue {
        if !width.is_finite() { return error::non_finite("width"); }
        if !height.is_finite() { return error::non_finite("height"); }
        let level = match LevelDescriptor::from_json_str(json) {
            Ok(l) => l,
            Err(e) => return error::level(&e),
        };
        self.inner.load_level(&level, Viewport::new(width, height), now_secs());
        let info = new_obj();
        set_kv(&info, "regions", &JsValue::from_f64(self.inner.board().regions().len() as f64));
        set_kv(&info, "one_sided_neighbors", &to_js(&level.asymmetric_neighbors()));
        self.level = Some(level);
        error::ok(info.into())
    }
    pub fn level_id(&self) -> Option<String> {
        self.inner.board().level_id().map(str::to_string)
    }
    pub fn region_count(&self) -> u32 {
        self.inner.board().regions().len() as u32
    }
    pub fn region_name(&self, id: u32) -> Option<String> {
        self.inner.board().region(id).map(|r| r.name().to_string())
    }
    /// Palette slot of a region; -1 when uncolored or unknown.
    pub fn region_color(&self, id: u32) -> i32 {
        self.inner
            .board()
            .region(id)
            .and_then(|r| r.color())
            .map_or(-1, i32::from)
    }

    // Input
    /// Paint the region under a screen point; returns its id on a hit.
    pub fn click(&mut self, x: f64, y: f64) -> Option<u32> {
        let ev = InputEvent::Click { x, y };
        match self.inner.handle(ev, now_secs()) {
            mapcolor::EventOutcome::Colored { region, .. } => Some(region),
            _ => None,
        }
    }
    pub fn click_res(&mut self, x: f64, y: f64) -> JsValue {
        if !x.is_finite() { return error::non_finite("x"); }
        if !y.is_finite() { return error::non_finite("y"); }
        if self.level.is_none() { return error::no_level(); }
        match self.click(x, y) {
            Some(id) => error::ok(JsValue::from_f64(id as f64)),
            None => error::ok(JsValue::NULL),
        }
    }
    /// Region under a screen point without painting it.
    pub fn pick(&self, x: f64, y: f64) -> Option<u32> {
        self.inner.board().resolve_click(Vec2::new(x, y))
    }
    /// Paint a region by id with the current brush.
    pub fn color_region_res(&mut self, id: u32) -> JsValue {
        if self.inner.board().region(id).is_none() { return error::invalid_id(id); }
        let outcome = self.inner.paint(id, now_secs());
        error::ok(JsValue::from_bool(outcome == ColorOutcome::Changed))
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        self.handle(InputEvent::Pan { dx, dy })
    }
    pub fn zoom_by(&mut self, factor: f64, ax: Option<f64>, ay: Option<f64>) -> bool {
        self.handle(InputEvent::Zoom { factor, anchor: anchor(ax, ay) })
    }
    pub fn zoom_by_res(&mut self, factor: f64, ax: Option<f64>, ay: Option<f64>) -> JsValue {
        if !factor.is_finite() { return error::non_finite("factor"); }
        if factor <= 0.0 { return error::out_of_range("factor", 0.0, f64::INFINITY, factor); }
        if ax.map_or(false, |v| !v.is_finite()) { return error::non_finite("ax"); }
        if ay.map_or(false, |v| !v.is_finite()) { return error::non_finite("ay"); }
        self.zoom_by(factor, ax, ay);
        error::ok(JsValue::from_f64(self.zoom()))
    }
    pub fn zoom_in(&mut self, ax: Option<f64>, ay: Option<f64>) -> bool {
        self.handle(InputEvent::ZoomIn { anchor: anchor(ax, ay) })
    }
    pub fn zoom_out(&mut self, ax: Option<f64>, ay: Option<f64>) -> bool {
        self.handle(InputEvent::ZoomOut { anchor: anchor(ax, ay) })
    }
    pub fn zoom(&self) -> f64 {
        self.inner.board().view().zoom()
    }
    pub fn pan(&self) -> Vec<f64> {
        let p = self.inner.board().view().pan();
        vec![p.x, p.y]
    }
    pub fn reset_view(&mut self) {
        self.handle(InputEvent::ResetView);
    }
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.handle(InputEvent::Resize { width, height })
    }
    pub fn resize_res(&mut self, width: f64, height: f64) -> JsValue {
        if !width.is_finite() { return error::non_finite("width"); }
        if !height.is_finite() { return error::non_finite("height"); }
        if width < 0.0 { return error::out_of_range("width", 0.0, f64::INFINITY, width); }
        if height < 0.0 { return error::out_of_range("height", 0.0, f64::INFINITY, height); }
        error::ok(JsValue::from_bool(self.resize(width, height)))
    }

    /// Revert the last coloring; returns the region it touched.
    pub fn undo(&mut self) -> Option<u32> {
        match self.inner.handle(InputEvent::Undo, now_secs()) {
            mapcolor::EventOutcome::Undone(UndoOutcome::Reverted(id)) => Some(id),
            _ => None,
        }
    }
    pub fn can_undo(&self) -> bool {
        !self.inner.board().history().is_empty()
    }
    pub fn reset(&mut self) {
        self.handle(InputEvent::Reset);
    }

    pub fn select_color(&mut self, index: u8) -> bool {
        self.handle(InputEvent::SelectColor { index })
    }
    pub fn select_color_res(&mut self, index: u8) -> JsValue {
        if index as usize >= PALETTE_SIZE {
            return error::out_of_range("index", 0.0, (PALETTE_SIZE - 1) as f64, index as f64);
        }
        error::ok(JsValue::from_bool(self.select_color(index)))
    }
    pub fn select_eraser(&mut self) {
        self.handle(InputEvent::SelectEraser);
    }
    /// Selected palette slot, -1 in eraser mode.
    pub fn selected_color(&self) -> i32 {
        self.inner.board().brush().selected_color()
    }
    pub fn eraser_mode(&self) -> bool {
        self.inner.board().brush() == Brush::Eraser
    }

    /// Dispatch a JSON-encoded input event, e.g. `{"type":"zoom_in"}`.
    pub fn handle_event_res(&mut self, json: &str) -> JsValue {
        match serde_json::from_str::<InputEvent>(json) {
            Ok(ev) => {
                let outcome = self.inner.handle(ev, now_secs());
                error::ok(JsValue::from_bool(outcome.needs_redraw()))
            }
            Err(e) => error::err("parse", e.to_string(), None),
        }
    }

    // Status
    pub fn status(&self) -> JsValue {
        to_js(&self.inner.board().status())
    }
    pub fn is_complete(&self) -> bool {
        self.inner.board().status().complete
    }
    pub fn is_valid(&self) -> bool {
        self.inner.board().status().valid
    }
    pub fn is_solved(&self) -> bool {
        self.inner.is_solved()
    }
    pub fn elapsed(&self) -> f64 {
        self.inner.elapsed(now_secs())
    }
    /// Neighboring region pairs sharing a color, flattened `[a0, b0, a1, b1, ...]`.
    pub fn conflicts(&self) -> Vec<u32> {
        self.inner
            .board()
            .conflicts()
            .into_iter()
            .flat_map(|(a, b)| [a, b])
            .collect()
    }

    // Rendering
    pub fn get_frame(&self) -> JsValue {
        to_js(&self.inner.frame(now_secs()))
    }
    pub fn get_frame_data(&self) -> JsValue {
        let frame = self.inner.frame(now_secs());
        FrameArrays::from_frame(&frame).to_js(&frame)
    }
    pub fn palette_rgba(&self) -> Vec<u8> {
        let p = self.inner.palette();
        p.colors.iter().flat_map(|c| c.to_array()).collect()
    }
    pub fn set_palette_color_res(&mut self, index: u8, r: u8, g: u8, b: u8, a: u8) -> JsValue {
        match self.inner.palette().with_color(index, Color { r, g, b, a }) {
            Some(p) => {
                self.inner.set_palette(Arc::new(p));
                error::ok(JsValue::TRUE)
            }
            None => error::out_of_range("index", 0.0, (PALETTE_SIZE - 1) as f64, index as f64),
        }
    }
    pub fn reset_palette(&mut self) {
        let p: Palette = self.inner.palette().reset();
        self.inner.set_palette(Arc::new(p));
    }

    // Persistence
    pub fn snapshot_json(&self) -> Option<String> {
        let snap = self.inner.snapshot(now_secs())?;
        serde_json::to_string(&snap).ok()
    }
    pub fn restore_json_res(&mut self, json: &str) -> JsValue {
        let Some(level) = self.level.clone() else { return error::no_level(); };
        let snap: SessionSnapshot = match serde_json::from_str(json) {
            Ok(s) => s,
            Err(e) => return error::snapshot(&e.into()),
        };
        let viewport = self.inner.board().viewport();
        match self.inner.restore(&level, viewport, &snap, now_secs()) {
            Ok(()) => error::ok(JsValue::TRUE),
            Err(e) => error::snapshot(&e),
        }
    }
    pub fn max_undo_steps(&self) -> u32 {
        self.inner.board().history().capacity() as u32
    }
}

impl MapBoard {
    fn handle(&mut self, ev: InputEvent) -> bool {
        self.inner.handle(ev, now_secs()).needs_redraw()
    }
}

impl Default for MapBoard {
    fn default() -> Self {
        MapBoard::new()
    }
}
