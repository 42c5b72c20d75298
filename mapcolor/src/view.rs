//! Zoom/pan transform between world (map) and screen (pixel) coordinates.
//!
//! `screen = world * zoom + pan` and `world = (screen - pan) / zoom`. Every
//! mutation keeps `zoom` inside `[min_zoom, max_zoom]`; invalid numeric
//! input is rejected and leaves the transform untouched.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::config::ViewConfig;
use crate::geometry::polygon::BBox;
use crate::geometry::tolerance::{clamp, safe_div, EPS_EXTENT, EPS_ZOOM};
use crate::model::Vec2;

/// Screen area, in pixels, that content is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    /// Viewport with `margin` pixels removed from the bottom edge.
    pub fn minus_bottom(self, margin: f64) -> Self {
        Viewport {
            width: self.width,
            height: (self.height - margin).max(0.0),
        }
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct FitParams {
    bounds: Option<BBox>,
    area: Viewport,
    padding_ratio: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    pan: Vec2,
    min_zoom: f64,
    max_zoom: f64,
    fit: Option<FitParams>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        ViewTransform::new(&ViewConfig::default())
    }
}

impl ViewTransform {
    pub fn new(cfg: &ViewConfig) -> Self {
        let min_zoom = cfg.min_zoom.max(EPS_ZOOM);
        let max_zoom = cfg.max_zoom.max(min_zoom);
        ViewTransform {
            zoom: clamp(1.0, min_zoom, max_zoom),
            pan: Vec2::ZERO,
            min_zoom,
            max_zoom,
            fit: None,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
    pub fn pan(&self) -> Vec2 {
        self.pan
    }
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    #[inline]
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x * self.zoom + self.pan.x, p.y * self.zoom + self.pan.y)
    }

    #[inline]
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new((p.x - self.pan.x) / self.zoom, (p.y - self.pan.y) / self.zoom)
    }

    /// World-space rectangle currently visible in `area`.
    pub fn visible_world(&self, area: Viewport) -> BBox {
        let a = self.screen_to_world(Vec2::ZERO);
        let b = self.screen_to_world(Vec2::new(area.width, area.height));
        BBox {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    /// Scale `bounds` to fill `area` minus padding on the tighter axis and
    /// center it. The parameters are remembered for [`ViewTransform::reset`].
    pub fn fit_to_content(&mut self, bounds: Option<BBox>, area: Viewport, padding_ratio: f64) {
        let padding_ratio = if padding_ratio.is_finite() {
            clamp(padding_ratio, 0.0, 0.95)
        } else {
            0.0
        };
        self.fit = Some(FitParams {
            bounds,
            area,
            padding_ratio,
        });
        self.apply_fit(bounds, area, padding_ratio);
    }

    fn apply_fit(&mut self, bounds: Option<BBox>, area: Viewport, padding_ratio: f64) {
        let Some(b) = bounds else {
            self.zoom = self.clamp_zoom(1.0);
            self.pan = Vec2::ZERO;
            return;
        };
        let (w, h) = (b.width(), b.height());
        let zoom = if w > EPS_EXTENT && h > EPS_EXTENT && area.is_usable() {
            let avail = 1.0 - padding_ratio;
            let sx = safe_div(area.width * avail, w, 1.0);
            let sy = safe_div(area.height * avail, h, 1.0);
            sx.min(sy)
        } else {
            1.0
        };
        self.zoom = self.clamp_zoom(zoom);
        let c = b.center();
        let screen_center = if area.is_usable() {
            Vec2::new(area.width * 0.5, area.height * 0.5)
        } else {
            Vec2::ZERO
        };
        self.pan = screen_center - c * self.zoom;
        trace!(zoom = self.zoom, pan_x = self.pan.x, pan_y = self.pan.y, "view fitted");
    }

    /// Multiply zoom by `factor`, keeping the world point under `anchor`
    /// fixed on screen. Without an anchor the pan is left alone.
    /// Returns `false` and changes nothing for a non-positive or non-finite factor.
    pub fn zoom_by(&mut self, factor: f64, anchor: Option<Vec2>) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        match anchor {
            Some(a) if a.is_finite() => {
                let world_before = self.screen_to_world(a);
                self.zoom = self.clamp_zoom(self.zoom * factor);
                // new zoom, old pan
                let world_after = self.screen_to_world(a);
                // shift so that world_before maps back onto the anchor
                self.pan += (world_after - world_before) * self.zoom;
            }
            Some(_) => return false,
            None => {
                self.zoom = self.clamp_zoom(self.zoom * factor);
            }
        }
        trace!(zoom = self.zoom, "zoom");
        true
    }

    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if !delta.is_finite() {
            return false;
        }
        self.pan += delta;
        true
    }

    /// Re-run the last fit, discarding pan and zoom applied since.
    pub fn reset(&mut self) {
        match self.fit {
            Some(f) => self.apply_fit(f.bounds, f.area, f.padding_ratio),
            None => {
                self.zoom = self.clamp_zoom(1.0);
                self.pan = Vec2::ZERO;
            }
        }
    }

    /// Set zoom and pan directly, as when restoring a saved session.
    pub fn set_state(&mut self, zoom: f64, pan: Vec2) -> bool {
        if !zoom.is_finite() || zoom <= 0.0 || !pan.is_finite() {
            return false;
        }
        self.zoom = self.clamp_zoom(zoom);
        self.pan = pan;
        true
    }

    fn clamp_zoom(&self, z: f64) -> f64 {
        clamp(z, self.min_zoom, self.max_zoom)
    }
}
