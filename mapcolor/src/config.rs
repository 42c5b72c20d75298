//! Engine configuration: zoom limits, fit parameters and undo depth.
//!
//! Two view presets mirror the two front ends the game shipped with: a
//! desktop window that reserves a toolbar strip at the bottom and a compact
//! canvas that uses the whole area.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::limits;

pub const DEFAULT_MAX_UNDO_STEPS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub min_zoom: f64,
    pub max_zoom: f64,
    /// Relative zoom change of one zoom-in/zoom-out step.
    pub zoom_step: f64,
    /// Fraction of the viewport left empty around fitted content.
    pub fit_padding_ratio: f64,
    /// Screen pixels at the bottom of the viewport reserved for UI chrome.
    pub ui_margin: f64,
}

impl ViewConfig {
    pub fn desktop() -> Self {
        ViewConfig {
            min_zoom: 0.5,
            max_zoom: 10.0,
            zoom_step: 0.1,
            fit_padding_ratio: 0.2,
            ui_margin: 80.0,
        }
    }

    pub fn compact() -> Self {
        ViewConfig {
            min_zoom: 0.3,
            max_zoom: 5.0,
            zoom_step: 0.1,
            fit_padding_ratio: 0.2,
            ui_margin: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_zoom.is_finite() && self.min_zoom > 0.0) {
            return Err(ConfigError::OutOfRange { param: "min_zoom", got: self.min_zoom });
        }
        if !(self.max_zoom.is_finite() && self.max_zoom >= self.min_zoom) {
            return Err(ConfigError::OutOfRange { param: "max_zoom", got: self.max_zoom });
        }
        if !(self.zoom_step.is_finite() && self.zoom_step > 0.0 && self.zoom_step < 1.0) {
            return Err(ConfigError::OutOfRange { param: "zoom_step", got: self.zoom_step });
        }
        if !(self.fit_padding_ratio.is_finite() && (0.0..1.0).contains(&self.fit_padding_ratio)) {
            return Err(ConfigError::OutOfRange {
                param: "fit_padding_ratio",
                got: self.fit_padding_ratio,
            });
        }
        if !(self.ui_margin.is_finite() && self.ui_margin >= 0.0) {
            return Err(ConfigError::OutOfRange { param: "ui_margin", got: self.ui_margin });
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig::desktop()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub view: ViewConfig,
    pub max_undo_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            view: ViewConfig::default(),
            max_undo_steps: DEFAULT_MAX_UNDO_STEPS,
        }
    }
}

impl EngineConfig {
    pub fn compact() -> Self {
        EngineConfig {
            view: ViewConfig::compact(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view.validate()?;
        if self.max_undo_steps > limits::MAX_SNAPSHOT_HISTORY {
            return Err(ConfigError::OutOfRange {
                param: "max_undo_steps",
                got: self.max_undo_steps as f64,
            });
        }
        Ok(())
    }

    /// Parse and validate; missing fields fall back to the desktop preset.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let cfg: EngineConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_uses_defaults() {
        let cfg = EngineConfig::from_json_str(r#"{"max_undo_steps": 5}"#).unwrap();
        assert_eq!(cfg.max_undo_steps, 5);
        assert_eq!(cfg.view, ViewConfig::desktop());

        let cfg = EngineConfig::from_json_str(r#"{"view": {"min_zoom": 0.3, "max_zoom": 5.0}}"#)
            .unwrap();
        assert_eq!(cfg.view.max_zoom, 5.0);
        assert_eq!(cfg.view.ui_margin, 80.0);
        assert_eq!(cfg.max_undo_steps, DEFAULT_MAX_UNDO_STEPS);
    }

    #[test]
    fn rejects_bad_zoom_limits() {
        let err = EngineConfig::from_json_str(r#"{"view": {"min_zoom": 0.0}}"#).unwrap_err();
        assert_eq!(err.code(), "out_of_range");
        let err =
            EngineConfig::from_json_str(r#"{"view": {"min_zoom": 2.0, "max_zoom": 1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { param: "max_zoom", .. }));
        let err = EngineConfig::from_json_str("{not json").unwrap_err();
        assert_eq!(err.code(), "parse");
    }

    #[test]
    fn rejects_undo_depth_beyond_snapshot_limit() {
        let err = EngineConfig::from_json_str(r#"{"max_undo_steps": 10001}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { param: "max_undo_steps", .. }));
        assert!(EngineConfig::from_json_str(r#"{"max_undo_steps": 0}"#).is_ok());
        let err = EngineConfig::from_json_str(r#"{"view": {"zoom_step": 1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { param: "zoom_step", .. }));
    }

    #[test]
    fn presets_are_valid() {
        assert!(ViewConfig::desktop().validate().is_ok());
        assert!(ViewConfig::compact().validate().is_ok());
    }
}
