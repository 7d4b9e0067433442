//! Widget configuration read from the host page.
//!
//! The host embeds a JSON block such as
//! `<script id="image-adjust-config" type="application/json">{"src": "cat.png", "editMode": true}</script>`.
//! Missing fields take their defaults; a missing block yields the defaults.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` element holding the config.
pub const CONFIG_ELEMENT_ID: &str = "image-adjust-config";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinchMetric {
    /// Only the horizontal separation of the two pointers counts.
    #[default]
    Horizontal,
    /// Full 2-D distance between the two pointers.
    Euclidean,
}

impl PinchMetric {
    pub fn distance(self, a: (f64, f64), b: (f64, f64)) -> f64 {
        match self {
            PinchMetric::Horizontal => (a.0 - b.0).abs(),
            PinchMetric::Euclidean => (a.0 - b.0).hypot(a.1 - b.1),
        }
    }
}

/// Step sizes for each zoom input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GestureTuning {
    /// Zoom change per wheel notch.
    pub wheel_step: f64,
    /// Zoom change per zoom-in / zoom-out button press.
    pub button_step: f64,
    /// Zoom change per pinch sample whose distance differs from the last one.
    pub pinch_step: f64,
    pub pinch_metric: PinchMetric,
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            wheel_step: 0.05,
            button_step: 0.05,
            pinch_step: 0.003,
            pinch_metric: PinchMetric::Horizontal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportConfig {
    /// Image source URL.
    pub src: String,
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
    /// Attach gesture handlers and show the zoom controls.
    pub edit_mode: bool,
    pub log_level: LevelFilter,
    pub gestures: GestureTuning,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            src: String::new(),
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            edit_mode: false,
            log_level: LevelFilter::Info,
            gestures: GestureTuning::default(),
        }
    }
}

impl ViewportConfig {
    /// Parse and validate a JSON config document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[cfg(test)]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("offsetX", self.offset_x), ("offsetY", self.offset_y)] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidValue { field: name, value });
            }
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "zoom",
                value: self.zoom,
            });
        }
        let steps = [
            ("gestures.wheelStep", self.gestures.wheel_step),
            ("gestures.buttonStep", self.gestures.button_step),
            ("gestures.pinchStep", self.gestures.pinch_step),
        ];
        for (name, value) in steps {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue { field: name, value });
            }
        }
        Ok(())
    }

    /// Read the config block from the current document.
    ///
    /// Returns `Ok(None)` when the page has no config block.
    pub fn from_document() -> Result<Option<Self>, ConfigError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ConfigError::NoDocument)?;
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(el) => {
                let raw = el.text_content().unwrap_or_default();
                Self::from_json(&raw).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid value {value} for `{field}`")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("No document available to read configuration from")]
    NoDocument,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = ViewportConfig::from_json("{}").unwrap();
        assert_eq!(config, ViewportConfig::default());
        assert_eq!(config.gestures.wheel_step, 0.05);
        assert_eq!(config.gestures.pinch_step, 0.003);
        assert_eq!(config.gestures.pinch_metric, PinchMetric::Horizontal);
    }

    #[test]
    fn camel_case_fields_and_partial_gestures() {
        let json = r#"{
            "src": "photo.jpg",
            "offsetX": 12.5,
            "zoom": 2,
            "editMode": true,
            "logLevel": "debug",
            "gestures": { "wheelStep": 0.1, "pinchMetric": "euclidean" }
        }"#;
        let config = ViewportConfig::from_json(json).unwrap();
        assert_eq!(config.src, "photo.jpg");
        assert_eq!(config.offset_x, 12.5);
        assert_eq!(config.offset_y, 0.0);
        assert_eq!(config.zoom, 2.0);
        assert!(config.edit_mode);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.gestures.wheel_step, 0.1);
        assert_eq!(config.gestures.button_step, 0.05);
        assert_eq!(config.gestures.pinch_metric, PinchMetric::Euclidean);
    }

    #[test]
    fn rejects_non_positive_zoom() {
        let err = ViewportConfig::from_json(r#"{"zoom": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "zoom", .. }));
    }

    #[test]
    fn rejects_negative_step() {
        let err = ViewportConfig::from_json(r#"{"gestures": {"pinchStep": -0.5}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "gestures.pinchStep",
                ..
            }
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ViewportConfig::from_json("{ src: ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn to_json_parses_back() {
        let mut config = ViewportConfig::default();
        config.src = "a.png".into();
        config.edit_mode = true;
        let json = config.to_json().unwrap();
        assert!(json.contains("\"editMode\": true"));
        assert_eq!(ViewportConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn pinch_metrics() {
        let a = (10.0, 0.0);
        let b = (40.0, 40.0);
        assert_eq!(PinchMetric::Horizontal.distance(a, b), 30.0);
        assert_eq!(PinchMetric::Euclidean.distance(a, b), 50.0);
    }
}
