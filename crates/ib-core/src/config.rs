//! Board configuration: default box size and interaction zone sizes.

use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};

/// Text placed in every box created from the canvas.
pub const DEFAULT_CONTENT: &str =
    "Hello,\nYou can drag me with the handle.\nOr double-click on empty area to generate more.";

/// Recognized board options. Every field is optional in JSON; missing
/// fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Width of newly created boxes.
    pub width: f32,
    /// Height of newly created boxes.
    pub height: f32,
    /// Side of the square drag handle.
    pub handle_size: f32,
    /// Depth of the edge bands that start and finish wires.
    pub action_zone_margin: f32,
    /// Side of the top-right corner square that deletes a box.
    pub delete_zone_margin: f32,
    /// Content of boxes created by double-activation.
    pub default_content: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 250.0,
            height: 150.0,
            handle_size: 40.0,
            action_zone_margin: 20.0,
            delete_zone_margin: 20.0,
            default_content: DEFAULT_CONTENT.to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse a JSON object of options and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("handleSize", self.handle_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BoardError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        for (name, value) in [
            ("actionZoneMargin", self.action_zone_margin),
            ("deleteZoneMargin", self.delete_zone_margin),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(BoardError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_recognized_options() {
        let c = BoardConfig::default();
        assert_eq!(c.width, 250.0);
        assert_eq!(c.height, 150.0);
        assert_eq!(c.handle_size, 40.0);
        assert_eq!(c.action_zone_margin, 20.0);
        assert_eq!(c.delete_zone_margin, 20.0);
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let c = BoardConfig::from_json(r#"{"width": 300, "actionZoneMargin": 12}"#).unwrap();
        assert_eq!(
            c,
            BoardConfig {
                width: 300.0,
                action_zone_margin: 12.0,
                ..BoardConfig::default()
            }
        );
    }

    #[test]
    fn rejects_non_positive_size() {
        let err = BoardConfig::from_json(r#"{"height": 0}"#).unwrap_err();
        assert!(matches!(err, BoardError::InvalidConfig(_)));
        assert!(err.to_string().contains("height"));
    }

    #[test]
    fn rejects_negative_margin() {
        let err = BoardConfig::from_json(r#"{"deleteZoneMargin": -1}"#).unwrap_err();
        assert!(err.to_string().contains("deleteZoneMargin"));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = BoardConfig::from_json("{width: }").unwrap_err();
        assert!(matches!(err, BoardError::Json(_)));
    }
}
