//! Canvas stage layout configuration.

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading a [`StageLayout`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// The JSON document could not be parsed.
    #[error("invalid layout JSON: {0}")]
    Parse(String),

    /// A field holds a value the stage cannot render.
    #[error("invalid layout: {0}")]
    Invalid(&'static str),
}

/// Sizing and labelling of the canvas stage.
///
/// All sizes are CSS pixels. Missing fields take their defaults, so an
/// empty JSON object is a valid layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageLayout {
    /// Maximum width of the stage frame.
    pub max_width_px: u32,
    /// Minimum height of the stage frame.
    pub min_height_px: u32,
    /// Height of the upload prompt shown while no image is selected.
    pub prompt_height_px: u32,
    /// Maximum rendered height of the previewed image.
    pub image_max_height_px: u32,
    /// `alt` text of the previewed image.
    pub image_alt: String,
}

impl Default for StageLayout {
    fn default() -> Self {
        Self {
            max_width_px: 980,
            min_height_px: 520,
            prompt_height_px: 380,
            image_max_height_px: 480,
            image_alt: String::from("Background"),
        }
    }
}

impl StageLayout {
    /// Parse and validate a layout from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Parse`] for malformed JSON or mistyped
    /// fields, and [`LayoutError::Invalid`] if [`validate`](Self::validate)
    /// rejects the result.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::Parse(e.to_string()))?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check that every size is positive, the prompt fits inside the
    /// frame, and the image has alt text.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.max_width_px == 0 {
            return Err(LayoutError::Invalid("max_width_px must be positive"));
        }
        if self.min_height_px == 0 {
            return Err(LayoutError::Invalid("min_height_px must be positive"));
        }
        if self.prompt_height_px == 0 {
            return Err(LayoutError::Invalid("prompt_height_px must be positive"));
        }
        if self.image_max_height_px == 0 {
            return Err(LayoutError::Invalid("image_max_height_px must be positive"));
        }
        if self.prompt_height_px > self.min_height_px {
            return Err(LayoutError::Invalid(
                "prompt_height_px must not exceed min_height_px",
            ));
        }
        if self.image_alt.trim().is_empty() {
            return Err(LayoutError::Invalid("image_alt must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(StageLayout::default().validate(), Ok(()));
    }

    #[test]
    fn empty_object_yields_default() {
        assert_eq!(StageLayout::from_json("{}").unwrap(), StageLayout::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let layout = StageLayout::from_json(r#"{ "image_max_height_px": 600 }"#).unwrap();
        assert_eq!(layout.image_max_height_px, 600);
        assert_eq!(layout.max_width_px, 980);
        assert_eq!(layout.image_alt, "Background");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            StageLayout::from_json("{ max_width_px: }"),
            Err(LayoutError::Parse(_))
        ));
        assert!(matches!(
            StageLayout::from_json(r#"{ "max_width_px": "wide" }"#),
            Err(LayoutError::Parse(_))
        ));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            StageLayout::from_json(r#"{ "min_height_px": 0 }"#),
            Err(LayoutError::Invalid("min_height_px must be positive"))
        );
    }

    #[test]
    fn prompt_taller_than_frame_is_rejected() {
        let err = StageLayout::from_json(r#"{ "prompt_height_px": 900 }"#).unwrap_err();
        assert_eq!(
            err,
            LayoutError::Invalid("prompt_height_px must not exceed min_height_px")
        );
    }

    #[test]
    fn blank_alt_is_rejected() {
        let err = StageLayout::from_json(r#"{ "image_alt": "  " }"#).unwrap_err();
        assert_eq!(err, LayoutError::Invalid("image_alt must not be empty"));
    }
}
