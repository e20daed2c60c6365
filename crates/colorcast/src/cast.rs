//! The public casting surface — a hue or color string in, hex themes out.

use std::collections::BTreeMap;

use colorcast_hsv::Hsv;
use csscolorparser::ParseColorError;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::{CastConfig, ConfigError};

/// Why a JSON configuration document could not become a caster.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not a JSON object.
    #[error("configuration document is not a JSON object")]
    Json(#[from] serde_json::Error),
    /// The document parsed but failed breakpoint validation.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Interpolates named color themes across the hue wheel.
///
/// Built once from a raw breakpoint configuration; afterwards every query
/// is a pure read over the immutable validated model, safe to share across
/// threads without locking.
///
/// # Examples
///
/// ```
/// use serde_json::json;
///
/// let raw = json!({
///     "0": {
///         "highlight": { "saturation": 75, "value": 85 },
///         "darker": { "saturation": 80, "value": 70 }
///     },
///     "20": {
///         "highlight": { "saturation": 80, "value": 90 },
///         "darker": { "saturation": 85, "value": 75 }
///     }
/// });
/// let caster = colorcast::ColorCast::new(raw.as_object().unwrap()).unwrap();
///
/// let themes = caster.from_hue(5);
/// assert_eq!(themes["highlight"], "#dc4234");
/// ```
#[derive(Debug, Clone)]
pub struct ColorCast {
    config: CastConfig,
}

impl ColorCast {
    /// Validate a raw breakpoint mapping into a ready caster.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] the validator finds; no usable
    /// instance exists on failure.
    pub fn new(raw: &Map<String, Value>) -> Result<Self, ConfigError> {
        Ok(Self {
            config: CastConfig::validate(raw)?,
        })
    }

    /// Parse a JSON document and validate it into a ready caster.
    ///
    /// # Errors
    ///
    /// [`LoadError::Json`] if the document is not a JSON object,
    /// [`LoadError::Config`] if it fails breakpoint validation.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let raw: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self::new(&raw)?)
    }

    /// Interpolated theme colors at a hue, as lower-case `#rrggbb` strings.
    ///
    /// The hue may be any integer; it wraps onto the wheel (360 ≡ 0, and
    /// negatives wrap upward). One entry per theme name in the config.
    #[must_use]
    pub fn from_hue(&self, hue: i32) -> BTreeMap<String, String> {
        self.config
            .sample(hue)
            .into_iter()
            .map(|(theme, hsv)| (theme, hsv.to_hex()))
            .collect()
    }

    /// Interpolated theme colors for any color string the parser accepts
    /// (hex notation, CSS color names, `rgb(...)`, ...).
    ///
    /// The input color's HSV hue is truncated to integer degrees and fed
    /// through [`Self::from_hue`]; its saturation and value are ignored.
    ///
    /// # Errors
    ///
    /// The parser's [`ParseColorError`] propagates unchanged.
    pub fn from_color(&self, color: &str) -> Result<BTreeMap<String, String>, ParseColorError> {
        let [r, g, b, _] = csscolorparser::parse(color)?.to_rgba8();
        #[allow(clippy::cast_possible_truncation)] // hue is in [0, 360)
        let hue = Hsv::from_rgb(r, g, b).hue as i32;
        Ok(self.from_hue(hue))
    }

    /// The validated breakpoint model backing this caster.
    #[must_use]
    pub const fn config(&self) -> &CastConfig {
        &self.config
    }

    /// The fixed, sorted theme names every result contains.
    #[must_use]
    pub fn themes(&self) -> &[String] {
        self.config.themes()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
