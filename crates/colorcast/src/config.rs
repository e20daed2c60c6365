//! Breakpoint configuration — validation into an immutable, wrap-safe model.
//!
//! The raw configuration is a nested JSON mapping:
//!
//! ```text
//! { "<hue 0..359>": { "<theme>": { "saturation": 0..100, "value": 0..100 } } }
//! ```
//!
//! [`CastConfig::validate`] checks the whole document before building
//! anything: a partially validated structure is never observable. After all
//! checks pass, two synthetic wrap points are added — `hue_max - 360`
//! (copying the settings at `hue_max`) and `hue_min + 360` (copying the
//! settings at `hue_min`) — so the sorted breakpoint sequence extends past
//! both ends of [0, 360) and bracket search can never fall off the wheel's
//! seam.
//!
//! Validation order is deterministic regardless of how the caller ordered
//! the mapping: keys are integer-parsed in the map's own order, then entries
//! are checked in ascending numeric hue order, making the lowest hue's theme
//! names the reference set for the consistency check.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

/// One of the two interpolated HSV components carried per theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Saturation,
    Value,
}

impl Component {
    /// Both components, in the order they are validated.
    pub const ALL: [Self; 2] = [Self::Saturation, Self::Value];

    /// The key this component uses in the raw configuration.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Saturation => "saturation",
            Self::Value => "value",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Why a raw configuration was rejected.
///
/// All variants are fatal to construction; each carries the offending hue,
/// theme, and component where one exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("must have at least one hue in the configuration")]
    EmptyConfig,
    #[error("hues must be integers, got `{key}`")]
    NonIntegerHue { key: String },
    #[error("hue values must be >= 0 and < 360, got {hue}")]
    HueOutOfRange { hue: i64 },
    #[error("the entry for hue {hue} is not a mapping of theme names")]
    InvalidHueEntry { hue: i32 },
    #[error("hue {hue} does not define the same theme names as hue {reference_hue}")]
    InconsistentNames { hue: i32, reference_hue: i32 },
    #[error("missing {component} component of {hue}:{theme}")]
    MissingComponent {
        hue: i32,
        theme: String,
        component: Component,
    },
    #[error("value of {component} must be a number, {hue}:{theme}:{component} is not")]
    NonNumericComponent {
        hue: i32,
        theme: String,
        component: Component,
    },
    #[error("value of {component} must be in the range 0 to 100, {hue}:{theme}:{component} is {found}")]
    ComponentOutOfRange {
        hue: i32,
        theme: String,
        component: Component,
        found: f64,
    },
}

/// The saturation/value pair attached to one (breakpoint, theme) slot.
///
/// Both fields are percentages, guaranteed in [0, 100] by validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub saturation: f64,
    pub value: f64,
}

impl Settings {
    #[must_use]
    pub const fn new(saturation: f64, value: f64) -> Self {
        Self { saturation, value }
    }
}

/// Per-breakpoint mapping from theme name to its settings.
pub type ThemeSettings = BTreeMap<String, Settings>;

/// The validated, immutable breakpoint model.
///
/// Invariants, enforced by [`CastConfig::validate`]:
///
/// - `points` is sorted ascending with no duplicates and contains every
///   canonical breakpoint plus the two wrap points, so its first element is
///   negative and its last is >= 360.
/// - every point in `points` has an entry in `settings`, and every entry
///   defines exactly the theme names in `themes`.
/// - every settings component is in [0, 100].
#[derive(Debug, Clone, PartialEq)]
pub struct CastConfig {
    pub(crate) points: Vec<i32>,
    pub(crate) settings: BTreeMap<i32, ThemeSettings>,
    pub(crate) themes: Vec<String>,
}

impl CastConfig {
    /// Validate a raw configuration into an immutable model.
    ///
    /// Fail-fast: the first violated check wins and nothing partially built
    /// escapes.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] describing the first violation found.
    pub fn validate(raw: &Map<String, Value>) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::EmptyConfig);
        }

        // Keys first, in the map's own order; entry contents afterwards in
        // ascending numeric hue order.
        let mut entries: Vec<(i32, &Value)> = Vec::with_capacity(raw.len());
        for (key, entry) in raw {
            let hue: i64 = key
                .parse()
                .map_err(|_| ConfigError::NonIntegerHue { key: key.clone() })?;
            if !(0..360).contains(&hue) {
                return Err(ConfigError::HueOutOfRange { hue });
            }
            #[allow(clippy::cast_possible_truncation)] // range-checked above
            entries.push((hue as i32, entry));
        }
        entries.sort_by_key(|&(hue, _)| hue);

        let mut reference: Option<(i32, BTreeSet<&str>)> = None;
        let mut settings: BTreeMap<i32, ThemeSettings> = BTreeMap::new();

        for &(hue, entry) in &entries {
            let themes = entry
                .as_object()
                .ok_or(ConfigError::InvalidHueEntry { hue })?;

            let names: BTreeSet<&str> = themes.keys().map(String::as_str).collect();
            if let Some((reference_hue, reference_names)) = &reference {
                // Set equality, i.e. an empty symmetric difference.
                if names != *reference_names {
                    return Err(ConfigError::InconsistentNames {
                        hue,
                        reference_hue: *reference_hue,
                    });
                }
            } else {
                reference = Some((hue, names));
            }

            let mut per_theme = ThemeSettings::new();
            for (theme, body) in themes {
                let saturation = component_value(hue, theme, body, Component::Saturation)?;
                let value = component_value(hue, theme, body, Component::Value)?;
                per_theme.insert(theme.clone(), Settings::new(saturation, value));
            }
            // Duplicate integer hues ("0" and "00") collapse here; the last
            // entry in validation order wins.
            settings.insert(hue, per_theme);
        }

        let Some((_, reference_names)) = reference else {
            // Unreachable: `raw` was non-empty, but an empty sequence must
            // fail loudly rather than feed an undefined bracket search.
            return Err(ConfigError::EmptyConfig);
        };

        // Extremes over the canonical hues actually seen.
        let Some(&hue_min) = settings.keys().next() else {
            return Err(ConfigError::EmptyConfig);
        };
        let Some(&hue_max) = settings.keys().next_back() else {
            return Err(ConfigError::EmptyConfig);
        };

        // Wrap points copy the extreme settings; canonical hues live in
        // [0, 360), so neither copy can collide with an existing point.
        let below_zero = settings[&hue_max].clone();
        let above_wheel = settings[&hue_min].clone();
        settings.insert(hue_max - 360, below_zero);
        settings.insert(hue_min + 360, above_wheel);

        let points: Vec<i32> = settings.keys().copied().collect();
        let themes: Vec<String> = reference_names.into_iter().map(str::to_owned).collect();

        Ok(Self {
            points,
            settings,
            themes,
        })
    }

    /// The fixed, sorted list of theme names every breakpoint defines.
    #[must_use]
    pub fn themes(&self) -> &[String] {
        &self.themes
    }

    /// The sorted breakpoint sequence, wrap points included.
    #[must_use]
    pub fn points(&self) -> &[i32] {
        &self.points
    }
}

/// Extract and range-check one component of one theme entry.
fn component_value(
    hue: i32,
    theme: &str,
    body: &Value,
    component: Component,
) -> Result<f64, ConfigError> {
    let raw = body.get(component.key()).ok_or_else(|| ConfigError::MissingComponent {
        hue,
        theme: theme.to_owned(),
        component,
    })?;
    let found = raw.as_f64().ok_or_else(|| ConfigError::NonNumericComponent {
        hue,
        theme: theme.to_owned(),
        component,
    })?;
    if !(0.0..=100.0).contains(&found) {
        return Err(ConfigError::ComponentOutOfRange {
            hue,
            theme: theme.to_owned(),
            component,
            found,
        });
    }
    Ok(found)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("test config must be a JSON object, got {other}"),
        }
    }

    fn two_point_config() -> Map<String, Value> {
        raw(json!({
            "0": {
                "highlight": { "saturation": 75, "value": 85 },
                "darker": { "saturation": 80, "value": 70 }
            },
            "20": {
                "highlight": { "saturation": 80, "value": 90 },
                "darker": { "saturation": 85, "value": 75 },
            }
        }))
    }

    // ── Rejections ───────────────────────────────────────────────────────

    #[test]
    fn empty_config() {
        let err = CastConfig::validate(&Map::new()).unwrap_err();
        assert_eq!(err, ConfigError::EmptyConfig);
    }

    #[test]
    fn non_integer_hue() {
        let err = CastConfig::validate(&raw(json!({
            "red": { "one": { "saturation": 0, "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(err, ConfigError::NonIntegerHue { key: "red".into() });
    }

    #[test]
    fn fractional_hue_key_is_not_an_integer() {
        let err = CastConfig::validate(&raw(json!({
            "12.5": { "one": { "saturation": 0, "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(err, ConfigError::NonIntegerHue { key: "12.5".into() });
    }

    #[test]
    fn hue_out_of_range() {
        let entry = json!({ "one": { "saturation": 0, "value": 0 } });
        let err = CastConfig::validate(&raw(json!({ "360": entry.clone() }))).unwrap_err();
        assert_eq!(err, ConfigError::HueOutOfRange { hue: 360 });

        let err = CastConfig::validate(&raw(json!({ "-1": entry }))).unwrap_err();
        assert_eq!(err, ConfigError::HueOutOfRange { hue: -1 });
    }

    #[test]
    fn invalid_hue_entry() {
        let err = CastConfig::validate(&raw(json!({ "0": 42 }))).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHueEntry { hue: 0 });

        let err = CastConfig::validate(&raw(json!({ "0": [1, 2] }))).unwrap_err();
        assert_eq!(err, ConfigError::InvalidHueEntry { hue: 0 });
    }

    #[test]
    fn inconsistent_names() {
        let err = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 0, "value": 0 } },
            "1": { "two": { "saturation": 0, "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InconsistentNames { hue: 1, reference_hue: 0 }
        );
    }

    #[test]
    fn subset_of_names_is_inconsistent() {
        let err = CastConfig::validate(&raw(json!({
            "0": {
                "one": { "saturation": 0, "value": 0 },
                "two": { "saturation": 0, "value": 0 }
            },
            "1": { "one": { "saturation": 0, "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InconsistentNames { hue: 1, reference_hue: 0 }
        );
    }

    /// The reference set is the lowest hue's names even when the caller
    /// lists a higher hue first.
    #[test]
    fn reference_set_is_lowest_hue() {
        let err = CastConfig::validate(&raw(json!({
            "20": { "late": { "saturation": 0, "value": 0 } },
            "0": { "early": { "saturation": 0, "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InconsistentNames { hue: 20, reference_hue: 0 }
        );
    }

    #[test]
    fn missing_all_components() {
        let err = CastConfig::validate(&raw(json!({
            "0": { "one": {} },
            "1": { "one": {} }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingComponent {
                hue: 0,
                theme: "one".into(),
                component: Component::Saturation,
            }
        );
    }

    #[test]
    fn missing_one_component() {
        let err = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 0, "value": 0 } },
            "1": { "one": { "saturation": 0 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissingComponent {
                hue: 1,
                theme: "one".into(),
                component: Component::Value,
            }
        );
    }

    #[test]
    fn non_numeric_component() {
        let err = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": "50", "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NonNumericComponent {
                hue: 0,
                theme: "one".into(),
                component: Component::Saturation,
            }
        );
    }

    #[test]
    fn component_out_of_range() {
        let err = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 150, "value": 0 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ComponentOutOfRange {
                hue: 0,
                theme: "one".into(),
                component: Component::Saturation,
                found: 150.0,
            }
        );

        let err = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 50, "value": -3 } }
        })))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ComponentOutOfRange {
                hue: 0,
                theme: "one".into(),
                component: Component::Value,
                found: -3.0,
            }
        );
    }

    // ── Accepted models ──────────────────────────────────────────────────

    #[test]
    fn wrap_points_straddle_the_wheel() {
        let config = CastConfig::validate(&two_point_config()).unwrap();
        assert_eq!(config.points(), &[-340, 0, 20, 360]);
    }

    #[test]
    fn single_breakpoint_still_straddles() {
        let config = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 10, "value": 20 } }
        })))
        .unwrap();
        assert_eq!(config.points(), &[-360, 0, 360]);
    }

    #[test]
    fn points_are_sorted_and_extend_past_both_ends() {
        let config = CastConfig::validate(&raw(json!({
            "10": { "one": { "saturation": 1, "value": 1 } },
            "350": { "one": { "saturation": 2, "value": 2 } },
            "180": { "one": { "saturation": 3, "value": 3 } }
        })))
        .unwrap();
        let points = config.points();
        assert!(points.windows(2).all(|w| w[0] < w[1]), "{points:?}");
        assert!(points[0] < 0);
        assert!(*points.last().unwrap() >= 360);
    }

    #[test]
    fn wrap_points_copy_extreme_settings() {
        let config = CastConfig::validate(&two_point_config()).unwrap();
        assert_eq!(config.settings[&-340], config.settings[&20]);
        assert_eq!(config.settings[&360], config.settings[&0]);
    }

    #[test]
    fn theme_list_is_fixed_and_sorted() {
        let config = CastConfig::validate(&two_point_config()).unwrap();
        assert_eq!(config.themes(), &["darker", "highlight"]);
    }

    #[test]
    fn float_components_are_kept_exact() {
        let config = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 12.5, "value": 0.25 } }
        })))
        .unwrap();
        assert_eq!(config.settings[&0]["one"], Settings::new(12.5, 0.25));
    }

    #[test]
    fn boundary_components_are_accepted() {
        let config = CastConfig::validate(&raw(json!({
            "0": { "one": { "saturation": 0, "value": 100 } }
        })));
        assert!(config.is_ok());
    }

    #[test]
    fn error_messages_carry_context() {
        let err = ConfigError::MissingComponent {
            hue: 7,
            theme: "accent".into(),
            component: Component::Value,
        };
        assert_eq!(err.to_string(), "missing value component of 7:accent");
    }
}
