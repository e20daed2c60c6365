//! # colorcast — circular hue-wheel interpolation of named color themes
//!
//! A caller describes a sparse set of hue breakpoints (0–359), each carrying
//! a saturation/value pair per named theme (e.g. a `"highlight"` tone and a
//! `"darker"` tone). The caster validates that description once, augments it
//! with wrap points past both ends of the wheel, and then answers queries:
//! the theme colors at an arbitrary hue — or at the hue of an arbitrary
//! input color — linearly blended between the two nearest breakpoints, with
//! the wheel treated as circular (360 wraps to 0).
//!
//! # Architecture
//!
//! ```text
//! raw JSON mapping { hue: { theme: { saturation, value } } }
//!     │
//!     ▼
//! config.rs: validate → immutable CastConfig (sorted breakpoints + wrap points)
//!     │
//!     ▼
//! blend.rs:  bracket search + linear blend → per-theme HSV triples
//!     │
//!     ▼
//! cast.rs:   ColorCast facade → lower-case #rrggbb string per theme
//! ```
//!
//! Construction either yields a fully validated caster or fails with a
//! [`ConfigError`]; there is no partially-ready state. Queries are pure
//! reads over the immutable model and safe to run concurrently.

pub mod cast;
pub mod config;

mod blend;

pub use cast::{ColorCast, LoadError};
pub use config::{CastConfig, Component, ConfigError, Settings};
pub use colorcast_hsv::Hsv;
