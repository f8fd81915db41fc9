#![forbid(unsafe_code)]

//! Theming for Formwork: color schemes, font families, and the settings
//! state machine that ties them together.
//!
//! Persistence is a seam, not an implementation: an external cookie (or
//! any other) collaborator implements [`settings::SettingsStore`] and the
//! [`settings::Settings`] state machine stays pure.

pub mod font;
pub mod scheme;
pub mod settings;

use std::fmt;

pub use font::{FontCategory, FontFamily, FontRegistry};
pub use scheme::{ColorScheme, Oklch, Palette, SchemeRegistry};
pub use settings::{
    MemoryStore, Settings, SettingsEvent, SettingsSnapshot, SettingsStore, StoreError,
};

/// Errors for theme lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No color scheme registered under this id.
    UnknownScheme(String),
    /// No font family registered under this name.
    UnknownFont(String),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownScheme(id) => write!(f, "unknown color scheme: {id}"),
            Self::UnknownFont(name) => write!(f, "unknown font family: {name}"),
        }
    }
}

impl std::error::Error for ThemeError {}
