#![forbid(unsafe_code)]

//! Color schemes with OKLCH preview palettes.
//!
//! A scheme maps a stable id to a five-slot preview palette plus optional
//! metadata: a default font the scheme prefers, and a parent id for accent
//! variants of a base scheme. The built-in registry carries the default
//! scheme, its eight accent variants, and four standalone schemes.

use std::collections::BTreeMap;

use crate::ThemeError;

/// A color in the OKLCH space (lightness, chroma, hue).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    /// Lightness in `[0, 1]`.
    pub l: f32,
    /// Chroma, non-negative.
    pub c: f32,
    /// Hue in degrees, `[0, 360)`.
    pub h: f32,
}

impl Oklch {
    /// Create a color without validating ranges.
    #[must_use]
    pub const fn new(l: f32, c: f32, h: f32) -> Self {
        Self { l, c, h }
    }

    /// Whether every component lies in its valid range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.l) && self.c >= 0.0 && (0.0..360.0).contains(&self.h)
    }
}

/// Shorthand used by the built-in scheme tables.
const fn oklch(l: f32, c: f32, h: f32) -> Oklch {
    Oklch::new(l, c, h)
}

/// The five preview slots a scheme exposes to pickers.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    /// Page background.
    pub background: Oklch,
    /// Body text.
    pub foreground: Oklch,
    /// Primary accent.
    pub primary: Oklch,
    /// Secondary surface.
    pub secondary: Oklch,
    /// Accent highlight.
    pub accent: Oklch,
}

impl Palette {
    /// Whether every slot holds a valid color.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.background.is_valid()
            && self.foreground.is_valid()
            && self.primary.is_valid()
            && self.secondary.is_valid()
            && self.accent.is_valid()
    }
}

/// A registered color scheme.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorScheme {
    /// Human-readable name shown in pickers.
    pub name: String,
    /// Preview palette.
    pub preview: Palette,
    /// Font the scheme prefers; selecting the scheme cascades to it.
    pub default_font: Option<String>,
    /// Base scheme id for accent variants.
    pub parent: Option<String>,
}

/// Id of the default scheme.
pub const DEFAULT_SCHEME: &str = "default";

/// The light default palette shared by the accent variants.
const DEFAULT_BACKGROUND: Oklch = oklch(1.0, 0.0, 0.0);
const DEFAULT_FOREGROUND: Oklch = oklch(0.141, 0.005, 285.823);
const DEFAULT_SECONDARY: Oklch = oklch(0.967, 0.001, 286.375);

/// Ordered registry of color schemes.
///
/// `BTreeMap` keeps picker ordering stable without a separate index.
#[derive(Debug, Clone, Default)]
pub struct SchemeRegistry {
    schemes: BTreeMap<String, ColorScheme>,
}

impl SchemeRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in schemes.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.insert(
            DEFAULT_SCHEME,
            ColorScheme {
                name: String::from("Default"),
                preview: Palette {
                    background: DEFAULT_BACKGROUND,
                    foreground: DEFAULT_FOREGROUND,
                    primary: oklch(0.21, 0.006, 285.885),
                    secondary: DEFAULT_SECONDARY,
                    accent: DEFAULT_SECONDARY,
                },
                default_font: Some(String::from("Fira Code")),
                parent: None,
            },
        );

        let variants: [(&str, &str, Oklch, Oklch); 8] = [
            ("default-red", "Red", oklch(0.637, 0.237, 25.331), oklch(0.945, 0.020, 17.38)),
            ("default-pink", "Pink", oklch(0.65, 0.25, 328.0), oklch(0.92, 0.045, 328.0)),
            ("default-rose", "Rose", oklch(0.63, 0.22, 350.0), oklch(0.93, 0.04, 350.0)),
            ("default-orange", "Orange", oklch(0.68, 0.23, 60.0), oklch(0.94, 0.05, 60.0)),
            ("default-green", "Green", oklch(0.55, 0.18, 140.0), oklch(0.92, 0.04, 140.0)),
            ("default-blue", "Blue", oklch(0.55, 0.20, 240.0), oklch(0.92, 0.04, 240.0)),
            ("default-yellow", "Yellow", oklch(0.75, 0.15, 90.0), oklch(0.95, 0.03, 90.0)),
            ("default-violet", "Violet", oklch(0.58, 0.22, 280.0), oklch(0.92, 0.05, 280.0)),
        ];
        for (id, name, primary, accent) in variants {
            registry.insert(
                id,
                ColorScheme {
                    name: String::from(name),
                    preview: Palette {
                        background: DEFAULT_BACKGROUND,
                        foreground: DEFAULT_FOREGROUND,
                        primary,
                        secondary: DEFAULT_SECONDARY,
                        accent,
                    },
                    default_font: Some(String::from("Fira Code")),
                    parent: Some(String::from(DEFAULT_SCHEME)),
                },
            );
        }

        registry.insert(
            "mocha-mouse",
            ColorScheme {
                name: String::from("Mocha Mouse"),
                preview: Palette {
                    background: oklch(0.9529, 0.0146, 102.4597),
                    foreground: oklch(0.4063, 0.0255, 40.3627),
                    primary: oklch(0.6083, 0.0623, 44.3588),
                    secondary: oklch(0.7473, 0.0387, 80.5476),
                    accent: oklch(0.8502, 0.0389, 49.0874),
                },
                default_font: Some(String::from("DM Sans")),
                parent: None,
            },
        );
        registry.insert(
            "vintage-paper",
            ColorScheme {
                name: String::from("Vintage Paper"),
                preview: Palette {
                    background: oklch(0.9582, 0.0152, 90.2357),
                    foreground: oklch(0.3760, 0.0225, 64.3434),
                    primary: oklch(0.6180, 0.0778, 65.5444),
                    secondary: oklch(0.8846, 0.0302, 85.5655),
                    accent: oklch(0.8348, 0.0426, 88.8064),
                },
                default_font: Some(String::from("Libre Baskerville")),
                parent: None,
            },
        );
        registry.insert(
            "notepad",
            ColorScheme {
                name: String::from("NotePad"),
                preview: Palette {
                    background: oklch(0.9821, 0.0, 0.0),
                    foreground: oklch(0.3485, 0.0, 0.0),
                    primary: oklch(0.4891, 0.0, 0.0),
                    secondary: oklch(0.9006, 0.0, 0.0),
                    accent: oklch(0.9354, 0.0456, 94.8549),
                },
                default_font: Some(String::from("Architects Daughter")),
                parent: None,
            },
        );
        registry.insert(
            "supabase",
            ColorScheme {
                name: String::from("Supabase"),
                preview: Palette {
                    background: oklch(0.9911, 0.0, 0.0),
                    foreground: oklch(0.2046, 0.0, 0.0),
                    primary: oklch(0.8348, 0.1302, 160.9080),
                    secondary: oklch(0.9940, 0.0, 0.0),
                    accent: oklch(0.9461, 0.0, 0.0),
                },
                default_font: Some(String::from("Outfit")),
                parent: None,
            },
        );

        registry
    }

    /// Register (or replace) a scheme under `id`.
    pub fn insert(&mut self, id: impl Into<String>, scheme: ColorScheme) {
        self.schemes.insert(id.into(), scheme);
    }

    /// Look up a scheme by id.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownScheme`] when the id is not registered.
    pub fn get(&self, id: &str) -> Result<&ColorScheme, ThemeError> {
        self.schemes
            .get(id)
            .ok_or_else(|| ThemeError::UnknownScheme(id.to_string()))
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.schemes.contains_key(id)
    }

    /// All registered ids, in stable order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.schemes.keys().map(String::as_str)
    }

    /// Number of registered schemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Split ids into the default family and the standalone schemes, for
    /// grouped pickers.
    #[must_use]
    pub fn grouped(&self) -> (Vec<&str>, Vec<&str>) {
        let mut default_family = Vec::new();
        let mut others = Vec::new();
        for id in self.ids() {
            if id.starts_with(DEFAULT_SCHEME) {
                default_family.push(id);
            } else {
                others.push(id);
            }
        }
        (default_family, others)
    }
}
