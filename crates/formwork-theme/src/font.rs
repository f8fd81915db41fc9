#![forbid(unsafe_code)]

//! Font family registry.
//!
//! Formwork doesn't load fonts; it tracks which families exist, how they
//! are categorized, and the blurb a settings picker shows for each. The
//! built-in table mirrors the application's font menu.

use std::collections::BTreeMap;

use crate::ThemeError;

/// Broad classification for grouping fonts in a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontCategory {
    /// Fixed-width fonts.
    Monospace,
    /// Sans-serif fonts.
    SansSerif,
    /// Serif fonts.
    Serif,
    /// Handwriting-style fonts.
    Handwriting,
}

/// A registered font family.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontFamily {
    /// Display name, also the registry key.
    pub name: String,
    /// Category for grouped pickers.
    pub category: FontCategory,
    /// Short description shown next to the name.
    pub description: String,
}

/// Ordered registry of font families.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: BTreeMap<String, FontFamily>,
}

impl FontRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in families.
    #[must_use]
    pub fn builtin() -> Self {
        use FontCategory::{Handwriting, Monospace, SansSerif, Serif};

        let table: [(&str, FontCategory, &str); 18] = [
            ("Fira Code", Monospace, "Monospace font with programming ligatures"),
            ("Inter", SansSerif, "Modern sans-serif designed for UI"),
            ("Roboto", SansSerif, "Google's signature family of fonts"),
            ("Open Sans", SansSerif, "Humanist sans-serif typeface"),
            ("Source Sans", SansSerif, "Clean and readable sans-serif"),
            ("Poppins", SansSerif, "Geometric sans-serif with rounded edges"),
            ("Work Sans", SansSerif, "Optimized for on-screen text"),
            ("DM Sans", SansSerif, "Low-contrast geometric sans-serif"),
            ("Manrope", SansSerif, "Modern geometric sans-serif"),
            ("IBM Plex Sans", SansSerif, "Corporate typeface by IBM"),
            ("Geist", SansSerif, "Vercel's design system font"),
            ("Space Grotesk", SansSerif, "Proportional variant of Space Mono"),
            ("Nunito Sans", SansSerif, "Rounded sans-serif for screens"),
            ("Lato", SansSerif, "Humanist sans-serif family"),
            ("Montserrat", SansSerif, "Geometric sans inspired by urban typography"),
            ("Architects Daughter", Handwriting, "Handwritten-style font for casual designs"),
            ("Libre Baskerville", Serif, "Classic serif font for elegant reading"),
            ("Outfit", SansSerif, "Modern geometric sans-serif by Google"),
        ];

        let mut registry = Self::new();
        for (name, category, description) in table {
            registry.insert(FontFamily {
                name: String::from(name),
                category,
                description: String::from(description),
            });
        }
        registry
    }

    /// Register (or replace) a family under its name.
    pub fn insert(&mut self, family: FontFamily) {
        self.fonts.insert(family.name.clone(), family);
    }

    /// Look up a family by name.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownFont`] when the name is not registered.
    pub fn get(&self, name: &str) -> Result<&FontFamily, ThemeError> {
        self.fonts
            .get(name)
            .ok_or_else(|| ThemeError::UnknownFont(name.to_string()))
    }

    /// Whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fonts.contains_key(name)
    }

    /// All registered names, in stable order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }

    /// Families in the given category, in stable order.
    pub fn by_category(&self, category: FontCategory) -> impl Iterator<Item = &FontFamily> {
        self.fonts.values().filter(move |f| f.category == category)
    }

    /// Number of registered families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_count() {
        assert_eq!(FontRegistry::builtin().len(), 18);
    }

    #[test]
    fn lookup_known_font() {
        let registry = FontRegistry::builtin();
        let fira = registry.get("Fira Code").unwrap();
        assert_eq!(fira.category, FontCategory::Monospace);
    }

    #[test]
    fn unknown_font_errors() {
        let registry = FontRegistry::builtin();
        assert_eq!(
            registry.get("Comic Sans"),
            Err(ThemeError::UnknownFont(String::from("Comic Sans")))
        );
    }

    #[test]
    fn category_grouping() {
        let registry = FontRegistry::builtin();
        assert_eq!(registry.by_category(FontCategory::Monospace).count(), 1);
        assert_eq!(registry.by_category(FontCategory::Serif).count(), 1);
        assert_eq!(registry.by_category(FontCategory::Handwriting).count(), 1);
        assert_eq!(registry.by_category(FontCategory::SansSerif).count(), 15);
    }

    #[test]
    fn names_are_sorted() {
        let registry = FontRegistry::builtin();
        let names: Vec<&str> = registry.names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
