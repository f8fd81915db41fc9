#![forbid(unsafe_code)]

//! Settings state: selected color scheme and font.
//!
//! [`Settings`] validates changes against the registries and cascades a
//! scheme's preferred font, reporting what changed through
//! [`SettingsEvent`] so the caller can toast, re-render, and persist.
//! Persistence goes through the [`SettingsStore`] trait; the cookie
//! collaborator lives outside this crate and only needs the key constants
//! exported here.

use std::fmt;
use std::sync::Mutex;

use crate::ThemeError;
use crate::font::FontRegistry;
use crate::scheme::{DEFAULT_SCHEME, SchemeRegistry};

/// Cookie key the external collaborator stores the font under.
pub const FONT_COOKIE: &str = "preferred-font";
/// Cookie key the external collaborator stores the color scheme under.
pub const COLOR_SCHEME_COOKIE: &str = "color-scheme";
/// How long settings cookies live.
pub const COOKIE_EXPIRY_DAYS: u32 = 365;

/// Font selected when nothing is persisted.
const DEFAULT_FONT: &str = "Inter";

/// What a settings change did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// The font changed.
    FontChanged {
        /// The newly selected font.
        font: String,
    },
    /// The scheme changed, possibly cascading its preferred font.
    SchemeChanged {
        /// The newly selected scheme id.
        scheme: String,
        /// The font the scheme cascaded to, when it defines one.
        font: Option<String>,
    },
}

/// A persistable view of the current selections.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingsSnapshot {
    /// Selected scheme id.
    pub scheme: String,
    /// Selected font name.
    pub font: String,
}

/// Errors from a settings store.
#[derive(Debug)]
pub enum StoreError {
    /// I/O failure in the backing store.
    Io(std::io::Error),
    /// The stored data could not be understood.
    Corrupt(String),
    /// The store cannot be used right now.
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Corrupt(msg) => write!(f, "corrupt settings: {msg}"),
            Self::Unavailable(msg) => write!(f, "settings store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Corrupt(_) | Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Pluggable persistence for settings.
///
/// Implementations must be thread-safe; the cookie collaborator, a config
/// file, or the in-memory store below all fit.
pub trait SettingsStore: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Load the persisted snapshot, `None` on first run.
    fn load(&self) -> Result<Option<SettingsSnapshot>, StoreError>;

    /// Persist the snapshot, replacing any previous one.
    fn save(&self, snapshot: &SettingsSnapshot) -> Result<(), StoreError>;

    /// Remove any persisted snapshot.
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Option<SettingsSnapshot>>,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Option<SettingsSnapshot>, StoreError> {
        let guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store poisoned")))?;
        Ok(guard.clone())
    }

    fn save(&self, snapshot: &SettingsSnapshot) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store poisoned")))?;
        *guard = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| StoreError::Unavailable(String::from("store poisoned")))?;
        *guard = None;
        Ok(())
    }
}

/// The settings state machine.
#[derive(Debug, Clone)]
pub struct Settings {
    schemes: SchemeRegistry,
    fonts: FontRegistry,
    scheme: String,
    font: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Settings over the built-in registries, with the default scheme and
    /// font selected.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schemes: SchemeRegistry::builtin(),
            fonts: FontRegistry::builtin(),
            scheme: String::from(DEFAULT_SCHEME),
            font: String::from(DEFAULT_FONT),
        }
    }

    /// Settings over custom registries.
    ///
    /// # Errors
    ///
    /// The initial selections must exist in the registries.
    pub fn with_registries(
        schemes: SchemeRegistry,
        fonts: FontRegistry,
        initial_scheme: &str,
        initial_font: &str,
    ) -> Result<Self, ThemeError> {
        schemes.get(initial_scheme)?;
        fonts.get(initial_font)?;
        Ok(Self {
            schemes,
            fonts,
            scheme: initial_scheme.to_string(),
            font: initial_font.to_string(),
        })
    }

    /// The selected scheme id.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// The selected font name.
    #[must_use]
    pub fn font(&self) -> &str {
        &self.font
    }

    /// The scheme registry.
    #[must_use]
    pub fn schemes(&self) -> &SchemeRegistry {
        &self.schemes
    }

    /// The font registry.
    #[must_use]
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// Select a font.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownFont`] for an unregistered name.
    pub fn set_font(&mut self, name: &str) -> Result<SettingsEvent, ThemeError> {
        self.fonts.get(name)?;
        self.font = name.to_string();

        #[cfg(feature = "tracing")]
        tracing::debug!(font = name, "font changed");

        Ok(SettingsEvent::FontChanged {
            font: self.font.clone(),
        })
    }

    /// Select a color scheme, cascading its preferred font when it
    /// defines one.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownScheme`] for an unregistered id. A cascaded
    /// font that is missing from the font registry is skipped rather than
    /// failing the scheme change.
    pub fn set_scheme(&mut self, id: &str) -> Result<SettingsEvent, ThemeError> {
        let scheme = self.schemes.get(id)?;
        let cascade = scheme
            .default_font
            .clone()
            .filter(|font| self.fonts.contains(font));

        self.scheme = id.to_string();
        if let Some(font) = &cascade {
            self.font = font.clone();
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(scheme = id, cascaded_font = ?cascade, "scheme changed");

        Ok(SettingsEvent::SchemeChanged {
            scheme: self.scheme.clone(),
            font: cascade,
        })
    }

    /// The current selections as a persistable snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SettingsSnapshot {
        SettingsSnapshot {
            scheme: self.scheme.clone(),
            font: self.font.clone(),
        }
    }

    /// Apply a snapshot, validating both selections.
    ///
    /// # Errors
    ///
    /// Either selection missing from its registry fails the whole restore
    /// and leaves the state unchanged.
    pub fn restore(&mut self, snapshot: &SettingsSnapshot) -> Result<(), ThemeError> {
        self.schemes.get(&snapshot.scheme)?;
        self.fonts.get(&snapshot.font)?;
        self.scheme = snapshot.scheme.clone();
        self.font = snapshot.font.clone();
        Ok(())
    }

    /// Persist the current selections.
    ///
    /// # Errors
    ///
    /// Propagates the store's error.
    pub fn persist(&self, store: &dyn SettingsStore) -> Result<(), StoreError> {
        store.save(&self.snapshot())
    }

    /// Load persisted selections, ignoring a snapshot that no longer
    /// validates (e.g. a scheme removed since it was saved).
    ///
    /// Returns whether a snapshot was applied.
    ///
    /// # Errors
    ///
    /// Propagates the store's error.
    pub fn load_from(&mut self, store: &dyn SettingsStore) -> Result<bool, StoreError> {
        match store.load()? {
            Some(snapshot) => Ok(self.restore(&snapshot).is_ok()),
            None => Ok(false),
        }
    }
}
