#![forbid(unsafe_code)]

//! Formwork public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the member crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use formwork_core::{
    CollapseConfig, CollapseResult, Debouncer, PageRange, RangeError, ValueSource, collapse,
};

// --- Widget re-exports -----------------------------------------------------

pub use formwork_widgets::{
    BreadcrumbTrail, ButtonVariant, ConfirmDialog, CopyButton, CopyPhase, Crumb, CrumbView,
    DialogError, DialogOutcome, FieldVariant, LoadingOverlay, MultiSelect, PageInfo, PageSlot,
    PaginationBar, PaginationModel, PaginationSections, PaginationState, SearchEvent,
    SearchInput, SearchVariant, Select, SelectError, SelectOption, SizeOption, TextField,
    Tooltip, TrailModel, TrailNode,
};

// --- Theme re-exports ------------------------------------------------------

pub use formwork_theme::{
    ColorScheme, FontCategory, FontFamily, FontRegistry, MemoryStore, Oklch, Palette,
    SchemeRegistry, Settings, SettingsEvent, SettingsSnapshot, SettingsStore, StoreError,
    ThemeError,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for formwork apps.
#[derive(Debug)]
pub enum Error {
    /// Invalid pagination range input.
    Range(RangeError),
    /// Selection operation failed.
    Select(SelectError),
    /// Dialog operation failed.
    Dialog(DialogError),
    /// Theme or font lookup failed.
    Theme(ThemeError),
    /// Settings persistence failed.
    Store(StoreError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range(err) => write!(f, "{err}"),
            Self::Select(err) => write!(f, "{err}"),
            Self::Dialog(err) => write!(f, "{err}"),
            Self::Theme(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(err) => Some(err),
            Self::Select(err) => Some(err),
            Self::Dialog(err) => Some(err),
            Self::Theme(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<RangeError> for Error {
    fn from(err: RangeError) -> Self {
        Self::Range(err)
    }
}

impl From<SelectError> for Error {
    fn from(err: SelectError) -> Self {
        Self::Select(err)
    }
}

impl From<DialogError> for Error {
    fn from(err: DialogError) -> Self {
        Self::Dialog(err)
    }
}

impl From<ThemeError> for Error {
    fn from(err: ThemeError) -> Self {
        Self::Theme(err)
    }
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Standard result type for formwork APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BreadcrumbTrail, ConfirmDialog, Crumb, Error, PageRange, PaginationBar, PaginationState,
        Result, SearchInput, Select, Settings, TextField,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_convert_into_top_level() {
        fn paginate() -> Result<PageRange> {
            Ok(PageRange::compute(1, 10, 0)?)
        }
        assert!(matches!(paginate(), Err(Error::Range(_))));
    }

    #[test]
    fn error_display_passes_through() {
        let err = Error::from(RangeError::ZeroWindow);
        assert_eq!(err.to_string(), RangeError::ZeroWindow.to_string());
    }

    #[test]
    fn every_widget_is_reachable() {
        use std::time::{Duration, Instant};
        let mut tip = Tooltip::default();
        let t0 = Instant::now();
        tip.hover_start(t0);
        assert!(tip.poll(t0 + Duration::from_millis(500)));
        let _ = (
            CopyButton::new(),
            LoadingOverlay::default(),
            ConfirmDialog::new(),
            SearchInput::default(),
        );
    }

    #[test]
    fn prelude_compiles() {
        use crate::prelude::*;
        let state = PaginationState::default();
        let _ = PaginationBar::new().model(&state, 10).unwrap();
        let _ = BreadcrumbTrail::new().model(&[Crumb::page("Home")]);
    }
}
