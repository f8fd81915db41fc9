#![forbid(unsafe_code)]

//! Confirmation dialog state.
//!
//! Open/close tracking plus the confirm-time rules: a busy dialog rejects
//! further confirms, and a dialog that requires a reason rejects an empty
//! one. Button variants are an enumerated type so renderers dispatch
//! exhaustively instead of matching on strings.

use std::fmt;

/// Visual variant for dialog buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Primary action styling.
    #[default]
    Default,
    /// Bordered, low-emphasis styling.
    Outline,
    /// Dangerous-action styling.
    Destructive,
    /// Borderless, minimal styling.
    Ghost,
}

/// How a dialog interaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// The user confirmed, with a reason when one was collected.
    Confirmed(Option<String>),
    /// The user backed out (cancel button, escape, overlay click).
    Cancelled,
}

/// Errors from a confirm attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogError {
    /// A confirm is already in flight.
    Busy,
    /// The dialog requires a reason and none was given.
    ReasonRequired,
}

impl fmt::Display for DialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Busy => write!(f, "dialog is busy"),
            Self::ReasonRequired => write!(f, "a reason is required to confirm"),
        }
    }
}

impl std::error::Error for DialogError {}

/// Confirmation dialog state and copy.
#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    open: bool,
    busy: bool,
    require_reason: bool,
    reason: String,
    title: String,
    description: String,
    confirm_text: String,
    cancel_text: String,
    confirm_variant: ButtonVariant,
    cancel_variant: ButtonVariant,
}

impl Default for ConfirmDialog {
    fn default() -> Self {
        Self {
            open: false,
            busy: false,
            require_reason: false,
            reason: String::new(),
            title: String::from("Confirm Action"),
            description: String::from(
                "Are you sure you want to proceed? This action cannot be undone.",
            ),
            confirm_text: String::from("Confirm"),
            cancel_text: String::from("Cancel"),
            confirm_variant: ButtonVariant::Default,
            cancel_variant: ButtonVariant::Outline,
        }
    }
}

impl ConfirmDialog {
    /// Create a closed dialog with default copy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description (builder).
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the confirm button text (builder).
    #[must_use]
    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    /// Set the cancel button text (builder).
    #[must_use]
    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    /// Set the confirm button variant (builder).
    #[must_use]
    pub fn confirm_variant(mut self, variant: ButtonVariant) -> Self {
        self.confirm_variant = variant;
        self
    }

    /// Set the cancel button variant (builder).
    #[must_use]
    pub fn cancel_variant(mut self, variant: ButtonVariant) -> Self {
        self.cancel_variant = variant;
        self
    }

    /// Require the user to provide a reason before confirming (builder).
    #[must_use]
    pub fn require_reason(mut self, require: bool) -> Self {
        self.require_reason = require;
        self
    }

    // --- State transitions ---

    /// Open the dialog, clearing any previous reason.
    pub fn open(&mut self) {
        self.open = true;
        self.busy = false;
        self.reason.clear();
    }

    /// Cancel and close.
    ///
    /// A busy dialog stays open (the in-flight action must settle first).
    pub fn cancel(&mut self) -> Option<DialogOutcome> {
        if self.busy {
            return None;
        }
        self.open = false;
        Some(DialogOutcome::Cancelled)
    }

    /// Attempt to confirm.
    ///
    /// On success the dialog closes and the collected reason (trimmed) is
    /// returned when one was required.
    ///
    /// # Errors
    ///
    /// [`DialogError::Busy`] while a previous confirm is in flight;
    /// [`DialogError::ReasonRequired`] when a required reason is missing
    /// or blank.
    pub fn confirm(&mut self) -> Result<DialogOutcome, DialogError> {
        if self.busy {
            return Err(DialogError::Busy);
        }
        let reason = if self.require_reason {
            let trimmed = self.reason.trim();
            if trimmed.is_empty() {
                return Err(DialogError::ReasonRequired);
            }
            Some(trimmed.to_string())
        } else {
            None
        };
        self.open = false;
        Ok(DialogOutcome::Confirmed(reason))
    }

    /// Record the reason text as the user types.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = reason.into();
    }

    /// Mark an in-flight confirm (disables both buttons).
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    // --- Accessors ---

    /// Whether the dialog is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether a confirm is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The dialog title.
    #[must_use]
    pub fn title_text(&self) -> &str {
        &self.title
    }

    /// The dialog description.
    #[must_use]
    pub fn description_text(&self) -> &str {
        &self.description
    }

    /// Confirm button text.
    #[must_use]
    pub fn confirm_label(&self) -> &str {
        &self.confirm_text
    }

    /// Cancel button text.
    #[must_use]
    pub fn cancel_label(&self) -> &str {
        &self.cancel_text
    }

    /// Confirm button variant.
    #[must_use]
    pub fn confirm_button_variant(&self) -> ButtonVariant {
        self.confirm_variant
    }

    /// Cancel button variant.
    #[must_use]
    pub fn cancel_button_variant(&self) -> ButtonVariant {
        self.cancel_variant
    }
}
