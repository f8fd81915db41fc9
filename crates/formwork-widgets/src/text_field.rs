#![forbid(unsafe_code)]

//! Single-line text field state.
//!
//! Grapheme-cluster aware editing with a cursor, plus the
//! controlled/uncontrolled value duality: a caller that owns the value
//! pushes it in with [`TextField::set_controlled`], and reads always
//! prefer the controlled value over the internal one.

use formwork_core::ValueSource;
use unicode_segmentation::UnicodeSegmentation;

/// What kind of field this is; selects masking and render affordances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVariant {
    /// Plain text.
    #[default]
    Text,
    /// Masked input; the render model replaces content with bullets.
    Password,
    /// Search box (renderers typically add a search icon and clear button).
    Search,
}

/// Mask character for password fields.
const MASK: char = '\u{2022}';

/// A single-line text field.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    variant: FieldVariant,
    /// Internal value, used when uncontrolled.
    value: String,
    /// External value when the caller owns it.
    source: ValueSource<String>,
    /// Cursor position (grapheme index).
    cursor: usize,
    placeholder: String,
    /// Maximum length in graphemes (None = unlimited).
    max_length: Option<usize>,
    required: bool,
    disabled: bool,
    /// Validation error to surface next to the field.
    error: Option<String>,
}

impl TextField {
    /// Create an empty text field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    /// Set the variant (builder).
    #[must_use]
    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the initial value (builder).
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.graphemes(true).count();
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the maximum length in graphemes (builder).
    #[must_use]
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Mark the field required (builder).
    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disable the field (builder).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    // --- Value access ---

    /// The current value, preferring a controlled value when present.
    #[must_use]
    pub fn value(&self) -> &str {
        self.source.resolve(&self.value)
    }

    /// Whether the caller owns the value.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.source.is_controlled()
    }

    /// Hand ownership of the value to the caller (`Some`) or back to the
    /// field (`None`).
    ///
    /// A supplied value is also mirrored into the internal state so that
    /// editing continues from it if control is later released.
    pub fn set_controlled(&mut self, value: Option<String>) {
        if let Some(v) = &value {
            self.value = v.clone();
            self.clamp_cursor();
        }
        self.source = ValueSource::from(value);
    }

    /// Replace the internal value, clamping the cursor.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.clamp_cursor();
    }

    /// Clear the value and reset the cursor.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        if self.source.is_controlled() {
            self.source = ValueSource::Controlled(String::new());
        }
    }

    /// The field variant.
    #[must_use]
    pub fn field_variant(&self) -> FieldVariant {
        self.variant
    }

    /// The placeholder text.
    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Whether the field is marked required.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Whether the field is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Whether the value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// The cursor position as a grapheme index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Value length in graphemes.
    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.value().graphemes(true).count()
    }

    // --- Validation ---

    /// Set a validation error to surface next to the field.
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    /// Clear any validation error.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// The current validation error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validate the required constraint, recording an error on failure.
    pub fn validate_required(&mut self) -> bool {
        if self.required && self.is_empty() {
            self.error = Some(String::from("This field is required"));
            false
        } else {
            true
        }
    }

    // --- Editing ---

    /// Insert a character at the cursor.
    ///
    /// Ignored when disabled or when the grapheme budget is exhausted.
    pub fn insert_char(&mut self, c: char) {
        self.insert_str(c.encode_utf8(&mut [0u8; 4]));
    }

    /// Insert a string at the cursor, respecting `max_length`.
    pub fn insert_str(&mut self, s: &str) {
        if self.disabled || s.is_empty() {
            return;
        }
        self.adopt_controlled();

        let mut incoming: Vec<&str> = s.graphemes(true).collect();
        if let Some(max) = self.max_length {
            let room = max.saturating_sub(self.value.graphemes(true).count());
            incoming.truncate(room);
        }
        if incoming.is_empty() {
            return;
        }

        let byte_pos = self.byte_index(self.cursor);
        let inserted: String = incoming.concat();
        self.value.insert_str(byte_pos, &inserted);
        self.cursor += incoming.len();
        self.sync_controlled();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if self.disabled || self.cursor == 0 {
            return;
        }
        self.adopt_controlled();
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        self.sync_controlled();
    }

    /// Delete the grapheme at the cursor.
    pub fn delete(&mut self) {
        if self.disabled {
            return;
        }
        self.adopt_controlled();
        let count = self.value.graphemes(true).count();
        if self.cursor >= count {
            return;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.value.replace_range(start..end, "");
        self.sync_controlled();
    }

    /// Move the cursor one grapheme left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one grapheme right.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.grapheme_count();
    }

    /// The text a renderer should draw: masked for password fields.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.variant {
            FieldVariant::Password => {
                MASK.to_string().repeat(self.grapheme_count())
            }
            FieldVariant::Text | FieldVariant::Search => self.value().to_string(),
        }
    }

    /// Byte offset of the given grapheme index in the internal value.
    fn byte_index(&self, grapheme_index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn clamp_cursor(&mut self) {
        let max = self.value.graphemes(true).count();
        self.cursor = self.cursor.min(max);
    }

    /// Before editing, fold any controlled value into the internal one so
    /// the edit applies to what the user sees.
    fn adopt_controlled(&mut self) {
        if let ValueSource::Controlled(v) = &self.source {
            if *v != self.value {
                self.value = v.clone();
                self.clamp_cursor();
            }
        }
    }

    /// After editing, mirror the result back into the controlled slot so
    /// `value()` stays consistent until the owner adopts the change.
    fn sync_controlled(&mut self) {
        if self.source.is_controlled() {
            self.source = ValueSource::Controlled(self.value.clone());
        }
    }
}
