#![forbid(unsafe_code)]

//! Single and multiple selection state.
//!
//! [`Select`] holds one selection over a list of labeled options;
//! [`MultiSelect`] holds an ordered set of selections with an optional cap
//! and a case-insensitive label filter for the picker's search box.

use std::fmt;

/// Errors from selection operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The option index does not exist.
    OutOfBounds(usize),
    /// The option exists but is disabled.
    OptionDisabled(usize),
    /// The multi-select cap was reached.
    LimitReached(usize),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds(index) => write!(f, "option index {index} out of bounds"),
            Self::OptionDisabled(index) => write!(f, "option {index} is disabled"),
            Self::LimitReached(max) => write!(f, "selection limit of {max} reached"),
        }
    }
}

impl std::error::Error for SelectError {}

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption<T> {
    /// The value handed back on selection.
    pub value: T,
    /// Display label.
    pub label: String,
    /// Disabled options are visible but not selectable.
    pub disabled: bool,
}

impl<T> SelectOption<T> {
    /// Create an enabled option.
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            disabled: false,
        }
    }

    /// Disable the option (builder).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Single-selection dropdown state.
#[derive(Debug, Clone)]
pub struct Select<T> {
    options: Vec<SelectOption<T>>,
    selected: Option<usize>,
    placeholder: Option<String>,
    open: bool,
    disabled: bool,
}

impl<T> Select<T> {
    /// Create a select over the given options, nothing selected.
    #[must_use]
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        Self {
            options,
            selected: None,
            placeholder: None,
            open: false,
            disabled: false,
        }
    }

    /// Set the placeholder shown while nothing is selected (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Disable the whole control (builder).
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The options.
    #[must_use]
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// The selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The selected value, if any.
    #[must_use]
    pub fn selected_value(&self) -> Option<&T> {
        self.selected.map(|i| &self.options[i].value)
    }

    /// The text the closed control shows: selected label or placeholder.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.selected
            .map(|i| self.options[i].label.as_str())
            .or(self.placeholder.as_deref())
    }

    /// Select the option at `index`.
    ///
    /// # Errors
    ///
    /// [`SelectError::OutOfBounds`] for a bad index,
    /// [`SelectError::OptionDisabled`] for a disabled option.
    pub fn select(&mut self, index: usize) -> Result<(), SelectError> {
        let option = self
            .options
            .get(index)
            .ok_or(SelectError::OutOfBounds(index))?;
        if option.disabled {
            return Err(SelectError::OptionDisabled(index));
        }
        self.selected = Some(index);
        self.open = false;
        Ok(())
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Whether the dropdown is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle the dropdown; a disabled control never opens.
    pub fn toggle(&mut self) {
        if self.disabled {
            self.open = false;
        } else {
            self.open = !self.open;
        }
    }

    /// Close the dropdown.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Multiple-selection state with an ordered selection and label filter.
#[derive(Debug, Clone)]
pub struct MultiSelect<T> {
    options: Vec<SelectOption<T>>,
    /// Selected indices in selection order.
    selected: Vec<usize>,
    max_selected: Option<usize>,
    filter: String,
}

impl<T> MultiSelect<T> {
    /// Create a multi-select over the given options.
    #[must_use]
    pub fn new(options: Vec<SelectOption<T>>) -> Self {
        Self {
            options,
            selected: Vec::new(),
            max_selected: None,
            filter: String::new(),
        }
    }

    /// Cap how many options may be selected at once (builder).
    #[must_use]
    pub fn max_selected(mut self, max: usize) -> Self {
        self.max_selected = Some(max);
        self
    }

    /// The options.
    #[must_use]
    pub fn options(&self) -> &[SelectOption<T>] {
        &self.options
    }

    /// Selected indices in selection order.
    #[must_use]
    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Selected values in selection order.
    pub fn selected_values(&self) -> impl Iterator<Item = &T> {
        self.selected.iter().map(|&i| &self.options[i].value)
    }

    /// Whether the option at `index` is currently selected.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Toggle the option at `index`.
    ///
    /// Returns `true` when the option was added, `false` when removed.
    ///
    /// # Errors
    ///
    /// [`SelectError::OutOfBounds`], [`SelectError::OptionDisabled`], or
    /// [`SelectError::LimitReached`] when adding would exceed the cap.
    pub fn toggle(&mut self, index: usize) -> Result<bool, SelectError> {
        let option = self
            .options
            .get(index)
            .ok_or(SelectError::OutOfBounds(index))?;
        if option.disabled {
            return Err(SelectError::OptionDisabled(index));
        }
        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            return Ok(false);
        }
        if let Some(max) = self.max_selected
            && self.selected.len() >= max
        {
            return Err(SelectError::LimitReached(max));
        }
        self.selected.push(index);
        Ok(true)
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Set the picker's filter text.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// The current filter text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Indices of options whose labels match the filter,
    /// case-insensitively. An empty filter matches everything.
    #[must_use]
    pub fn filtered_indices(&self) -> Vec<usize> {
        if self.filter.is_empty() {
            return (0..self.options.len()).collect();
        }
        let needle = self.filter.to_lowercase();
        self.options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.label.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }
}
