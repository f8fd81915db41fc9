#![forbid(unsafe_code)]

//! Search input state.
//!
//! Two variants, dispatched exhaustively: a debounced search fires a
//! [`SearchEvent::Search`] once typing settles (default 300 ms), while a
//! submit search buffers edits and fires only on an explicit submit. The
//! clear affordance empties the field and reports [`SearchEvent::Cleared`]
//! immediately, cancelling any pending debounce.

use std::time::{Duration, Instant};

use formwork_core::Debouncer;

use crate::text_field::{FieldVariant, TextField};

/// How the search input triggers its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchVariant {
    /// Fire after input settles.
    #[default]
    Debounced,
    /// Fire only on explicit submit.
    Submit,
}

/// Events surfaced to the search collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// Run a search for the given query.
    Search(String),
    /// The input was cleared.
    Cleared,
}

/// Default settle delay, matching the original control.
const DEFAULT_DELAY: Duration = Duration::from_millis(300);

/// A search box with debounced or submit-triggered semantics.
#[derive(Debug, Clone)]
pub struct SearchInput {
    variant: SearchVariant,
    field: TextField,
    debouncer: Debouncer,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new(SearchVariant::Debounced)
    }
}

impl SearchInput {
    /// Create a search input with the given variant and the default
    /// 300 ms settle delay.
    #[must_use]
    pub fn new(variant: SearchVariant) -> Self {
        Self {
            variant,
            field: TextField::new()
                .variant(FieldVariant::Search)
                .with_placeholder("Search..."),
            debouncer: Debouncer::new(DEFAULT_DELAY),
        }
    }

    /// Set the settle delay (builder).
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field = std::mem::take(&mut self.field).with_placeholder(placeholder);
        self
    }

    /// The search variant.
    #[must_use]
    pub fn variant(&self) -> SearchVariant {
        self.variant
    }

    /// The current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.field.value()
    }

    /// The underlying text field (for cursor movement, display, etc.).
    #[must_use]
    pub fn field(&self) -> &TextField {
        &self.field
    }

    /// Mutable access to the underlying text field.
    ///
    /// Edits made directly through the field bypass debouncing; prefer
    /// [`SearchInput::push_char`] / [`SearchInput::set_query`] for input
    /// that should settle.
    pub fn field_mut(&mut self) -> &mut TextField {
        &mut self.field
    }

    /// Append a typed character at `now`.
    pub fn push_char(&mut self, c: char, now: Instant) {
        self.field.move_end();
        self.field.insert_char(c);
        self.arm(now);
    }

    /// Delete the character before the cursor at `now`.
    pub fn backspace(&mut self, now: Instant) {
        self.field.backspace();
        self.arm(now);
    }

    /// Replace the whole query at `now` (e.g. a paste, or an external
    /// controlled update).
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.field.set_value(query);
        self.field.move_end();
        self.arm(now);
    }

    /// Clear the query.
    ///
    /// Fires immediately: the cleared state should not wait out a settle
    /// delay. Any pending debounce is cancelled.
    pub fn clear(&mut self) -> SearchEvent {
        self.field.clear();
        self.debouncer.cancel();
        SearchEvent::Cleared
    }

    /// Explicitly submit the current query.
    ///
    /// For the submit variant this is the only trigger. For the debounced
    /// variant it flushes a pending debounce early, or is a no-op when
    /// nothing is pending.
    pub fn submit(&mut self) -> Option<SearchEvent> {
        match self.variant {
            SearchVariant::Submit => Some(SearchEvent::Search(self.query().to_string())),
            SearchVariant::Debounced => self
                .debouncer
                .flush()
                .then(|| SearchEvent::Search(self.query().to_string())),
        }
    }

    /// Poll for a settled search at `now`.
    ///
    /// Only the debounced variant ever fires from a poll.
    pub fn poll(&mut self, now: Instant) -> Option<SearchEvent> {
        match self.variant {
            SearchVariant::Debounced => self
                .debouncer
                .poll(now)
                .then(|| SearchEvent::Search(self.query().to_string())),
            SearchVariant::Submit => None,
        }
    }

    fn arm(&mut self, now: Instant) {
        if self.variant == SearchVariant::Debounced {
            self.debouncer.input(now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn debounced_fires_after_settling() {
        let mut search = SearchInput::new(SearchVariant::Debounced);
        let t0 = Instant::now();
        search.push_char('a', t0);
        search.push_char('b', t0 + Duration::from_millis(100));
        assert_eq!(search.poll(t0 + Duration::from_millis(350)), None);
        assert_eq!(
            search.poll(t0 + Duration::from_millis(400)),
            Some(SearchEvent::Search(String::from("ab")))
        );
        // Fires once per burst.
        assert_eq!(search.poll(t0 + Duration::from_secs(5)), None);
    }

    #[test]
    fn submit_variant_never_fires_from_poll() {
        let mut search = SearchInput::new(SearchVariant::Submit);
        let t0 = Instant::now();
        search.push_char('a', t0);
        assert_eq!(search.poll(t0 + DELAY * 4), None);
        assert_eq!(
            search.submit(),
            Some(SearchEvent::Search(String::from("a")))
        );
    }

    #[test]
    fn clear_fires_immediately_and_cancels() {
        let mut search = SearchInput::new(SearchVariant::Debounced);
        let t0 = Instant::now();
        search.push_char('a', t0);
        assert_eq!(search.clear(), SearchEvent::Cleared);
        assert!(search.query().is_empty());
        assert_eq!(search.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn submit_flushes_pending_debounce() {
        let mut search = SearchInput::new(SearchVariant::Debounced);
        let t0 = Instant::now();
        search.set_query("query", t0);
        assert_eq!(
            search.submit(),
            Some(SearchEvent::Search(String::from("query")))
        );
        // Flushed; the deadline no longer fires.
        assert_eq!(search.poll(t0 + DELAY * 2), None);
    }

    #[test]
    fn debounced_submit_without_pending_is_noop() {
        let mut search = SearchInput::new(SearchVariant::Debounced);
        assert_eq!(search.submit(), None);
    }

    #[test]
    fn custom_delay_respected() {
        let mut search =
            SearchInput::new(SearchVariant::Debounced).with_delay(Duration::from_millis(50));
        let t0 = Instant::now();
        search.push_char('x', t0);
        assert_eq!(
            search.poll(t0 + Duration::from_millis(50)),
            Some(SearchEvent::Search(String::from("x")))
        );
    }

    #[test]
    fn default_placeholder() {
        let search = SearchInput::default();
        assert_eq!(search.field().placeholder(), "Search...");
    }
}
