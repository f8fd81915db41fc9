#![forbid(unsafe_code)]

//! Controlled/uncontrolled value precedence.
//!
//! A form field's value is either externally owned (controlled: the caller
//! supplies it on every update) or internally owned (uncontrolled: the
//! field keeps its own copy). [`ValueSource`] resolves the duality at read
//! time by preferring the externally supplied value when present.

/// Where a field's authoritative value lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource<T> {
    /// The caller owns the value and supplies it explicitly.
    Controlled(T),
    /// The field owns the value internally.
    Uncontrolled,
}

impl<T> ValueSource<T> {
    /// Resolve against the field's internal value, preferring the
    /// controlled one when present.
    #[must_use]
    pub fn resolve<'a>(&'a self, internal: &'a T) -> &'a T {
        match self {
            Self::Controlled(value) => value,
            Self::Uncontrolled => internal,
        }
    }

    /// Whether the value is externally owned.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        matches!(self, Self::Controlled(_))
    }
}

impl<T> Default for ValueSource<T> {
    fn default() -> Self {
        Self::Uncontrolled
    }
}

impl<T> From<Option<T>> for ValueSource<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::Controlled(v),
            None => Self::Uncontrolled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controlled_wins() {
        let source = ValueSource::Controlled(String::from("outer"));
        let internal = String::from("inner");
        assert_eq!(source.resolve(&internal), "outer");
        assert!(source.is_controlled());
    }

    #[test]
    fn uncontrolled_falls_back() {
        let source: ValueSource<String> = ValueSource::Uncontrolled;
        let internal = String::from("inner");
        assert_eq!(source.resolve(&internal), "inner");
        assert!(!source.is_controlled());
    }

    #[test]
    fn from_option() {
        assert!(ValueSource::from(Some(1)).is_controlled());
        assert!(!ValueSource::<i32>::from(None).is_controlled());
    }
}
