#![forbid(unsafe_code)]

//! Pure computation core for Formwork.
//!
//! Everything in this crate is a deterministic function over small inputs:
//! no I/O, no threads, no shared state. The two load-bearing algorithms are
//! [`page_range`] (which page numbers a pagination bar should show) and
//! [`collapse`] (which breadcrumb items fold into an overflow menu). The
//! remaining modules capture small reusable policies: [`debounce`] for
//! settle-before-firing input handling and [`value`] for the
//! controlled/uncontrolled value precedence used by form fields.

pub mod collapse;
pub mod debounce;
pub mod page_range;
pub mod value;

pub use collapse::{CollapseConfig, CollapseResult, collapse};
pub use debounce::Debouncer;
pub use page_range::{PageRange, RangeError};
pub use value::ValueSource;
