//! Core types for calvis.
//!
//! Decides which calendar events are visible in a query window:
//! - `recurrence` expands RRULEs lazily and classifies each occurrence against the window
//! - `filter` applies the per-event inclusion rules to a batch of upstream records

pub mod config;
pub mod constants;
pub mod date_range;
pub mod error;
pub mod event;
pub mod filter;
pub mod recurrence;

pub use error::{CalvisError, CalvisResult};
pub use event::{EventStatus, RawEvent, TimeInterval};
pub use filter::{VisibleEvent, filter_visible, is_visible, visible_events};
pub use recurrence::{Occurrence, OverlapKind, first_overlap, occurs_in_range};
