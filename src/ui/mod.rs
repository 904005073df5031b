//! Terminal presentation.
//!
//! - [`Theme`] decorates report cells
//! - [`Table`] aligns the summary
//! - [`introspection_spinner`] shows progress on stderr

pub mod spinner;
pub mod table;
pub mod theme;

pub use spinner::introspection_spinner;
pub use table::Table;
pub use theme::{should_use_colors, Theme};
