//! Detect which writing systems (scripts) are present in text.
//!
//! Scripts are reported in the order they first occur, each at most once. The built-in table
//! covers every script in the Unicode Character Database, but any [`RangeTable`] can be used
//! through a [`Detector`].

pub mod detect;
pub mod range_table;
mod tables;

pub use detect::{
    detect_scripts, detect_scripts_in_bytes, detect_scripts_in_utf16, Detector, DetectorConfig,
    ScriptOrder,
};
pub use range_table::{unicode_scripts, Interval, RangeTable, Script, TableError, MAX_CODEPOINT};
pub use tables::UNICODE_VERSION;
