//! Output adapters: CSV and plain-text rendering plus locale-aware money formatting.

pub mod csv;
pub mod format;
pub mod text;
