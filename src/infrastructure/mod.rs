//! Catalog sources: the table compiled into the binary and JSON files on disk.

pub mod builtin;
pub mod json_file;
