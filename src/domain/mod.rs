//! Domain types shared by both decision engines.
//!
//! Everything here is plain data plus the invariants the engines rely on.
//! Catalog loading is abstracted behind the `CatalogSource` port.

pub mod catalog;
pub mod context;
pub mod filter;
pub mod method;
pub mod ports;
pub mod recommendation;
