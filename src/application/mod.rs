//! Application layer holding the two decision engines.
//!
//! `filter_engine` and `recommendation_engine` are pure functions over a borrowed
//! catalog. `CheckoutAdvisor` wraps them around a shared `Catalog` for callers
//! that load the catalog once and query it many times.

pub mod advisor;
pub mod comparison;
pub mod filter_engine;
pub mod recommendation_engine;
