pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;

pub use application::advisor::CheckoutAdvisor;
pub use application::filter_engine::filter;
pub use application::recommendation_engine::{reason, recommend, score};
pub use domain::catalog::Catalog;
pub use error::{AdvisorError, Result};
