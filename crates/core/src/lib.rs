//! `wayfinder-core`: shared building blocks for route bindings.
//!
//! This crate contains **pure value types** (no URL building, no IO).

pub mod error;
pub mod scalar;
pub mod verb;

pub use error::{RouteError, RouteResult};
pub use scalar::Scalar;
pub use verb::HttpVerb;
