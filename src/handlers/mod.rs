//! HTTP handlers for the coffee API.

pub mod coffee;
pub use coffee::*;
