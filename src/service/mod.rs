//! Data access and payload validation.

mod crud;
mod validation;
pub use crud::CoffeeRepo;
pub use validation::RequestValidator;
