//! Coffee record REST service: CRUD and substring search over one
//! PostgreSQL table.

pub mod config;
pub mod error;
pub mod model;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use config::Settings;
pub use error::{ApiError, ErrorBody};
pub use model::{Coffee, CoffeeUpdate, NewCoffee};
pub use routes::{app, coffee_routes, common_routes};
pub use service::{CoffeeRepo, RequestValidator};
pub use state::AppState;
pub use store::{ensure_coffee_table, ensure_database_exists};
