//! HTTP route handlers.
//!
//! The HTML page lives at the root; the JSON API is versioned under `/api/v1`.

pub mod health;
pub mod v1;
pub mod web;

// Re-export for convenience
pub use health::routes as health_routes;
pub use v1::routes as v1_routes;
pub use web::routes as web_routes;
