//! Prediction leaderboard HTTP server
//!
//! Serves the leaderboard page and a small JSON API over the same
//! submission store and ground truth.
//!
//! ## Architecture
//!
//! - **app**: Router assembly, middleware stack and OpenAPI document
//! - **routes**: HTML page, health checks and the `/api/v1` JSON endpoints
//! - **html**: Server-side rendering of the page
//! - **middleware**: Request ID propagation and request logging
//! - **extractors**: Multipart CSV upload extraction
//! - **responses**: Standardized JSON response wrappers
//! - **error**: HTTP error handling and conversion
//!
//! ## Usage
//!
//! ```rust,no_run
//! use leaderboard_api_rest::{create_app, ApiConfig, AppState};
//! use leaderboard_domain::{GroundTruth, MatchColumn, Scorer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let truth = GroundTruth::new(MatchColumn::from_cells(["1", "0", "1"]));
//!     let state = AppState::in_memory(ApiConfig::default(), truth, Scorer::default());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, create_app(state)).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
pub mod extractors;
pub mod html;
pub mod middleware;
pub mod responses;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::{create_app, ApiDoc};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
