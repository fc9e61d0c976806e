//! Application builder and configuration.
//!
//! This module assembles all routes, middleware and state into an Axum router.

use crate::{
    config::ApiConfig,
    error::ErrorResponse,
    middleware::{logging_middleware, request_id_middleware},
    routes::{self, health, v1},
    state::AppState,
};
use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI description of the JSON API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Prediction Leaderboard API",
        description = "Upload CSV predictions, score them against the ground truth and rank them",
        license(name = "MIT"),
    ),
    paths(
        health::health,
        health::ready,
        v1::submissions::list_submissions,
        v1::submissions::upload_submission,
        v1::submissions::delete_submission,
        v1::leaderboard::get_leaderboard,
    ),
    components(schemas(
        health::HealthResponse,
        health::ReadinessResponse,
        health::ReadinessChecks,
        v1::submissions::SubmissionResponse,
        v1::submissions::UploadForm,
        v1::leaderboard::LeaderboardEntryResponse,
        v1::leaderboard::LeaderboardResponse,
        ErrorResponse,
    )),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "submissions", description = "Upload, list and delete submissions"),
        (name = "leaderboard", description = "Ranked submissions"),
    )
)]
pub struct ApiDoc;

/// Create the main application router
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut app = Router::new()
        // HTML page
        .merge(routes::web::routes())
        // Health check routes
        .merge(routes::health::routes())
        // API v1 routes
        .nest("/api/v1", routes::v1::routes())
        .with_state(state);

    if config.enable_swagger {
        app = app.merge(swagger_ui());
    }

    app.layer(DefaultBodyLimit::max(config.max_body_size)).layer(
        ServiceBuilder::new()
            // Tracing
            .layer(TraceLayer::new_for_http())
            // Compression
            .layer(CompressionLayer::new())
            // CORS
            .layer(build_cors_layer(&config))
            // Timeout
            .layer(TimeoutLayer::new(config.request_timeout()))
            // Custom middleware
            .layer(middleware::from_fn(request_id_middleware))
            .layer(middleware::from_fn(logging_middleware)),
    )
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}

/// Swagger UI serving the generated OpenAPI document
fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        assert!(paths.contains(&"/submissions".to_string()));
        assert!(paths.contains(&"/submissions/{name}".to_string()));
        assert!(paths.contains(&"/leaderboard".to_string()));
        assert!(paths.contains(&"/health".to_string()));
    }

    #[test]
    fn test_openapi_upload_body_is_multipart() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let body = &doc["paths"]["/submissions"]["post"]["requestBody"]["content"];

        assert_eq!(
            body["multipart/form-data"]["schema"]["$ref"],
            "#/components/schemas/UploadForm"
        );
        assert_eq!(
            doc["components"]["schemas"]["UploadForm"]["properties"]["file"]["format"],
            "binary"
        );
    }
}
