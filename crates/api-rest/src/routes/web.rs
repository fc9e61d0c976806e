//! Browser-facing page: upload form, submission history and leaderboard.
//!
//! POST handlers render the refreshed page directly with a notice instead of
//! redirecting. Client errors become an error notice on the page with the
//! matching status; store failures fall through to the JSON error response.

use crate::{
    error::{ApiError, ApiResult},
    extractors::UploadedFile,
    html::{self, Notice},
    state::AppState,
};
use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use leaderboard_application::ApplicationError;
use serde::Deserialize;
use tracing::{field, instrument, Span};

/// Body of the per-row delete form
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    /// Submission to remove
    pub filename: String,
}

/// Page routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/delete", post(delete))
}

async fn render(state: &AppState, status: StatusCode, notice: Option<&Notice>) -> ApiResult<Response> {
    let snapshot = state.leaderboard.snapshot().await?;
    let page = html::render_page(&snapshot, state.leaderboard.ground_truth_rows(), notice);
    Ok((status, Html(page)).into_response())
}

fn rejection(err: ApiError) -> ApiResult<(StatusCode, Notice)> {
    let status = err.status_code();
    if status.is_server_error() {
        return Err(err);
    }
    Ok((status, Notice::error(err.to_string())))
}

/// Leaderboard page
pub async fn index(State(state): State<AppState>) -> ApiResult<Response> {
    render(&state, StatusCode::OK, None).await
}

/// Upload from the page form, then show the refreshed page
#[instrument(skip_all)]
pub async fn upload(
    State(state): State<AppState>,
    upload: Result<UploadedFile, ApiError>,
) -> ApiResult<Response> {
    let (status, notice) = match upload {
        Ok(file) => match state.leaderboard.upload(&file.filename, &file.data).await {
            Ok(report) => (StatusCode::OK, Notice::for_upload(&report)),
            Err(e) => rejection(e.into())?,
        },
        Err(e) => rejection(e)?,
    };

    render(&state, status, Some(&notice)).await
}

/// Delete from the page, then show the rebuilt page
#[instrument(skip_all, fields(filename = field::Empty))]
pub async fn delete(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> ApiResult<Response> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(err) => {
            let notice = Notice::error(err.body_text());
            return render(&state, err.status(), Some(&notice)).await;
        }
    };
    Span::current().record("filename", form.filename.as_str());

    let (status, notice) = match state.leaderboard.delete(&form.filename).await {
        Ok(_) => (StatusCode::OK, Notice::success(format!("Deleted {}", form.filename))),
        Err(ApplicationError::NotFound(name)) => (
            StatusCode::NOT_FOUND,
            Notice::warning(format!("{} was not found; nothing was deleted", name)),
        ),
        Err(e) => rejection(e.into())?,
    };

    render(&state, status, Some(&notice)).await
}
