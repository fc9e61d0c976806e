//! Submission endpoints.

use super::leaderboard::LeaderboardResponse;
use crate::{
    error::{ApiResult, ErrorResponse},
    extractors::UploadedFile,
    responses::{ApiResponse, Created},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Router,
};
use leaderboard_domain::{SubmissionReport, SubmissionStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored submission and its scoring outcome
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SubmissionResponse {
    /// Stored filename
    #[schema(example = "predict_groupA.csv")]
    pub filename: String,
    /// `scored` or `failed`
    pub status: String,
    /// Accuracy when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// Rows compared when scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    /// Failure reason when the file could not be scored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl From<SubmissionReport> for SubmissionResponse {
    fn from(report: SubmissionReport) -> Self {
        let filename = report.filename.to_string();
        match report.status {
            SubmissionStatus::Scored { accuracy, rows } => Self {
                filename,
                status: "scored".to_string(),
                accuracy: Some(accuracy.value()),
                rows: Some(rows),
                reason: None,
            },
            SubmissionStatus::Failed { reason } => Self {
                filename,
                status: "failed".to_string(),
                accuracy: None,
                rows: None,
                reason: Some(reason),
            },
        }
    }
}

/// Multipart body accepted by the upload endpoint
#[derive(Debug, ToSchema)]
pub struct UploadForm {
    /// The prediction CSV; its filename becomes the submission name
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Submission routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/submissions", get(list_submissions).post(upload_submission))
        .route("/submissions/:name", delete(delete_submission))
}

/// List submissions
///
/// Every stored file in filename order, with its accuracy or failure reason.
#[utoipa::path(
    get,
    path = "/submissions",
    tag = "submissions",
    responses(
        (status = 200, description = "Submission history", body = Vec<SubmissionResponse>),
        (status = 503, description = "Submission store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_submissions(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Vec<SubmissionResponse>>> {
    let history = state.leaderboard.history().await?;
    Ok(ApiResponse::success(
        history.into_iter().map(Into::into).collect(),
    ))
}

/// Upload a submission
///
/// Stores the file under its own name, replacing any previous upload, and
/// scores it. A file that cannot be scored is still stored and reported as failed.
#[utoipa::path(
    post,
    path = "/submissions",
    tag = "submissions",
    request_body(content = UploadForm, content_type = "multipart/form-data", description = "CSV file in the `file` field"),
    responses(
        (status = 201, description = "Submission stored", body = SubmissionResponse),
        (status = 400, description = "Missing file or unacceptable filename", body = ErrorResponse),
        (status = 413, description = "Upload too large", body = ErrorResponse),
    )
)]
pub async fn upload_submission(
    State(state): State<AppState>,
    upload: UploadedFile,
) -> ApiResult<Created<SubmissionResponse>> {
    let report = state
        .leaderboard
        .upload(&upload.filename, &upload.data)
        .await?;
    Ok(Created(report.into()))
}

/// Delete a submission
///
/// Removes the file and returns the rebuilt leaderboard.
#[utoipa::path(
    delete,
    path = "/submissions/{name}",
    tag = "submissions",
    params(("name" = String, Path, description = "Submission filename")),
    responses(
        (status = 200, description = "Submission deleted; rebuilt leaderboard", body = LeaderboardResponse),
        (status = 404, description = "No such submission", body = ErrorResponse),
    )
)]
pub async fn delete_submission(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<ApiResponse<LeaderboardResponse>> {
    let board = state.leaderboard.delete(&name).await?;
    Ok(ApiResponse::success_with_message(
        (&board).into(),
        format!("Deleted {}", name),
    ))
}
