//! Leaderboard endpoints.

use crate::{
    error::{ApiResult, ErrorResponse},
    responses::ApiResponse,
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use leaderboard_domain::{Leaderboard, LeaderboardEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One ranked submission
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntryResponse {
    /// 1-based position
    pub rank: u32,
    /// Display label, with a medal for the top three
    #[schema(example = "🥇 1")]
    pub label: String,
    /// Submission filename
    #[schema(example = "predict_groupA.csv")]
    pub filename: String,
    /// Fraction of rows matching the ground truth
    pub accuracy: f64,
}

impl From<&LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            label: entry.label.to_string(),
            filename: entry.filename.to_string(),
            accuracy: entry.accuracy.value(),
        }
    }
}

/// Current ranking
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardResponse {
    /// Entries, rank 1 first
    pub entries: Vec<LeaderboardEntryResponse>,
    /// When the ranking was computed (RFC 3339)
    pub generated_at: String,
}

impl From<&Leaderboard> for LeaderboardResponse {
    fn from(board: &Leaderboard) -> Self {
        Self {
            entries: board.entries().iter().map(Into::into).collect(),
            generated_at: board.generated_at().to_rfc3339(),
        }
    }
}

/// Leaderboard routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}

/// Get the leaderboard
///
/// Re-scores every stored submission and ranks them by accuracy.
#[utoipa::path(
    get,
    path = "/leaderboard",
    tag = "leaderboard",
    responses(
        (status = 200, description = "Current leaderboard", body = LeaderboardResponse),
        (status = 503, description = "Submission store unavailable", body = ErrorResponse),
    )
)]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<LeaderboardResponse>> {
    let board = state.leaderboard.leaderboard().await?;
    Ok(ApiResponse::success((&board).into()))
}
