//! Multipart CSV upload extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
};
use leaderboard_domain::ValidationError;

/// Name of the multipart field carrying the file
pub const FILE_FIELD: &str = "file";

/// A file taken from the `file` field of a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied filename
    pub filename: String,
    /// Raw file content
    pub data: Bytes,
}

#[async_trait]
impl<S> FromRequest<S> for UploadedFile
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }

            let filename = field
                .file_name()
                .map(str::to_owned)
                .filter(|name| !name.is_empty())
                .ok_or_else(|| ValidationError::MissingField("filename".to_string()))?;
            let data = field.bytes().await?;

            return Ok(Self { filename, data });
        }

        Err(ValidationError::MissingField(FILE_FIELD.to_string()).into())
    }
}
