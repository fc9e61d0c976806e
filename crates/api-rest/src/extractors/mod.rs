//! Custom Axum extractors.

pub mod upload;

pub use upload::{UploadedFile, FILE_FIELD};
