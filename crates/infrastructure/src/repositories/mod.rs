//! Submission repository implementations.

mod filesystem;
mod memory;

pub use filesystem::FsSubmissionRepository;
pub use memory::InMemorySubmissionRepository;
