use glam::UVec2;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("couldn't allocate `{label}` ({bytes} bytes)")]
    AllocationFailed { label: String, bytes: usize },

    #[error("frame resources are not allocated")]
    ResourceUnavailable,

    #[error("{what} has size {actual}, expected {expected}")]
    SizeMismatch {
        what: &'static str,
        expected: UVec2,
        actual: UVec2,
    },

    #[error("pass `{pass}` is unavailable: {reason}")]
    PipelineUnavailable { pass: &'static str, reason: String },
}
