//! Error types for DXF document generation.

use thiserror::Error;

/// Main error type for the writer.
#[derive(Debug, Error)]
pub enum DxfError {
    #[error("vertex count mismatch: {xs} x values vs {ys} y values")]
    VertexCountMismatch { xs: usize, ys: usize },

    #[error("polyline has no vertices")]
    EmptyPolyline,

    #[error("document is not open; call begin() before writing entities")]
    SessionClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DxfError {
    /// Check if this is a recoverable input-validation failure, as opposed
    /// to a lifecycle or sink fault.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DxfError::VertexCountMismatch { .. } | DxfError::EmptyPolyline
        )
    }
}

/// Result type alias for writer operations.
pub type Result<T> = std::result::Result<T, DxfError>;
