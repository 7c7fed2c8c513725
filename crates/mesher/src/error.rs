use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that abort a meshing run.
#[derive(Error, Debug)]
pub enum MeshError {
    /// An input file could not be read or an output record could not be
    /// written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The combined boundary input cannot be triangulated.
    #[error("degenerate boundary input: {reason}")]
    DegeneratePslg {
        /// Description of the degeneracy.
        reason: String,
    },

    /// The cancellation flag was set while records were being emitted.
    #[error("meshing run cancelled")]
    Cancelled,
}
