//! Error type for mesh export.

/// Errors that can occur during export.
///
/// The container has no optional or variable-length structures whose
/// encoding can fail once the inputs are in memory, so the only failure
/// mode is the sink itself. An object that is not a mesh is not an error;
/// see [`ExportOutcome::Skipped`](super::ExportOutcome::Skipped).
#[derive(Debug)]
pub enum ExportError {
    /// The output sink could not be opened or written.
    Io(std::io::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "write error: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
