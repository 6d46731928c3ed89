use thiserror::Error;

/// A suggested output path that can't be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("incomplete path: '{0}'")]
    IncompletePath(String),

    #[error("path escapes output root: '{0}'")]
    EscapesRoot(String),
}

impl PathError {
    pub fn incomplete(path: impl Into<String>) -> Self {
        Self::IncompletePath(path.into())
    }

    pub fn escapes_root(path: impl Into<String>) -> Self {
        Self::EscapesRoot(path.into())
    }
}

/// Errors that can occur while configuring emulators.
#[derive(Debug, Error)]
pub enum EmuConfError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error("Unknown core: '{0}'")]
    UnknownCore(String),
}
