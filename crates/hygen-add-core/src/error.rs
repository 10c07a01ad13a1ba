//! Error types for resolving and installing template packages

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level failure of an add invocation
#[derive(Error, Debug)]
pub enum AddError {
    /// No package identifier was given
    #[error("Please specify a package to add.")]
    Usage,

    /// None of the candidate locations exist
    #[error("{identifier} not found")]
    NotFound { identifier: String },

    /// Installation failed part way through
    #[error("Can't add {package}")]
    Install {
        package: String,
        #[source]
        source: InstallError,
    },
}

/// Filesystem failure while installing generators
#[derive(Error, Debug)]
pub enum InstallError {
    #[error("Failed to create destination {}", path.display())]
    CreateRoot {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read template source {}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to copy {} to {}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Cannot copy {} to {}: destination is the source or inside it",
        from.display(),
        to.display()
    )]
    SameOrNested { from: PathBuf, to: PathBuf },

    #[error("Failed to ask about overwriting '{name}'")]
    Prompt {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl AddError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AddError::Usage | AddError::NotFound { .. } | AddError::Install { .. } => 1,
        }
    }
}

/// Result type alias for add operations
pub type Result<T> = std::result::Result<T, AddError>;
