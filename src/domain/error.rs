use std::io;

use thiserror::Error;

/// Exit code for a run where every role passed or was skipped.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for a run where at least one role failed, or an image build failed.
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for bad or missing command-line input.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for an unreadable or malformed role catalog.
pub const EXIT_CATALOG: i32 = 3;

/// Library-wide error type for rolecheck operations.
///
/// Failing test commands are not errors: they are recorded in
/// [`crate::domain::RoleResult`] and surface through the run's exit code.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing command-line input.
    #[error("{0}")]
    Usage(String),

    /// Catalog source could not be read.
    #[error("Failed to read role catalog {path}: {source}")]
    CatalogIo {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Catalog content is not a valid role list.
    #[error("Failed to parse role catalog {path}: {details}")]
    CatalogParse { path: String, details: String },

    /// Two catalog entries share a role name.
    #[error("Role '{0}' appears more than once in the catalog")]
    DuplicateRole(String),

    /// The container image tool failed for a distribution.
    #[error("Image build for '{distro}' failed: {details}")]
    ImageBuild { distro: String, details: String },
}

impl AppError {
    pub fn usage<S: Into<String>>(message: S) -> Self {
        AppError::Usage(message.into())
    }

    /// Whether this error belongs to the catalog-read class.
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            AppError::CatalogIo { .. } | AppError::CatalogParse { .. } | AppError::DuplicateRole(_)
        )
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Usage(_) => EXIT_USAGE,
            AppError::CatalogIo { .. }
            | AppError::CatalogParse { .. }
            | AppError::DuplicateRole(_) => EXIT_CATALOG,
            AppError::ImageBuild { .. } => EXIT_FAILURE,
        }
    }
}
