use crate::domain::{AppError, ImageBuildRequest};

/// Port for the external container image builder.
pub trait ImageBuilder {
    /// Build one image, failing with `AppError::ImageBuild` when the tool fails.
    fn build(&self, request: &ImageBuildRequest) -> Result<(), AppError>;
}
