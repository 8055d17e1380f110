use std::process::Command;

use tracing::info;

use crate::domain::{AppError, ImageBuildRequest};
use crate::ports::ImageBuilder;

/// Container tool used when none is configured.
pub const DEFAULT_CONTAINER_TOOL: &str = "docker";

/// Environment variable overriding the container tool binary.
pub const CONTAINER_TOOL_ENV: &str = "ROLECHECK_CONTAINER_TOOL";

/// Builds images by invoking a Docker-compatible CLI with inherited stdio.
#[derive(Debug, Clone)]
pub struct ContainerImageBuilder {
    program: String,
}

impl ContainerImageBuilder {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Use `ROLECHECK_CONTAINER_TOOL` when set, otherwise `docker`.
    pub fn from_env() -> Self {
        match std::env::var(CONTAINER_TOOL_ENV) {
            Ok(program) if !program.is_empty() => Self::new(program),
            _ => Self::new(DEFAULT_CONTAINER_TOOL),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ImageBuilder for ContainerImageBuilder {
    fn build(&self, request: &ImageBuildRequest) -> Result<(), AppError> {
        let args = request.to_args();
        info!(program = %self.program, distro = %request.distro, "building image");

        let status = Command::new(&self.program).args(&args).status().map_err(|e| {
            AppError::ImageBuild {
                distro: request.distro.clone(),
                details: format!("failed to run {}: {}", self.program, e),
            }
        })?;

        if !status.success() {
            return Err(AppError::ImageBuild {
                distro: request.distro.clone(),
                details: format!("{} {} exited with {}", self.program, args.join(" "), status),
            });
        }

        Ok(())
    }
}
