//! API Facade for the application.
//!
//! This module exposes high-level functions that wire the real adapters into
//! command execution.

use std::path::Path;

use crate::adapters::{ConsoleReporter, ContainerImageBuilder, FileCatalog, ShellCommandRunner};
use crate::app::AppContext;
use crate::app::commands::{build_images as build_images_cmd, test_roles as test_roles_cmd};
use crate::domain::image_build::DOCKERFILE_DIR;
use crate::domain::{
    ImageBuildOptions, ParsedArgs, PlatformFamily, RunConfig, RunSummary, parse_args, plan_builds,
};

pub use crate::domain::AppError;

/// Parse role runner arguments with the current platform's default interpreter.
pub fn parse_run_args<I, S>(args: I) -> Result<ParsedArgs, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_args(args, PlatformFamily::current().default_interpreter())
}

/// Test every selected role of the configured catalog on this host.
///
/// Progress is written to the console as roles complete.
pub fn test_roles(config: &RunConfig) -> Result<RunSummary, AppError> {
    let catalog = FileCatalog::resolve(config.catalog.as_deref());
    let ctx = AppContext::new(catalog, ShellCommandRunner::new());
    let mut reporter = ConsoleReporter::stdio();

    test_roles_cmd::execute(&ctx, config, &mut reporter)
}

/// Build one test image per requested distribution, stopping at the first failure.
pub fn build_images(options: &ImageBuildOptions) -> Result<Vec<String>, AppError> {
    let requests = plan_builds(options, Path::new(DOCKERFILE_DIR));
    build_images_cmd::build_images(&ContainerImageBuilder::from_env(), &requests)
}
