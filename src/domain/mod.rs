pub mod error;
pub mod host_profile;
pub mod image_build;
pub mod outcome;
pub mod role;
pub mod run_config;
pub mod skip;

pub use error::{AppError, EXIT_CATALOG, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
pub use host_profile::{DEFAULT_ARCHITECTURE, HostProfile, LINUX_DISTROS, PlatformFamily};
pub use image_build::{ImageBuildOptions, ImageBuildRequest, plan_builds};
pub use outcome::{CommandFailure, CommandOutcome, RoleOutcome, RoleResult, RunSummary};
pub use role::{Role, SkipCondition, TestPlan};
pub use run_config::{ParsedArgs, RunConfig, USAGE, parse_args};
pub use skip::should_skip;
