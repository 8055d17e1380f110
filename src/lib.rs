//! rolecheck: run a role catalog's verification commands against a host and
//! aggregate pass/fail/skip results into one exit status.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{build_images, parse_run_args, test_roles};
pub use domain::{
    AppError, HostProfile, ImageBuildOptions, ParsedArgs, Role, RoleOutcome, RoleResult,
    RunConfig, RunSummary,
};
