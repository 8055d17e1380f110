use tracing::{debug, info};

use crate::app::AppContext;
use crate::app::commands::catalog::{RoleFilter, load_roles};
use crate::domain::{
    AppError, CommandFailure, HostProfile, Role, RoleOutcome, RoleResult, RunConfig, RunSummary,
    should_skip,
};
use crate::ports::{CatalogSource, CommandRunner, ProgressReporter};

/// Load the filtered catalog and test every role against the configured host.
///
/// Catalog errors abort before any role runs; failing roles do not.
pub fn execute<C, R, P>(
    ctx: &AppContext<C, R>,
    config: &RunConfig,
    reporter: &mut P,
) -> Result<RunSummary, AppError>
where
    C: CatalogSource,
    R: CommandRunner,
    P: ProgressReporter + ?Sized,
{
    let profile = config.host_profile();
    let filter = RoleFilter { tags: config.tags.as_deref(), skips: config.skips.as_deref() };
    let roles = load_roles(ctx.catalog(), filter)?;

    Ok(run_roles(&profile, &roles, ctx.runner(), reporter))
}

/// Run the tests of one role against `profile`.
///
/// A role without tests, with a matching skip condition, or without commands
/// for the host OS is skipped. Otherwise every command runs, even after a
/// failure, and the role fails if any command failed.
pub fn execute_role<R, P>(
    profile: &HostProfile,
    role: &Role,
    runner: &R,
    reporter: &mut P,
) -> RoleResult
where
    R: CommandRunner + ?Sized,
    P: ProgressReporter + ?Sized,
{
    reporter.role_started(&role.name);

    let commands = if should_skip(profile, &role.skip) {
        debug!(role = %role.name, "skip condition matched");
        None
    } else {
        role.tests.commands_for(profile.os())
    };

    let Some(commands) = commands else {
        reporter.role_outcome(&role.name, RoleOutcome::Skip);
        return RoleResult::skipped(&role.name);
    };

    let mut failures = Vec::new();
    for command in commands {
        let outcome = runner.run(command, profile.interpreter());
        if outcome.succeeded {
            continue;
        }
        if failures.is_empty() {
            reporter.role_outcome(&role.name, RoleOutcome::Fail);
        }
        reporter.command_failed(command, &outcome.stderr);
        failures.push(CommandFailure { command: command.clone(), stderr: outcome.stderr });
    }

    let outcome = if failures.is_empty() {
        reporter.role_outcome(&role.name, RoleOutcome::Pass);
        RoleOutcome::Pass
    } else {
        RoleOutcome::Fail
    };

    RoleResult { name: role.name.clone(), outcome, failures }
}

/// Run every role in order and summarize. Never stops early.
pub fn run_roles<R, P>(
    profile: &HostProfile,
    roles: &[Role],
    runner: &R,
    reporter: &mut P,
) -> RunSummary
where
    R: CommandRunner + ?Sized,
    P: ProgressReporter + ?Sized,
{
    info!(host = %profile, roles = roles.len(), "starting role tests");

    let results = roles.iter().map(|role| execute_role(profile, role, runner, reporter)).collect();
    let summary = RunSummary { results };

    reporter.run_finished(&summary);
    summary
}
