use crate::domain::{RoleOutcome, RunSummary};

/// Port for incremental console progress of a test run.
pub trait ProgressReporter {
    /// A role is about to be evaluated.
    fn role_started(&mut self, name: &str);

    /// The role's verdict is known. Called at most once per role.
    fn role_outcome(&mut self, name: &str, outcome: RoleOutcome);

    /// Diagnostic output of a failed command.
    fn command_failed(&mut self, command: &str, stderr: &str);

    /// Every role has been evaluated.
    fn run_finished(&mut self, summary: &RunSummary);
}
