//! Outcomes of commands, roles, and whole runs.

use std::fmt;

use crate::domain::error::{EXIT_FAILURE, EXIT_SUCCESS};

/// Result of running one command under an interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    pub stderr: String,
}

impl CommandOutcome {
    pub fn success() -> Self {
        Self { succeeded: true, stderr: String::new() }
    }

    pub fn failure(stderr: impl Into<String>) -> Self {
        Self { succeeded: false, stderr: stderr.into() }
    }
}

/// Per-role verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleOutcome {
    Pass,
    Fail,
    Skip,
}

impl RoleOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleOutcome::Pass => "pass",
            RoleOutcome::Fail => "fail",
            RoleOutcome::Skip => "skip",
        }
    }
}

impl fmt::Display for RoleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A test command that did not succeed, with its captured error output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFailure {
    pub command: String,
    pub stderr: String,
}

/// Verdict for one role plus the diagnostics of each failed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleResult {
    pub name: String,
    pub outcome: RoleOutcome,
    pub failures: Vec<CommandFailure>,
}

impl RoleResult {
    pub fn skipped(name: impl Into<String>) -> Self {
        Self { name: name.into(), outcome: RoleOutcome::Skip, failures: Vec::new() }
    }
}

/// Aggregate over every role of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub results: Vec<RoleResult>,
}

impl RunSummary {
    pub fn count(&self, outcome: RoleOutcome) -> usize {
        self.results.iter().filter(|result| result.outcome == outcome).count()
    }

    /// Whether at least one role failed.
    pub fn failed(&self) -> bool {
        self.results.iter().any(|result| result.outcome == RoleOutcome::Fail)
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed() { EXIT_FAILURE } else { EXIT_SUCCESS }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.failed() { "failed" } else { "passed" };
        write!(
            f,
            "Integration tests {}. ({} passed, {} failed, {} skipped)",
            verdict,
            self.count(RoleOutcome::Pass),
            self.count(RoleOutcome::Fail),
            self.count(RoleOutcome::Skip)
        )
    }
}
