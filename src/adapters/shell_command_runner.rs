use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::domain::CommandOutcome;
use crate::ports::CommandRunner;

/// Runs test commands as `<interpreter> -c <command>`.
///
/// Standard output is captured and discarded; standard error is kept for the
/// failure report.
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for ShellCommandRunner {
    fn run(&self, command: &str, interpreter: &str) -> CommandOutcome {
        debug!(command, interpreter, "running test command");

        let output = Command::new(interpreter)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        match output {
            Ok(output) if output.status.success() => CommandOutcome::success(),
            Ok(output) => {
                debug!(command, status = %output.status, "test command failed");
                CommandOutcome::failure(String::from_utf8_lossy(&output.stderr).into_owned())
            }
            Err(e) => {
                warn!(command, interpreter, error = %e, "failed to spawn interpreter");
                CommandOutcome::failure(format!("failed to spawn {}: {}", interpreter, e))
            }
        }
    }
}
