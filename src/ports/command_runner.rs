use crate::domain::CommandOutcome;

/// Port for running one test command under a command interpreter.
pub trait CommandRunner {
    /// Run `command` with `interpreter` and block until it exits.
    ///
    /// Spawn failures are reported as unsuccessful outcomes, never as errors.
    fn run(&self, command: &str, interpreter: &str) -> CommandOutcome;
}
