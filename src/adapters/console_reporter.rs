use std::io::{self, Stderr, Stdout, Write};

use crate::domain::{RoleOutcome, RunSummary};
use crate::ports::ProgressReporter;

/// Writes run progress to the console.
///
/// Role lines and the passing summary go to `out`; failed-command output and
/// the failing summary go to `err`. Write errors are ignored.
pub struct ConsoleReporter<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ConsoleReporter<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleReporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write, E: Write> ProgressReporter for ConsoleReporter<O, E> {
    fn role_started(&mut self, name: &str) {
        let _ = write!(self.out, "testing: {} ", name);
        let _ = self.out.flush();
    }

    fn role_outcome(&mut self, _name: &str, outcome: RoleOutcome) {
        let _ = writeln!(self.out, "-> {}", outcome);
        if outcome == RoleOutcome::Fail {
            let _ = writeln!(self.out);
        }
        let _ = self.out.flush();
    }

    fn command_failed(&mut self, _command: &str, stderr: &str) {
        let _ = write!(self.err, "{}", stderr);
        if !stderr.is_empty() && !stderr.ends_with('\n') {
            let _ = writeln!(self.err);
        }
        let _ = self.err.flush();
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        if summary.failed() {
            let _ = writeln!(self.err, "\n{}", summary);
        } else {
            let _ = writeln!(self.out, "\n{}", summary);
        }
    }
}
