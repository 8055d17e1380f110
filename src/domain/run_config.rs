//! Role runner command-line configuration and its hand-rolled argument scan.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::domain::host_profile::{DEFAULT_ARCHITECTURE, HostProfile};

pub const USAGE: &str = "\
Usage: rolecheck [OPTIONS] <OS>

Execute shell commands to test binaries installed from roles.

Arguments:
  <OS>                      Operating system identifier (alpine, debian, darwin, win32, ...)

Options:
  -a, --arch <ARCH>         Chip architecture [default: amd64]
      --shell <PATH>        Command interpreter for test commands
  -s, --skip <ROLES>        Comma-separated roles to skip
  -t, --tags <ROLES>        Comma-separated roles to keep
  -c, --catalog <PATH>      Role catalog file [env: ROLECHECK_CATALOG] [default: data/roles.json]
  -h, --help                Print help";

/// Parsed role runner configuration. Immutable after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub architecture: String,
    pub os: String,
    pub interpreter: String,
    /// Keep only these roles when present.
    pub tags: Option<Vec<String>>,
    /// Drop these roles when present.
    pub skips: Option<Vec<String>>,
    /// Catalog location given on the command line.
    pub catalog: Option<PathBuf>,
}

impl RunConfig {
    /// Resolve the host profile described by this configuration.
    pub fn host_profile(&self) -> HostProfile {
        HostProfile::new(&self.architecture, &self.os, &self.interpreter)
    }
}

/// Result of scanning the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedArgs {
    Run(RunConfig),
    Help,
}

/// Scan `args` left to right into a [`RunConfig`].
///
/// Flags consume exactly one following token. The first token that is not a
/// recognised flag is captured as the OS identifier; any later unrecognised
/// token is a usage error, as is a missing OS identifier. Repeated flags keep
/// their last value.
pub fn parse_args<I, S>(args: I, default_interpreter: &str) -> Result<ParsedArgs, AppError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|arg| arg.as_ref().to_string()).collect();

    let mut architecture = DEFAULT_ARCHITECTURE.to_string();
    let mut interpreter = default_interpreter.to_string();
    let mut os: Option<String> = None;
    let mut tags = None;
    let mut skips = None;
    let mut catalog = None;

    let mut index = 0;
    while index < args.len() {
        let token = args[index].as_str();
        match token {
            "-h" | "--help" => return Ok(ParsedArgs::Help),
            "-a" | "--arch" => architecture = flag_value(&args, index)?.to_string(),
            "--shell" => interpreter = flag_value(&args, index)?.to_string(),
            "-s" | "--skip" => skips = split_names(flag_value(&args, index)?),
            "-t" | "--tags" => tags = split_names(flag_value(&args, index)?),
            "-c" | "--catalog" => catalog = Some(PathBuf::from(flag_value(&args, index)?)),
            _ => {
                if os.is_some() {
                    return Err(AppError::usage(format!("No such option {}", token)));
                }
                os = Some(token.to_string());
                index += 1;
                continue;
            }
        }
        index += 2;
    }

    let os = os.ok_or_else(|| AppError::usage("The os argument is required"))?;

    Ok(ParsedArgs::Run(RunConfig { architecture, os, interpreter, tags, skips, catalog }))
}

fn flag_value(args: &[String], index: usize) -> Result<&str, AppError> {
    args.get(index + 1)
        .map(String::as_str)
        .ok_or_else(|| AppError::usage(format!("Option {} requires a value", args[index])))
}

/// Split a comma-separated role list. An empty list means no filter.
fn split_names(value: &str) -> Option<Vec<String>> {
    let names: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if names.is_empty() { None } else { Some(names) }
}
