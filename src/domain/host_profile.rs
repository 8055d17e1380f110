//! Host profile: the machine description roles are tested against.

use std::fmt;

/// Architecture used when none is given on the command line.
pub const DEFAULT_ARCHITECTURE: &str = "amd64";

/// Operating system identifiers that belong to the Linux family.
///
/// A skip condition of `os: linux` matches any of these.
pub const LINUX_DISTROS: [&str; 6] = ["alpine", "arch", "fedora", "debian", "suse", "ubuntu"];

/// Platform family the binary was compiled for, used to pick a default interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformFamily {
    MacOs,
    FreeBsd,
    Linux,
    Windows,
}

impl PlatformFamily {
    /// Platform family of the running binary.
    ///
    /// Unix targets other than macOS and FreeBSD are treated as Linux.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            PlatformFamily::MacOs
        } else if cfg!(target_os = "freebsd") {
            PlatformFamily::FreeBsd
        } else if cfg!(windows) {
            PlatformFamily::Windows
        } else {
            PlatformFamily::Linux
        }
    }

    /// Default command interpreter for this platform.
    pub fn default_interpreter(self) -> &'static str {
        match self {
            PlatformFamily::MacOs => "/bin/bash",
            PlatformFamily::FreeBsd => "/usr/local/bin/bash",
            PlatformFamily::Linux => "/bin/bash",
            PlatformFamily::Windows => "C:/Windows/System32/WindowsPowerShell/v1.0/powershell.exe",
        }
    }
}

/// Resolved description of the host under test. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    architecture: String,
    os: String,
    interpreter: String,
}

impl HostProfile {
    pub fn new(
        architecture: impl Into<String>,
        os: impl Into<String>,
        interpreter: impl Into<String>,
    ) -> Self {
        Self { architecture: architecture.into(), os: os.into(), interpreter: interpreter.into() }
    }

    pub fn architecture(&self) -> &str {
        &self.architecture
    }

    pub fn os(&self) -> &str {
        &self.os
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    /// Whether the OS identifier is a member of the Linux family.
    pub fn is_linux(&self) -> bool {
        LINUX_DISTROS.contains(&self.os.as_str())
    }

    /// Look up a profile field by the key used in skip conditions.
    ///
    /// Returns `None` for keys that name no field.
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "arch" | "architecture" => Some(&self.architecture),
            "os" => Some(&self.os),
            "shell" | "interpreter" => Some(&self.interpreter),
            _ => None,
        }
    }
}

impl fmt::Display for HostProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.os, self.architecture, self.interpreter)
    }
}
