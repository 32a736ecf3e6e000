//! Listening socket enumeration through platform commands.
//!
//! The command is picked once, at startup, by probing for the first
//! available tool in platform preference order:
//! - Linux: `ss` (one run per protocol), then `netstat`, then `lsof`
//! - Other Unix (macOS, BSD): `lsof`

mod command;

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::Protocol;
use crate::error::{Error, Result};
use crate::ports::{ListingFormat, RawListing, SocketSource};

use command::capture;

/// Directories searched after `PATH`. Tools like `ss` often live in sbin
/// directories that are not on an unprivileged user's `PATH`.
const SYSTEM_DIRS: &[&str] = &["/usr/sbin", "/sbin", "/usr/bin", "/bin"];

#[cfg(target_os = "linux")]
const PREFERENCE: &[Tool] = &[Tool::Ss, Tool::Netstat, Tool::Lsof];

#[cfg(not(target_os = "linux"))]
const PREFERENCE: &[Tool] = &[Tool::Lsof];

/// An external command able to list listening sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Ss,
    Lsof,
    Netstat,
}

impl Tool {
    /// Executable name looked up on disk.
    pub fn binary_name(&self) -> &'static str {
        match self {
            Tool::Ss => "ss",
            Tool::Lsof => "lsof",
            Tool::Netstat => "netstat",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary_name())
    }
}

/// Directories to probe: `PATH` entries first, then the system directories.
fn search_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = env::var_os("PATH")
        .map(|path| env::split_paths(&path).collect())
        .unwrap_or_default();

    for dir in SYSTEM_DIRS {
        let dir = PathBuf::from(dir);
        if !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }

    #[cfg(not(unix))]
    {
        true
    }
}

/// Find `tool` in the first directory that holds an executable of that name.
fn locate(tool: Tool, dirs: &[PathBuf]) -> Option<PathBuf> {
    dirs.iter()
        .map(|dir| dir.join(tool.binary_name()))
        .find(|candidate| is_executable(candidate))
}

/// Socket source backed by whichever platform command is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformEnumerator {
    tool: Tool,
    program: PathBuf,
}

impl PlatformEnumerator {
    /// Probe `PATH` and the system directories for a supported tool.
    pub fn detect() -> Result<Self> {
        Self::detect_in(&search_dirs(), PREFERENCE)
    }

    /// Probe `dirs` for the first tool of `preference` that is installed.
    pub fn detect_in(dirs: &[PathBuf], preference: &[Tool]) -> Result<Self> {
        for &tool in preference {
            if let Some(program) = locate(tool, dirs) {
                debug!(%tool, program = %program.display(), "Selected enumeration command");
                return Ok(Self { tool, program });
            }
        }

        let wanted: Vec<&str> = preference.iter().map(Tool::binary_name).collect();
        Err(Error::UnsupportedPlatform(format!(
            "none of the supported commands ({}) was found",
            wanted.join(", ")
        )))
    }

    /// Use a specific executable for `tool` without probing.
    pub fn with_program(tool: Tool, program: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            program: program.into(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl SocketSource for PlatformEnumerator {
    /// Capture the raw listing of listening sockets.
    ///
    /// Executes, depending on the selected tool:
    /// - `ss -tlnp` and `ss -ulnp`
    /// - `lsof -nP -iTCP -sTCP:LISTEN -iUDP +c 0`
    /// - `netstat -tulnp`
    ///
    /// Flags explained:
    /// - -t / -u: TCP / UDP sockets
    /// - -l, -sTCP:LISTEN: listening sockets only
    /// - -n, -P: numeric hosts and ports, no name resolution
    /// - -p: show the owning process
    /// - +c 0: full command name (unlimited length)
    async fn enumerate(&self) -> Result<Vec<RawListing>> {
        match self.tool {
            Tool::Ss => {
                let mut listings = Vec::with_capacity(Protocol::ALL.len());
                for protocol in Protocol::ALL {
                    let flag = match protocol {
                        Protocol::Tcp => "-tlnp",
                        Protocol::Udp => "-ulnp",
                    };
                    let text = capture(&self.program, &[flag]).await?;
                    listings.push(RawListing::new(ListingFormat::Ss(protocol), text));
                }
                Ok(listings)
            }
            Tool::Lsof => {
                let text = capture(
                    &self.program,
                    &["-nP", "-iTCP", "-sTCP:LISTEN", "-iUDP", "+c", "0"],
                )
                .await?;
                Ok(vec![RawListing::new(ListingFormat::Lsof, text)])
            }
            Tool::Netstat => {
                let text = capture(&self.program, &["-tulnp"]).await?;
                Ok(vec![RawListing::new(ListingFormat::Netstat, text)])
            }
        }
    }
}
