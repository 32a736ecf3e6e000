//! Running an enumeration command and capturing its output.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Run `program` with `args` to completion and return its stdout.
///
/// Only a failure to start the program is an error. A non-zero exit status
/// is common when nothing matches (lsof exits 1 on an empty result), so the
/// captured stdout is returned regardless. Invalid UTF-8 is replaced rather
/// than rejected.
pub async fn capture(program: &Path, args: &[&str]) -> Result<String> {
    debug!(program = %program.display(), ?args, "Running enumeration command");

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| Error::CommandFailed(format!("Failed to run {}: {}", program.display(), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!(
            program = %program.display(),
            status = %output.status,
            stderr = stderr.trim(),
            "Command exited unsuccessfully, using its output anyway"
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
