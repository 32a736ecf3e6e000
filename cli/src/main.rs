//! portlist CLI - List localhost listening ports
//!
//! Shows every listening TCP/UDP socket with the process that owns it,
//! optionally restricted to a port range, as a table or as JSON.

mod args;
mod commands;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use portlist_core::{PlatformEnumerator, SocketSource};
use tracing_subscriber::EnvFilter;

use crate::args::Invocation;

/// Exit code for a failed enumeration or report.
const EXIT_FAILURE: u8 = 1;

/// Exit code for a rejected command line.
const EXIT_USAGE: u8 = 2;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Parse `args`, then enumerate, filter and render.
///
/// `detect` builds the socket source and is only called once the command
/// line is known to request a listing. Returns the process exit code.
async fn run<I, T, S, F, O, E>(args: I, detect: F, out: &mut O, err: &mut E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: SocketSource,
    F: FnOnce() -> portlist_core::Result<S>,
    O: Write,
    E: Write,
{
    let config = match args::parse(args) {
        Ok(Invocation::Print(text)) => {
            let _ = write!(out, "{text}");
            return 0;
        }
        Ok(Invocation::Scan(config)) => config,
        Err(e) => {
            let _ = write!(err, "{e}");
            return u8::try_from(e.exit_code()).unwrap_or(EXIT_USAGE);
        }
    };

    let result = match detect() {
        Ok(source) => commands::list::run(source, &config, out).await,
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            let _ = writeln!(err, "Error: {e:#}");
            EXIT_FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let code = run(
        std::env::args_os(),
        PlatformEnumerator::detect,
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
