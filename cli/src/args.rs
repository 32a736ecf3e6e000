//! Command-line arguments.

use std::ffi::OsString;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use portlist_core::{OutputFormat, PortFilter, PortRange};

#[derive(Parser, Debug)]
#[command(name = "portlist")]
#[command(author, version, about = "List localhost listening ports and the processes that own them")]
pub struct Cli {
    /// Scan a specific port range (e.g. 3000-9000)
    #[arg(long, value_name = "START-END", value_parser = PortRange::from_str, conflicts_with = "common")]
    pub range: Option<PortRange>,

    /// Scan only well-known ports 1-1024
    #[arg(long)]
    pub common: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

/// Settings for one listing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    pub filter: PortFilter,
    pub format: OutputFormat,
}

impl From<Cli> for ScanConfig {
    fn from(cli: Cli) -> Self {
        let filter = match (cli.range, cli.common) {
            (Some(range), _) => PortFilter::new().with_range(range),
            (None, true) => PortFilter::common(),
            (None, false) => PortFilter::new(),
        };
        Self {
            filter,
            format: cli.format.into(),
        }
    }
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    /// Print help or version text and exit successfully.
    Print(String),
    /// List sockets.
    Scan(ScanConfig),
}

/// Parse the full argument list, program name included.
///
/// `--help` wins over everything else on the line, including arguments that
/// would otherwise be rejected.
pub fn parse<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

    if args.iter().skip(1).any(|arg| arg == "--help" || arg == "-h") {
        let help = Cli::command().render_help().to_string();
        return Ok(Invocation::Print(help));
    }

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Invocation::Scan(cli.into())),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Print(e.to_string()))
        }
        Err(e) => Err(e),
    }
}
