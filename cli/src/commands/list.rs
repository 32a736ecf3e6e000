//! List command - show listening sockets.

use std::io::Write;

use anyhow::Result;
use portlist_core::{SocketService, SocketSource};
use tracing::debug;

use crate::args::ScanConfig;

pub async fn run<S: SocketSource, W: Write>(source: S, config: &ScanConfig, out: &mut W) -> Result<()> {
    let service = SocketService::new(source);
    let records = service.list(&config.filter).await?;

    debug!(count = records.len(), format = %config.format, "Rendering report");
    config.format.render(&records, out)?;
    out.flush()?;
    Ok(())
}
