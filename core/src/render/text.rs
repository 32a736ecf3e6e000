use std::io::Write;

use crate::domain::SocketRecord;
use crate::error::Result;

const HEADERS: [&str; 4] = ["Proto", "Port", "PID", "Process"];
const SEPARATOR: &str = "  ";

/// Render records as a table with a header row.
///
/// Column widths depend on every row, so all cells are formatted before
/// anything is written. `Port` and `PID` are right-aligned, the other columns
/// left-aligned, and the last column is never padded. An empty record set
/// still prints the header.
pub fn render_text<W: Write>(records: &[SocketRecord], out: &mut W) -> Result<()> {
    let rows: Vec<[String; 4]> = records
        .iter()
        .map(|r| {
            [
                r.protocol.to_string(),
                r.port.to_string(),
                r.pid.to_string(),
                r.process_name.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS, &widths)?;
    for row in &rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write, S: AsRef<str>>(out: &mut W, cells: &[S; 4], widths: &[usize; 4]) -> Result<()> {
    let [proto, port, pid, process] = cells;
    writeln!(
        out,
        "{:<w0$}{sep}{:>w1$}{sep}{:>w2$}{sep}{}",
        proto.as_ref(),
        port.as_ref(),
        pid.as_ref(),
        process.as_ref(),
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        sep = SEPARATOR,
    )?;
    Ok(())
}
