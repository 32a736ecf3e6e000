use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::domain::SocketRecord;
use crate::error::Result;

/// Top-level JSON document.
#[derive(Serialize)]
struct Report<'a> {
    ports: &'a [SocketRecord],
}

/// Compact single-line layout with a space after `:` and `,`,
/// e.g. `{"ports": [{"proto": "TCP", "port": 22}]}`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

/// Render records as `{"ports": [...]}` followed by a newline.
///
/// Unresolved pids and process names are emitted as `"unknown"`. An empty
/// record set renders exactly `{"ports": []}`.
pub fn render_json<W: Write>(records: &[SocketRecord], out: &mut W) -> Result<()> {
    let mut serializer = Serializer::with_formatter(&mut *out, SpacedFormatter);
    Report { ports: records }.serialize(&mut serializer)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Protocol;

    fn render(records: &[SocketRecord]) -> String {
        let mut out = Vec::new();
        render_json(records, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render(&[]), "{\"ports\": []}\n");
    }

    #[test]
    fn test_report_layout() {
        let records = vec![
            SocketRecord::owned(Protocol::Tcp, 8080, 1234, "node"),
            SocketRecord::unowned(Protocol::Udp, 5353),
        ];

        assert_eq!(
            render(&records).trim_end(),
            r#"{"ports": [{"proto": "TCP", "port": 8080, "pid": 1234, "process": "node"}, {"proto": "UDP", "port": 5353, "pid": "unknown", "process": "unknown"}]}"#
        );
    }

    #[test]
    fn test_output_is_valid_json_with_awkward_names() {
        let records = vec![
            SocketRecord::owned(Protocol::Tcp, 1, 2, "we\"ird\\name"),
            SocketRecord::owned(Protocol::Tcp, 3, 4, "tab\there ünïcode"),
        ];

        let value: serde_json::Value = serde_json::from_str(&render(&records)).unwrap();
        let ports = value["ports"].as_array().unwrap();
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0]["process"], "we\"ird\\name");
        assert_eq!(ports[1]["process"], "tab\there ünïcode");
    }
}
