//! Parser for `netstat -tulnp` output.
//!
//! Expected netstat output format:
//! ```text
//! Proto Recv-Q Send-Q Local Address           Foreign Address         State       PID/Program name
//! tcp        0      0 127.0.0.1:8080          0.0.0.0:*               LISTEN      1234/node
//! tcp6       0      0 :::22                   :::*                    LISTEN      -
//! udp        0      0 0.0.0.0:68              0.0.0.0:*                           812/dhclient
//! ```

use crate::domain::{Protocol, SocketRecord};

use super::address::split_host_port;

const LOCAL_ADDRESS_COLUMN: usize = 3;

/// Columns after the foreign address: optional state, then the owner.
const TRAILING_COLUMNS: usize = 5;

/// Parse a `PID/Program name` token. `-` (owner hidden) yields `None`.
fn parse_owner(columns: &[&str]) -> Option<(u32, String)> {
    let start = columns.iter().position(|c| {
        c.split_once('/')
            .is_some_and(|(pid, _)| !pid.is_empty() && pid.bytes().all(|b| b.is_ascii_digit()))
    })?;

    let (pid, first) = columns[start].split_once('/')?;
    let pid: u32 = pid.parse().ok()?;

    // Program names may contain spaces ("Web Content").
    let mut name = first.to_string();
    for part in &columns[start + 1..] {
        name.push(' ');
        name.push_str(part);
    }
    Some((pid, name))
}

/// Parse one line of `netstat -tulnp` output.
pub fn parse_line(line: &str) -> Option<SocketRecord> {
    let components: Vec<&str> = line.split_whitespace().collect();
    if components.len() < TRAILING_COLUMNS {
        return None;
    }

    let protocol = Protocol::from_column(components[0])?;
    let (_, port) = split_host_port(components[LOCAL_ADDRESS_COLUMN])?;

    Some(match parse_owner(&components[TRAILING_COLUMNS..]) {
        Some((pid, name)) => SocketRecord::owned(protocol, port, pid, name),
        None => SocketRecord::unowned(protocol, port),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resolved;

    #[test]
    fn test_parse_tcp_line() {
        let line = "tcp 0 0 127.0.0.1:8080 0.0.0.0:* LISTEN 1234/node";
        assert_eq!(
            parse_line(line),
            Some(SocketRecord::owned(Protocol::Tcp, 8080, 1234, "node"))
        );
    }

    #[test]
    fn test_parse_udp_line_without_state() {
        let line = "udp        0      0 0.0.0.0:68              0.0.0.0:*                           812/dhclient";
        assert_eq!(
            parse_line(line),
            Some(SocketRecord::owned(Protocol::Udp, 68, 812, "dhclient"))
        );
    }

    #[test]
    fn test_hidden_owner_is_unknown() {
        let line = "tcp6       0      0 :::22                   :::*                    LISTEN      -";
        let record = parse_line(line).unwrap();
        assert_eq!(record.protocol, Protocol::Tcp);
        assert_eq!(record.port, 22);
        assert_eq!(record.pid, Resolved::Unknown);
        assert_eq!(record.process_name, Resolved::Unknown);

        let udp = "udp 0 0 0.0.0.0:5353 0.0.0.0:*";
        assert_eq!(parse_line(udp), Some(SocketRecord::unowned(Protocol::Udp, 5353)));
    }

    #[test]
    fn test_program_name_with_spaces() {
        let line = "tcp 0 0 127.0.0.1:9222 0.0.0.0:* LISTEN 4321/Web Content";
        let record = parse_line(line).unwrap();
        assert_eq!(record.process_name, Resolved::Known("Web Content".to_string()));
        assert_eq!(record.pid, Resolved::Known(4321));
    }

    #[test]
    fn test_skips_banners_and_headers() {
        assert_eq!(parse_line("Active Internet connections (only servers)"), None);
        assert_eq!(
            parse_line("Proto Recv-Q Send-Q Local Address Foreign Address State PID/Program name"),
            None
        );
        assert_eq!(
            parse_line("(Not all processes could be identified, non-owned process info"),
            None
        );
        assert_eq!(parse_line(""), None);
    }
}
