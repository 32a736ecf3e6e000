//! Parser for `lsof` output.
//!
//! Expected lsof output format:
//! ```text
//! COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
//! node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
//! mDNSResponder 312 _mdnsresponder 8u IPv4 0x1234567890abcdef 0t0 UDP *:5353
//! ```

use crate::domain::{Protocol, SocketRecord};

use super::address::split_host_port;

/// COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME
const MIN_COLUMNS: usize = 9;

/// The NODE column never appears before this index.
const FIRST_NODE_COLUMN: usize = 4;

/// Decode the escapes lsof applies to command names.
fn unescape_command(raw: &str) -> String {
    raw.replace("\\x20", " ") // Space
        .replace("\\x2f", "/") // Slash
}

/// Parse one line of `lsof -i` output.
///
/// The protocol comes from the NODE column and the local address is the
/// NAME token right after it. Connected sockets (`local->remote`) are not
/// listeners and are skipped.
pub fn parse_line(line: &str) -> Option<SocketRecord> {
    let components: Vec<&str> = line.split_whitespace().collect();
    if components.len() < MIN_COLUMNS {
        return None;
    }

    let pid: u32 = components[1].parse().ok()?;
    let process_name = unescape_command(components[0]);

    // SIZE/OFF is blank for some socket types, so search for NODE instead of
    // indexing it.
    let node = (FIRST_NODE_COLUMN..components.len() - 1)
        .find(|&i| matches!(components[i], "TCP" | "UDP"))?;
    let protocol = Protocol::from_column(components[node])?;

    let name = components[node + 1];
    if name.contains("->") {
        return None;
    }
    let (_, port) = split_host_port(name)?;

    Some(SocketRecord::owned(protocol, port, pid, process_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tcp_line() {
        let line = "node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)";
        assert_eq!(
            parse_line(line),
            Some(SocketRecord::owned(Protocol::Tcp, 3000, 34805, "node"))
        );
    }

    #[test]
    fn test_parse_udp_line() {
        let line = "mDNSResponder 312 _mdnsresponder 8u IPv4 0x1234567890abcdef 0t0 UDP *:5353";
        assert_eq!(
            parse_line(line),
            Some(SocketRecord::owned(Protocol::Udp, 5353, 312, "mDNSResponder"))
        );
    }

    #[test]
    fn test_unescape_process_name() {
        let line = r"Code\x20Helper  1234  user   10u  IPv4 0x1234567890abcdef      0t0  TCP *:3000 (LISTEN)";
        let record = parse_line(line).unwrap();
        assert_eq!(record.process_name.known().map(String::as_str), Some("Code Helper"));
    }

    #[test]
    fn test_skips_connected_udp() {
        let line = "Spotify 901 me 60u IPv4 0xabcdef 0t0 UDP 192.168.1.5:51234->8.8.8.8:53";
        assert_eq!(parse_line(line), None);
    }

    #[test]
    fn test_skips_header_and_noise() {
        let header = "COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME";
        assert_eq!(parse_line(header), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("lsof: WARNING: can't stat() fuse file system"), None);
    }

    #[test]
    fn test_dual_stack_lines_parse_identically() {
        let v4 = "node 1234 code 19u IPv4 0x1234567890abcdef 0t0 TCP 127.0.0.1:3000 (LISTEN)";
        let v6 = "node 1234 code 20u IPv6 0xfedcba0987654321 0t0 TCP [::1]:3000 (LISTEN)";
        assert_eq!(parse_line(v4), parse_line(v6));
        assert!(parse_line(v4).is_some());
    }
}
