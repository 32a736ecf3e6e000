//! Parser for `ss` output.
//!
//! Expected ss output format:
//! ```text
//! State      Recv-Q     Send-Q              Local Address:Port          Peer Address:Port     Process
//! LISTEN     0          4096           [::ffff:127.0.0.1]:63342                    *:*         users:(("rustrover",pid=53561,fd=54))
//! UNCONN     0          0                   127.0.0.53%lo:53                 0.0.0.0:*
//! ```

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{Protocol, SocketRecord};

use super::address::split_host_port;

/// Column holding the local address.
const LOCAL_ADDRESS_COLUMN: usize = 3;

fn users_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    // The first user wins when several processes share the socket.
    REGEX.get_or_init(|| {
        Regex::new(r#"users:\(\("(.+?)",pid=(\d+)"#).expect("users pattern is valid")
    })
}

/// Parse one line of `ss -tlnp` / `ss -ulnp` output.
///
/// `ss` has no protocol column, so the protocol of the command that produced
/// the line is passed in.
pub fn parse_line(line: &str, protocol: Protocol) -> Option<SocketRecord> {
    // [State] [Recv-Q] [Send-Q] [Local Address:Port] [Peer Address:Port] [Process]
    let components: Vec<&str> = line.split_whitespace().collect();
    if components.len() < 5 {
        return None;
    }

    let (_, port) = split_host_port(components[LOCAL_ADDRESS_COLUMN])?;

    // Process names are quoted and may contain spaces, so match the whole line.
    let owner = users_regex().captures(line).and_then(|caps| {
        let pid: u32 = caps[2].parse().ok()?;
        Some((pid, caps[1].to_string()))
    });

    Some(match owner {
        Some((pid, name)) => SocketRecord::owned(protocol, port, pid, name),
        None => SocketRecord::unowned(protocol, port),
    })
}
