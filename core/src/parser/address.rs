/// Split a local address token into host and port.
///
/// The port is whatever follows the final colon, which covers every layout
/// the enumeration tools print:
/// - IPv4: "127.0.0.1:3000" or "*:8080"
/// - IPv6: "\[::1]:3000", "\[::ffff:127.0.0.1]:63342" or ":::22"
/// - Scoped: "127.0.0.53%lo:53"
///
/// Returns `None` when there is no colon or the port is not a number in
/// 0-65535 (e.g. the "*" of a peer column).
pub fn split_host_port(address: &str) -> Option<(&str, u16)> {
    let last_colon = address.rfind(':')?;
    let port: u16 = address[last_colon + 1..].parse().ok()?;
    let host = &address[..last_colon];
    let host = if host.is_empty() { "*" } else { host };
    Some((host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_address() {
        assert_eq!(split_host_port("127.0.0.1:3000"), Some(("127.0.0.1", 3000)));
        assert_eq!(split_host_port("*:8080"), Some(("*", 8080)));
        assert_eq!(split_host_port("0.0.0.0:0"), Some(("0.0.0.0", 0)));
    }

    #[test]
    fn test_ipv6_address() {
        assert_eq!(split_host_port("[::1]:3000"), Some(("[::1]", 3000)));
        assert_eq!(split_host_port("[fe80::1]:8080"), Some(("[fe80::1]", 8080)));
        assert_eq!(split_host_port(":::22"), Some(("::", 22)));
    }

    #[test]
    fn test_scoped_address() {
        assert_eq!(split_host_port("127.0.0.53%lo:53"), Some(("127.0.0.53%lo", 53)));
    }

    #[test]
    fn test_rejects_non_ports() {
        assert_eq!(split_host_port("0.0.0.0:*"), None);
        assert_eq!(split_host_port("Address:Port"), None);
        assert_eq!(split_host_port("127.0.0.1:65536"), None);
        assert_eq!(split_host_port("[::1]"), None);
        assert_eq!(split_host_port("LISTEN"), None);
    }
}
