//! Socket listing application service.

use crate::domain::{filter_records, PortFilter, SocketRecord};
use crate::error::Result;
use crate::parser::parse_listings;
use crate::ports::SocketSource;

/// Application service for listing listening sockets.
///
/// Runs the enumerate → parse → filter pipeline once per call. It uses the
/// `SocketSource` trait for the actual enumeration, allowing different
/// implementations to be injected.
pub struct SocketService<S: SocketSource> {
    source: S,
}

impl<S: SocketSource> SocketService<S> {
    /// Create a new socket service with the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Enumerate, parse and filter listening sockets.
    pub async fn list(&self, filter: &PortFilter) -> Result<Vec<SocketRecord>> {
        let listings = self.source.enumerate().await?;
        let records = parse_listings(&listings);
        Ok(filter_records(records, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PortRange, Protocol};
    use crate::error::Error;
    use crate::ports::{ListingFormat, RawListing};

    /// Mock source for testing.
    struct MockSource {
        listings: Vec<RawListing>,
    }

    impl SocketSource for MockSource {
        async fn enumerate(&self) -> Result<Vec<RawListing>> {
            Ok(self.listings.clone())
        }
    }

    struct FailingSource;

    impl SocketSource for FailingSource {
        async fn enumerate(&self) -> Result<Vec<RawListing>> {
            Err(Error::UnsupportedPlatform("no tools".to_string()))
        }
    }

    fn netstat(text: &str) -> MockSource {
        MockSource {
            listings: vec![RawListing::new(ListingFormat::Netstat, text)],
        }
    }

    #[tokio::test]
    async fn test_list_parses_and_filters() {
        let service = SocketService::new(netstat(
            "Active Internet connections (only servers)
Proto Recv-Q Send-Q Local Address Foreign Address State PID/Program name
tcp 0 0 0.0.0.0:80 0.0.0.0:* LISTEN 1/nginx
tcp 0 0 127.0.0.1:5000 0.0.0.0:* LISTEN 2/python3
udp 0 0 0.0.0.0:9001 0.0.0.0:* -",
        ));

        let all = service.list(&PortFilter::new()).await.unwrap();
        assert_eq!(all.len(), 3);

        let filter = PortFilter::new().with_range(PortRange::new(3000, 9000).unwrap());
        let ranged = service.list(&filter).await.unwrap();
        assert_eq!(ranged, vec![SocketRecord::owned(Protocol::Tcp, 5000, 2, "python3")]);

        let common = service.list(&PortFilter::common()).await.unwrap();
        assert_eq!(common, vec![SocketRecord::owned(Protocol::Tcp, 80, 1, "nginx")]);
    }

    #[tokio::test]
    async fn test_list_empty_output() {
        let service = SocketService::new(netstat(""));
        assert!(service.list(&PortFilter::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_propagates_source_errors() {
        let service = SocketService::new(FailingSource);
        let err = service.list(&PortFilter::new()).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedPlatform(_)));
    }
}
