//! Line parsers for enumeration command output.
//!
//! Each parser turns one raw line into a [`SocketRecord`]. Lines that do not
//! have the expected shape (headers, banners, blank lines, connected
//! sockets) are expected noise and are skipped without error. A socket whose
//! owner cannot be seen under the current privilege level is kept with an
//! unknown pid and process.

mod address;
mod lsof;
mod netstat;
mod ss;

use tracing::{debug, trace};

use crate::domain::SocketRecord;
use crate::ports::{ListingFormat, RawListing};

/// Parse a single line according to the layout of the command that
/// produced it.
pub fn parse_line(line: &str, format: ListingFormat) -> Option<SocketRecord> {
    match format {
        ListingFormat::Ss(protocol) => ss::parse_line(line, protocol),
        ListingFormat::Lsof => lsof::parse_line(line),
        ListingFormat::Netstat => netstat::parse_line(line),
    }
}

/// Parse every line of a listing, in input order.
pub fn parse_listing(listing: &RawListing) -> Vec<SocketRecord> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for line in listing.text.lines() {
        match parse_line(line, listing.format) {
            Some(record) => records.push(record),
            None => {
                if !line.trim().is_empty() {
                    trace!(line, "skipping unrecognized line");
                }
                skipped += 1;
            }
        }
    }

    debug!(
        format = ?listing.format,
        parsed = records.len(),
        skipped,
        "parsed listing"
    );
    records
}

/// Parse several listings, concatenating the records in listing order.
pub fn parse_listings(listings: &[RawListing]) -> Vec<SocketRecord> {
    listings.iter().flat_map(parse_listing).collect()
}
