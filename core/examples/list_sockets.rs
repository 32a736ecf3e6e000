//! Example: List listening sockets on well-known ports.

use portlist_core::{OutputFormat, PlatformEnumerator, PortFilter, SocketService};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let enumerator = match PlatformEnumerator::detect() {
        Ok(enumerator) => enumerator,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };
    println!("Listing sockets with {}...\n", enumerator.tool());

    let service = SocketService::new(enumerator);
    match service.list(&PortFilter::common()).await {
        Ok(records) => {
            let mut stdout = std::io::stdout();
            if let Err(e) = OutputFormat::Text.render(&records, &mut stdout) {
                eprintln!("Error rendering report: {}", e);
                return;
            }
            println!("\nTotal: {} sockets", records.len());
        }
        Err(e) => {
            eprintln!("Error listing sockets: {}", e);
        }
    }
}
