use ferrous_recursor_application::use_cases::HandleDnsQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, warn};

/// Bridges raw datagrams to the query use case.
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Returns the bytes to send back to `client`, or `None` when the query
    /// failed and the client gets no reply.
    pub async fn handle_raw_udp(&self, packet: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        match self.use_case.execute(packet).await {
            Ok(response) => {
                debug!(client = %client, bytes = response.len(), "Sending response");
                Some(response)
            }
            Err(e) => {
                warn!(
                    client = %client,
                    status = e.status(),
                    error = %e,
                    "Dropping query without reply"
                );
                None
            }
        }
    }
}
