//! UDP Transport for upstream DNS queries (RFC 1035 §4.2.1)
//!
//! A fresh socket is bound per exchange and reads exactly one datagram.
//! Replies larger than the receive buffer are cut short and then fail to
//! decode; there is no TCP fallback.

use super::DnsTransport;
use async_trait::async_trait;
use ferrous_recursor_application::wire;
use ferrous_recursor_domain::DomainError;
use hickory_proto::op::Message;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(2);

pub const DEFAULT_RECV_BUFFER_SIZE: usize = 1024;

pub struct UdpTransport {
    timeout: Duration,
    recv_buffer_size: usize,
}

impl UdpTransport {
    pub fn new(timeout: Duration, recv_buffer_size: usize) -> Self {
        Self {
            timeout,
            recv_buffer_size,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for UdpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_TIMEOUT, DEFAULT_RECV_BUFFER_SIZE)
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn exchange(&self, server: SocketAddr, query: &Message) -> Result<Message, DomainError> {
        let message_bytes = wire::encode(query)?;

        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| unreachable_error(server, format!("bind failed: {}", e)))?;

        let bytes_sent = tokio::time::timeout(self.timeout, socket.send_to(&message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| unreachable_error(server, e.to_string()))?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; self.recv_buffer_size];

        let (bytes_received, from_addr) =
            tokio::time::timeout(self.timeout, socket.recv_from(&mut recv_buf))
                .await
                .map_err(|_| timeout_error(server))?
                .map_err(|e| unreachable_error(server, e.to_string()))?;

        if from_addr.ip() != server.ip() {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        debug!(server = %server, bytes_received, "UDP response received");

        let response = Message::from_vec(&recv_buf[..bytes_received]).map_err(|e| {
            DomainError::InvalidUpstreamResponse {
                server: server.to_string(),
                reason: e.to_string(),
            }
        })?;

        validate_response_id(server, query.id(), &response)?;
        Ok(response)
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

/// Rejects a reply whose transaction ID does not match the query.
pub fn validate_response_id(
    server: SocketAddr,
    expected: u16,
    response: &Message,
) -> Result<(), DomainError> {
    if response.id() != expected {
        return Err(DomainError::InvalidUpstreamResponse {
            server: server.to_string(),
            reason: format!(
                "transaction id mismatch: expected {}, got {}",
                expected,
                response.id()
            ),
        });
    }
    Ok(())
}

fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::UpstreamTimeout {
        server: server.to_string(),
    }
}

fn unreachable_error(server: SocketAddr, reason: String) -> DomainError {
    DomainError::UpstreamUnreachable {
        server: server.to_string(),
        reason,
    }
}
