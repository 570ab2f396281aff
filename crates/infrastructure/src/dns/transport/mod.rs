pub mod udp;

use async_trait::async_trait;
use ferrous_recursor_domain::DomainError;
use hickory_proto::op::Message;
use std::net::SocketAddr;

pub use udp::UdpTransport;

/// One request/response exchange with an upstream nameserver.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn exchange(&self, server: SocketAddr, query: &Message) -> Result<Message, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
