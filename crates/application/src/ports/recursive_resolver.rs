use async_trait::async_trait;
use ferrous_recursor_domain::{DnsQuery, DomainError};
use hickory_proto::op::Message;

#[async_trait]
pub trait RecursiveResolver: Send + Sync {
    /// Walks the delegation chain until a server answers the query.
    ///
    /// The returned message is the answering server's reply, untouched.
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError>;
}
