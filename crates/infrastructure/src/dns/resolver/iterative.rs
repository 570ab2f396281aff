use crate::dns::forwarding::{MessageBuilder, ResponseParser, UpstreamReply};
use crate::dns::transport::DnsTransport;
use async_trait::async_trait;
use ferrous_recursor_application::ports::RecursiveResolver;
use ferrous_recursor_domain::{DnsQuery, DomainError, RecordType};
use futures::future::{BoxFuture, FutureExt};
use hickory_proto::op::Message;
use hickory_proto::rr::Name;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DNS_PORT: u16 = 53;

pub const DEFAULT_MAX_HOPS: u8 = 7;

pub const DEFAULT_MAX_REFERRAL_DEPTH: u8 = 4;

/// Walks the delegation chain from a single root hint.
///
/// Every hop asks one server. A reply with answers ends the walk, glue moves
/// the walk to the glue address, and a referral without glue resolves the
/// delegated nameserver names with nested walks of their own.
pub struct IterativeResolver {
    transport: Arc<dyn DnsTransport>,
    root_hint: Ipv4Addr,
    max_hops: u8,
    max_referral_depth: u8,
}

impl IterativeResolver {
    pub fn new(transport: Arc<dyn DnsTransport>, root_hint: Ipv4Addr) -> Self {
        info!(
            root_hint = %root_hint,
            protocol = transport.protocol_name(),
            "Iterative resolver created"
        );

        Self {
            transport,
            root_hint,
            max_hops: DEFAULT_MAX_HOPS,
            max_referral_depth: DEFAULT_MAX_REFERRAL_DEPTH,
        }
    }

    pub fn with_max_hops(mut self, max_hops: u8) -> Self {
        self.max_hops = max_hops;
        self
    }

    pub fn with_max_referral_depth(mut self, depth: u8) -> Self {
        self.max_referral_depth = depth;
        self
    }

    fn resolve_at_depth<'a>(
        &'a self,
        query: &'a DnsQuery,
        depth: u8,
    ) -> BoxFuture<'a, Result<Message, DomainError>> {
        async move {
            let mut server = self.root_hint;

            for hop in 1..=self.max_hops {
                debug!(depth, "hop {} asking {} for {}", hop, server, query.domain);

                let request = MessageBuilder::build_query(query)?;
                let response = self
                    .transport
                    .exchange(SocketAddr::from((server, DNS_PORT)), &request)
                    .await?;

                match ResponseParser::classify(&response) {
                    UpstreamReply::Answered => return Ok(response),
                    UpstreamReply::Referral(next) => server = next,
                    UpstreamReply::Delegation(nameservers) => {
                        match self.resolve_nameservers(&nameservers, depth).await {
                            Some(next) => server = next,
                            None => return Err(DomainError::DeadEnd),
                        }
                    }
                    UpstreamReply::DeadEnd => return Err(DomainError::DeadEnd),
                }
            }

            Err(DomainError::TooManyHops {
                hops: self.max_hops,
            })
        }
        .boxed()
    }

    /// Returns the first address any of `nameservers` resolves to, trying
    /// them in order.
    async fn resolve_nameservers(&self, nameservers: &[Name], depth: u8) -> Option<Ipv4Addr> {
        if depth >= self.max_referral_depth {
            warn!(
                depth,
                nameservers = nameservers.len(),
                "Referral depth limit reached, skipping nameserver lookups"
            );
            return None;
        }

        for nameserver in nameservers {
            let ns_query = DnsQuery::new(nameserver.to_ascii(), RecordType::A);

            match self.resolve_at_depth(&ns_query, depth + 1).await {
                Ok(message) => {
                    if let Some(address) = ResponseParser::answer_addresses(&message).first() {
                        debug!(nameserver = %ns_query.domain, address = %address, "Nameserver resolved");
                        return Some(*address);
                    }
                    debug!(nameserver = %ns_query.domain, "Nameserver has no A record");
                }
                Err(e) => {
                    debug!(nameserver = %ns_query.domain, error = %e, "Nameserver lookup failed");
                }
            }
        }

        None
    }
}

#[async_trait]
impl RecursiveResolver for IterativeResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        self.resolve_at_depth(query, 0).await
    }
}
