use crate::ports::{LocalRecordsPort, RecursiveResolver, ResponseCachePort};
use crate::wire;
use ferrous_recursor_domain::{DnsQuery, DomainError};
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// TTL carried by answers synthesized from the local override table.
pub const DEFAULT_LOCAL_RECORD_TTL: u32 = 600;

/// Per-query orchestration: cache, then local overrides, then recursion.
pub struct HandleDnsQueryUseCase {
    cache: Arc<dyn ResponseCachePort>,
    local_records: Arc<dyn LocalRecordsPort>,
    resolver: Arc<dyn RecursiveResolver>,
    local_ttl: u32,
}

impl HandleDnsQueryUseCase {
    pub fn new(
        cache: Arc<dyn ResponseCachePort>,
        local_records: Arc<dyn LocalRecordsPort>,
        resolver: Arc<dyn RecursiveResolver>,
    ) -> Self {
        Self {
            cache,
            local_records,
            resolver,
            local_ttl: DEFAULT_LOCAL_RECORD_TTL,
        }
    }

    pub fn with_local_ttl(mut self, ttl: u32) -> Self {
        self.local_ttl = ttl;
        self
    }

    /// Resolves one raw query packet into a raw response packet.
    ///
    /// Any error means no reply should be sent for this packet.
    pub async fn execute(&self, packet: &[u8]) -> Result<Vec<u8>, DomainError> {
        let start = Instant::now();

        let request = wire::decode(packet)?;
        // Additional questions are ignored.
        let question = request.queries().first().ok_or(DomainError::NoQuestion)?;
        let query = wire::query_from_question(question);

        debug!(
            domain = %query.domain,
            record_type = %query.record_type,
            id = request.id(),
            "Query received"
        );

        if let Some(cached) = self.cache.lookup(&query.domain) {
            let bytes = wire::encode(&finish_response(cached, &request))?;
            info!(
                domain = %query.domain,
                elapsed_us = start.elapsed().as_micros() as u64,
                "CACHE HIT"
            );
            return Ok(bytes);
        }

        if query.is_address_query() {
            if let Some(address) = self.local_records.lookup(&query.domain) {
                let bytes = wire::encode(&self.local_response(&request, address))?;
                info!(
                    domain = %query.domain,
                    address = %address,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "LOCAL RECORD"
                );
                return Ok(bytes);
            }
        }

        let resolved = self.resolve_upstream(&query).await?;
        let ttl = self.cache.store(&query.domain, &resolved);
        let bytes = wire::encode(&finish_response(resolved, &request))?;

        info!(
            domain = %query.domain,
            ttl,
            elapsed_us = start.elapsed().as_micros() as u64,
            "CACHE MISS (resolved)"
        );

        Ok(bytes)
    }

    async fn resolve_upstream(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        match self.resolver.resolve(query).await {
            Ok(message) => {
                for answer in message.answers() {
                    if let Some(RData::A(a)) = answer.data() {
                        debug!(domain = %query.domain, address = %a.0, "Found address");
                    }
                }
                Ok(message)
            }
            Err(e) => {
                warn!(
                    domain = %query.domain,
                    status = e.status(),
                    transport = e.is_transport_error(),
                    error = %e,
                    "Resolution failed"
                );
                Err(e)
            }
        }
    }

    fn local_response(&self, request: &Message, address: Ipv4Addr) -> Message {
        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_authoritative(true)
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .add_queries(request.queries().iter().cloned());

        if let Some(question) = request.queries().first() {
            response.add_answer(Record::from_rdata(
                question.name().clone(),
                self.local_ttl,
                RData::A(A(address)),
            ));
        }

        response
    }
}

/// Stamps a resolved or cached message with the inbound query's header state
/// and question section, so the client sees its own name casing.
fn finish_response(mut message: Message, request: &Message) -> Message {
    message.take_queries();
    message
        .add_queries(request.queries().iter().cloned())
        .set_id(request.id())
        .set_message_type(MessageType::Response)
        .set_recursion_desired(request.recursion_desired())
        .set_recursion_available(true);
    message
}
