//! Wire-format helpers shared by the engine and the upstream transport.

use ferrous_recursor_domain::{DnsQuery, DomainError, RecordType};
use hickory_proto::op::{Message, Query};
use hickory_proto::serialize::binary::BinEncodable;

/// Decodes an inbound packet.
pub fn decode(packet: &[u8]) -> Result<Message, DomainError> {
    Message::from_vec(packet).map_err(|e| DomainError::MalformedPacket(e.to_string()))
}

pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    message
        .to_bytes()
        .map_err(|e| DomainError::EncodeFailure(e.to_string()))
}

/// Converts a wire question into a normalized [`DnsQuery`].
pub fn query_from_question(question: &Query) -> DnsQuery {
    DnsQuery::new(
        question.name().to_ascii(),
        RecordType::from_u16(u16::from(question.query_type())),
    )
    .with_class(u16::from(question.query_class()))
}
