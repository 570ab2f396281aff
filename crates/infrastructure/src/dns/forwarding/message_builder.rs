//! Builds the iterative queries sent to upstream nameservers.

use ferrous_recursor_domain::{DnsQuery, DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType as HickoryRecordType};

pub struct MessageBuilder;

impl MessageBuilder {
    /// Builds a single-question query for `query`.
    ///
    /// - Random ID, matched against the reply by the transport
    /// - RD (Recursion Desired) cleared: every hop is asked iteratively
    /// - Question class is always `IN`
    pub fn build_query(query: &DnsQuery) -> Result<Message, DomainError> {
        let name = Name::from_ascii(&*query.domain).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.domain, e))
        })?;

        let mut question = Query::query(name, to_hickory(query.record_type));
        question.set_query_class(DNSClass::IN);

        let mut message = Message::new();
        message
            .set_id(fastrand::u16(..))
            .set_message_type(MessageType::Query)
            .set_op_code(OpCode::Query)
            .set_recursion_desired(false)
            .add_query(question);

        Ok(message)
    }
}

fn to_hickory(record_type: RecordType) -> HickoryRecordType {
    HickoryRecordType::from(record_type.to_u16())
}
