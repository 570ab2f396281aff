#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn name(domain: &str) -> Name {
    Name::from_str(domain).unwrap()
}

pub fn query_message(id: u16, domain: &str) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_recursion_desired(true)
        .add_query(Query::query(name(domain), RecordType::A));
    message
}

pub fn query_packet(id: u16, domain: &str) -> Vec<u8> {
    query_message(id, domain).to_bytes().unwrap()
}

pub fn answer_message(domain: &str, answers: &[(Ipv4Addr, u32)]) -> Message {
    let mut message = query_message(0, domain);
    message
        .set_message_type(MessageType::Response)
        .set_recursion_desired(false);
    for (address, ttl) in answers {
        message.add_answer(Record::from_rdata(name(domain), *ttl, RData::A(A(*address))));
    }
    message
}

pub fn parse(bytes: &[u8]) -> Message {
    Message::from_vec(bytes).unwrap()
}

pub fn a_answers(message: &Message) -> Vec<(Ipv4Addr, u32)> {
    message
        .answers()
        .iter()
        .filter_map(|r| match r.data() {
            Some(RData::A(a)) => Some((a.0, r.ttl())),
            _ => None,
        })
        .collect()
}
