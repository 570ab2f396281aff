#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, Query};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::Ipv4Addr;
use std::str::FromStr;

pub fn query_message(id: u16, domain: &str, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(id)
        .set_recursion_desired(true)
        .add_query(Query::query(Name::from_str(domain).unwrap(), record_type));
    message
}

pub fn query_packet(id: u16, domain: &str, record_type: RecordType) -> Vec<u8> {
    query_message(id, domain, record_type).to_bytes().unwrap()
}

pub fn answer_message(id: u16, domain: &str, address: &str, ttl: u32) -> Message {
    let mut message = query_message(id, domain, RecordType::A);
    message
        .set_message_type(MessageType::Response)
        .set_recursion_desired(false)
        .set_authoritative(true);
    let ip: Ipv4Addr = address.parse().unwrap();
    message.add_answer(Record::from_rdata(
        Name::from_str(domain).unwrap(),
        ttl,
        RData::A(A(ip)),
    ));
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
