use hickory_proto::op::Message;
use hickory_proto::rr::{Name, RData};
use std::net::Ipv4Addr;
use tracing::debug;

/// What an upstream reply tells the iterative resolver to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamReply {
    /// The reply carries at least one answer record.
    Answered,
    /// Glue: the first A record of the additional section.
    Referral(Ipv4Addr),
    /// NS names from the authority section, in order, with no usable glue.
    Delegation(Vec<Name>),
    DeadEnd,
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn classify(message: &Message) -> UpstreamReply {
        if !message.answers().is_empty() {
            return UpstreamReply::Answered;
        }

        if let Some(glue) = Self::first_glue_address(message) {
            return UpstreamReply::Referral(glue);
        }

        let nameservers = Self::delegated_nameservers(message);
        if !nameservers.is_empty() {
            debug!(nameservers = nameservers.len(), "Referral without glue");
            return UpstreamReply::Delegation(nameservers);
        }

        UpstreamReply::DeadEnd
    }

    /// Glue is taken as-is; no bailiwick check.
    pub fn first_glue_address(message: &Message) -> Option<Ipv4Addr> {
        message
            .additionals()
            .iter()
            .find_map(|record| match record.data() {
                Some(RData::A(a)) => Some(a.0),
                _ => None,
            })
    }

    pub fn delegated_nameservers(message: &Message) -> Vec<Name> {
        message
            .name_servers()
            .iter()
            .filter_map(|record| match record.data() {
                Some(RData::NS(ns)) => Some(ns.0.clone()),
                _ => None,
            })
            .collect()
    }

    /// A addresses of the answer section, in order.
    pub fn answer_addresses(message: &Message) -> Vec<Ipv4Addr> {
        message
            .answers()
            .iter()
            .filter_map(|record| match record.data() {
                Some(RData::A(a)) => Some(a.0),
                _ => None,
            })
            .collect()
    }
}
