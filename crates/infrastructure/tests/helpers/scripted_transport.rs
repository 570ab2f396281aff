#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_recursor_domain::DomainError;
use ferrous_recursor_infrastructure::dns::transport::DnsTransport;
use hickory_proto::op::{Message, MessageType};
use hickory_proto::rr::rdata::{A, NS};
use hickory_proto::rr::{Name, RData, Record};
use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Mutex;

/// How a scripted upstream answers one question.
#[derive(Clone, Debug)]
pub enum ScriptedReply {
    Answer(Vec<(Ipv4Addr, u32)>),
    /// Referral carrying a glue A record for `ns.glue.test.`.
    Glue(Ipv4Addr),
    /// Referral listing NS names with no glue.
    Delegation(Vec<&'static str>),
    /// No answer, no authority, no additional records.
    Empty,
    Fail(DomainError),
}

#[derive(Clone, Debug)]
pub struct Exchange {
    pub server: SocketAddr,
    pub domain: String,
    pub query_type: u16,
    pub id: u16,
    pub recursion_desired: bool,
}

/// In-memory upstream: replies are looked up by (server, question name),
/// then by server alone, then fall back to a default.
pub struct ScriptedTransport {
    by_question: Mutex<HashMap<(Ipv4Addr, String), ScriptedReply>>,
    by_server: Mutex<HashMap<Ipv4Addr, ScriptedReply>>,
    fallback: Mutex<ScriptedReply>,
    exchanges: Mutex<Vec<Exchange>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            by_question: Mutex::new(HashMap::new()),
            by_server: Mutex::new(HashMap::new()),
            fallback: Mutex::new(ScriptedReply::Empty),
            exchanges: Mutex::new(Vec::new()),
        }
    }

    pub fn on(self, server: &str, domain: &str, reply: ScriptedReply) -> Self {
        self.by_question
            .lock()
            .unwrap()
            .insert((server.parse().unwrap(), domain.to_string()), reply);
        self
    }

    pub fn on_server(self, server: &str, reply: ScriptedReply) -> Self {
        self.by_server
            .lock()
            .unwrap()
            .insert(server.parse().unwrap(), reply);
        self
    }

    pub fn otherwise(self, reply: ScriptedReply) -> Self {
        *self.fallback.lock().unwrap() = reply;
        self
    }

    pub fn exchanges(&self) -> Vec<Exchange> {
        self.exchanges.lock().unwrap().clone()
    }

    pub fn exchange_count(&self) -> usize {
        self.exchanges.lock().unwrap().len()
    }

    /// `(server ip, question name)` of every exchange, in order.
    pub fn path(&self) -> Vec<(String, String)> {
        self.exchanges()
            .into_iter()
            .map(|e| (e.server.ip().to_string(), e.domain))
            .collect()
    }

    fn reply_for(&self, server: Ipv4Addr, domain: &str) -> ScriptedReply {
        if let Some(reply) = self
            .by_question
            .lock()
            .unwrap()
            .get(&(server, domain.to_string()))
        {
            return reply.clone();
        }
        if let Some(reply) = self.by_server.lock().unwrap().get(&server) {
            return reply.clone();
        }
        self.fallback.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn exchange(&self, server: SocketAddr, query: &Message) -> Result<Message, DomainError> {
        let question = query.queries().first().expect("query without question");
        let domain = question.name().to_ascii();

        self.exchanges.lock().unwrap().push(Exchange {
            server,
            domain: domain.clone(),
            query_type: u16::from(question.query_type()),
            id: query.id(),
            recursion_desired: query.recursion_desired(),
        });

        let ip = match server {
            SocketAddr::V4(v4) => *v4.ip(),
            SocketAddr::V6(_) => panic!("scripted transport only speaks IPv4"),
        };

        let mut response = Message::new();
        response
            .set_id(query.id())
            .set_message_type(MessageType::Response)
            .add_query(question.clone());

        match self.reply_for(ip, &domain) {
            ScriptedReply::Answer(answers) => {
                for (address, ttl) in answers {
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        ttl,
                        RData::A(A(address)),
                    ));
                }
            }
            ScriptedReply::Glue(address) => {
                let ns_name = Name::from_str("ns.glue.test.").unwrap();
                response.add_name_server(Record::from_rdata(
                    Name::root(),
                    172800,
                    RData::NS(NS(ns_name.clone())),
                ));
                response.add_additional(Record::from_rdata(ns_name, 172800, RData::A(A(address))));
            }
            ScriptedReply::Delegation(nameservers) => {
                for ns in nameservers {
                    response.add_name_server(Record::from_rdata(
                        Name::root(),
                        172800,
                        RData::NS(NS(Name::from_str(ns).unwrap())),
                    ));
                }
            }
            ScriptedReply::Empty => {}
            ScriptedReply::Fail(error) => return Err(error),
        }

        Ok(response)
    }

    fn protocol_name(&self) -> &'static str {
        "SCRIPTED"
    }
}
