#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_recursor_application::ports::{
    LocalRecordsPort, RecursiveResolver, ResponseCachePort,
};
use ferrous_recursor_domain::{DnsQuery, DomainError};
use hickory_proto::op::Message;
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockResponseCache {
    entries: Mutex<HashMap<String, Message>>,
    stores: AtomicUsize,
    lookups: AtomicUsize,
}

impl MockResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preload(&self, name: &str, message: Message) {
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), message);
    }

    pub fn get(&self, name: &str) -> Option<Message> {
        self.entries.lock().unwrap().get(name).cloned()
    }

    pub fn store_count(&self) -> usize {
        self.stores.load(Ordering::SeqCst)
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ResponseCachePort for MockResponseCache {
    fn lookup(&self, name: &str) -> Option<Message> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().get(name).cloned()
    }

    fn store(&self, name: &str, message: &Message) -> u32 {
        self.stores.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .insert(name.to_string(), message.clone());
        message.answers().first().map(|r| r.ttl()).unwrap_or(60)
    }
}

#[derive(Default)]
pub struct MockLocalRecords {
    records: HashMap<String, Ipv4Addr>,
}

impl MockLocalRecords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, address: &str) -> Self {
        self.records
            .insert(name.to_string(), address.parse().unwrap());
        self
    }
}

impl LocalRecordsPort for MockLocalRecords {
    fn lookup(&self, name: &str) -> Option<Ipv4Addr> {
        self.records.get(name).copied()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}

#[derive(Default)]
pub struct MockRecursiveResolver {
    responses: Mutex<HashMap<String, Result<Message, DomainError>>>,
    calls: Mutex<Vec<DnsQuery>>,
}

impl MockRecursiveResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, message: Message) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(message));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<DnsQuery> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecursiveResolver for MockRecursiveResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<Message, DomainError> {
        self.calls.lock().unwrap().push(query.clone());
        self.responses
            .lock()
            .unwrap()
            .get(&*query.domain)
            .cloned()
            .unwrap_or(Err(DomainError::DeadEnd))
    }
}

pub struct Mocks {
    pub cache: Arc<MockResponseCache>,
    pub local: Arc<MockLocalRecords>,
    pub resolver: Arc<MockRecursiveResolver>,
}

impl Mocks {
    pub fn new(local: MockLocalRecords) -> Self {
        Self {
            cache: Arc::new(MockResponseCache::new()),
            local: Arc::new(local),
            resolver: Arc::new(MockRecursiveResolver::new()),
        }
    }
}
