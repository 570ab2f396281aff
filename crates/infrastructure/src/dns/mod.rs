pub mod cache;
pub mod forwarding;
pub mod local_records;
pub mod resolver;
pub mod server;
pub mod transport;

pub use cache::{Clock, ManualClock, ResponseCache, SystemClock};
pub use local_records::LocalRecordTable;
pub use resolver::IterativeResolver;
pub use server::DnsServerHandler;
pub use transport::{DnsTransport, UdpTransport};
