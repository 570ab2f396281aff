mod messages;
mod scripted_transport;

#[allow(unused_imports)]
pub use dns_server_mock::{MockBehavior, MockDnsServer};
#[allow(unused_imports)]
pub use messages::*;
#[allow(unused_imports)]
pub use scripted_transport::{Exchange, ScriptedReply, ScriptedTransport};
