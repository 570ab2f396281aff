pub mod dns;
pub mod signals;

pub use dns::{bind_dns_socket, serve_udp};
pub use signals::{spawn_local_records_reloader, wait_for_shutdown};
