//! Sends one A query to a running resolver and prints what comes back.

use anyhow::Context;
use clap::Parser;
use hickory_proto::op::{Message, Query};
use hickory_proto::rr::{Name, RData, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;

const PROBE_QUERY_ID: u16 = 1234;

#[derive(Parser)]
#[command(name = "ferrous-recursor-probe")]
#[command(version)]
#[command(about = "Query a Ferrous Recursor instance for an A record")]
struct Args {
    /// Domain to look up
    #[arg(default_value = "amazon.com.")]
    domain: String,

    /// Resolver address
    #[arg(short, long, default_value = "127.0.0.1:8083")]
    server: SocketAddr,

    /// Seconds to wait for the reply
    #[arg(short, long, default_value_t = 5)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let name = Name::from_ascii(&args.domain)
        .with_context(|| format!("invalid domain name: {}", args.domain))?;

    let mut query = Message::new();
    query
        .set_id(PROBE_QUERY_ID)
        .set_recursion_desired(true)
        .add_query(Query::query(name, RecordType::A));
    let packet = query.to_bytes().context("failed to encode query")?;

    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .context("failed to bind local socket")?;
    socket
        .send_to(&packet, args.server)
        .await
        .with_context(|| format!("failed to send query to {}", args.server))?;

    let mut buf = [0u8; 512];
    let (len, _) = tokio::time::timeout(Duration::from_secs(args.timeout), socket.recv_from(&mut buf))
        .await
        .with_context(|| format!("no reply from {} within {}s", args.server, args.timeout))?
        .context("failed to read reply")?;

    let response = Message::from_vec(&buf[..len]).context("reply is not a valid DNS message")?;

    let mut printed = false;
    for record in response.answers() {
        if let Some(RData::A(a)) = record.data() {
            println!("[i] IP Address: {} (TTL: {})", a.0, record.ttl());
            printed = true;
        }
    }

    if !printed {
        println!("Server replied but there were no answers.");
    }

    Ok(())
}
