use ferrous_recursor_infrastructure::dns::server::DnsServerHandler;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// Inbound datagrams are read into a buffer of this size; anything longer
/// is truncated and will fail to decode.
const MAX_QUERY_SIZE: usize = 512;

pub fn bind_dns_socket(bind_addr: &str) -> anyhow::Result<UdpSocket> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = create_udp_socket(socket_addr)?;

    info!(bind_address = %socket_addr, "DNS server listening on UDP");
    Ok(socket)
}

/// Receives queries forever, resolving each one on its own task.
///
/// With a non-zero `max_concurrent_queries` the loop waits for a free permit
/// before spawning; `0` spawns without limit.
pub async fn serve_udp(socket: UdpSocket, handler: DnsServerHandler, max_concurrent_queries: usize) {
    let socket = Arc::new(socket);
    let handler = Arc::new(handler);
    let limiter = (max_concurrent_queries > 0).then(|| Arc::new(Semaphore::new(max_concurrent_queries)));

    info!(max_concurrent_queries, "DNS server ready");

    let mut recv_buf = [0u8; MAX_QUERY_SIZE];

    loop {
        let (n, client) = match socket.recv_from(&mut recv_buf).await {
            Ok(received) => received,
            Err(e) => {
                error!(error = %e, "UDP recv error");
                continue;
            }
        };

        let permit = match &limiter {
            Some(limiter) => match limiter.clone().acquire_owned().await {
                Ok(permit) => Some(permit),
                Err(e) => {
                    error!(error = %e, "Query limiter closed, stopping DNS server");
                    break;
                }
            },
            None => None,
        };

        let query = recv_buf[..n].to_vec();
        let handler = handler.clone();
        let socket = socket.clone();

        tokio::spawn(async move {
            let _permit = permit;
            if let Some(response) = handler.handle_raw_udp(&query, client).await {
                if let Err(e) = socket.send_to(&response, client).await {
                    warn!(client = %client, error = %e, "Failed to send response");
                }
            }
        });
    }
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}
