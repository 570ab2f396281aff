use clap::Parser;
use ferrous_recursor_domain::CliOverrides;
use ferrous_recursor_infrastructure::dns::server::DnsServerHandler;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-recursor")]
#[command(version)]
#[command(about = "Ferrous Recursor - caching recursive DNS resolver with local overrides")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Local records JSON file
    #[arg(long, value_name = "FILE")]
    local_records: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        local_records_path: cli.local_records.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Recursor v{}", env!("CARGO_PKG_VERSION"));

    let local_records = bootstrap::load_local_records(&config.local_records);
    let dns_services = di::DnsServices::new(&config, local_records.clone())?;

    server::spawn_local_records_reloader(
        local_records,
        PathBuf::from(&config.local_records.path),
    )?;

    // Bind before spawning so a taken port fails startup.
    let socket = server::bind_dns_socket(&config.server.listen_address())?;
    let dns_handler = DnsServerHandler::new(dns_services.handler_use_case);
    let max_concurrent_queries = config.server.max_concurrent_queries;

    let dns_server = tokio::spawn(async move {
        server::serve_udp(socket, dns_handler, max_concurrent_queries).await;
    });

    tokio::select! {
        _ = server::wait_for_shutdown() => {}
        result = dns_server => {
            if let Err(e) = result {
                error!(error = %e, "DNS server task failed");
            }
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
