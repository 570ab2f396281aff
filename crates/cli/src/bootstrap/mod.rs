mod local_records;

pub use local_records::load_local_records;

use ferrous_recursor_domain::{CliOverrides, Config};
use tracing_subscriber::EnvFilter;

pub fn load_config(config_path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, overrides)?;
    config.validate()?;
    Ok(config)
}

/// `RUST_LOG` takes precedence over `logging.level`.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
