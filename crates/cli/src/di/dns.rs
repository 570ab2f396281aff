use ferrous_recursor_application::use_cases::HandleDnsQueryUseCase;
use ferrous_recursor_domain::Config;
use ferrous_recursor_infrastructure::dns::{
    IterativeResolver, LocalRecordTable, ResponseCache, UdpTransport,
};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, local_records: Arc<LocalRecordTable>) -> anyhow::Result<Self> {
        info!("Initializing DNS services");

        let transport = Arc::new(UdpTransport::new(
            config.resolver.query_timeout(),
            config.resolver.upstream_buffer_size,
        ));

        let resolver = Arc::new(
            IterativeResolver::new(transport, config.resolver.root_hint_addr()?)
                .with_max_hops(config.resolver.max_hops)
                .with_max_referral_depth(config.resolver.max_referral_depth),
        );

        let cache = Arc::new(ResponseCache::new(config.cache.default_ttl));

        info!(
            root_hint = %config.resolver.root_hint,
            max_hops = config.resolver.max_hops,
            timeout_ms = config.resolver.query_timeout_ms,
            default_ttl = config.cache.default_ttl,
            "Resolver and cache configured"
        );

        let handler_use_case = Arc::new(
            HandleDnsQueryUseCase::new(cache, local_records, resolver)
                .with_local_ttl(config.local_records.ttl),
        );

        Ok(Self { handler_use_case })
    }
}
