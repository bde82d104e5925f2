use ferrous_doh_api::{AppState, ClientIpPolicy};
use ferrous_doh_application::ports::UpstreamResolver;
use ferrous_doh_application::use_cases::{ProxyDnsQueryUseCase, ResolveJsonQueryUseCase};
use ferrous_doh_domain::{Config, MessageRewriter};
use ferrous_doh_infrastructure::dns::PoolManager;
use std::sync::Arc;
use tracing::info;

pub fn build_app_state(config: &Config) -> anyhow::Result<AppState> {
    let pool: Arc<dyn UpstreamResolver> = Arc::new(PoolManager::from_config(config)?);

    let rewriter =
        MessageRewriter::new().with_legacy_flags_rewrite(config.ecs.legacy_flags_rewrite);
    let proxy_dns = ProxyDnsQueryUseCase::new(Arc::clone(&pool))
        .with_ecs(config.ecs.enabled, config.ecs.prefixes())
        .with_rewriter(rewriter);

    info!(
        ecs_enabled = config.ecs.enabled,
        ipv4_prefix = config.ecs.prefixes().ipv4,
        ipv6_prefix = config.ecs.prefixes().ipv6,
        legacy_flags_rewrite = config.ecs.legacy_flags_rewrite,
        "ECS injection configured"
    );

    Ok(AppState {
        proxy_dns: Arc::new(proxy_dns),
        resolve_json: Arc::new(ResolveJsonQueryUseCase::new(pool)),
        client_ip: Arc::new(ClientIpPolicy::from_config(&config.server)),
    })
}
