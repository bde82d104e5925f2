use clap::Parser;
use ferrous_doh_domain::{ConfigOverrides, UpstreamStrategy};
use std::net::{IpAddr, SocketAddr};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - DNS-over-HTTPS forwarding proxy with EDNS Client Subnet")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Upstream selection strategy (race, sequential)
    #[arg(long)]
    strategy: Option<UpstreamStrategy>,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            port: self.port,
            bind_address: self.bind.clone(),
            log_level: self.log_level.clone(),
            strategy: self.strategy,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env = bootstrap::EnvOverrides::from_env();
    let overrides = bootstrap::layer_overrides(env.overrides.clone(), cli.overrides());
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;

    bootstrap::init_logging(&config.logging);
    env.report();

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));

    let state = di::build_app_state(&config)?;

    let bind_ip: IpAddr = config.server.bind_address.parse()?;
    let web_addr = SocketAddr::new(bind_ip, config.server.port);

    server::start_web_server(web_addr, state).await?;

    info!("Server shutdown complete");
    Ok(())
}
