use clap::Parser;
use dnsmasq_manager_api::AppState;
use dnsmasq_manager_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "dnsmasq-manager")]
#[command(version)]
#[command(about = "dnsmasq-manager - HTTP management of dnsmasq static DHCP reservations")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// dnsmasq static DHCP hosts file
    #[arg(long, value_name = "FILE")]
    hosts_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        static_hosts_file: cli.hosts_file.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting dnsmasq-manager v{}", env!("CARGO_PKG_VERSION"));

    bootstrap::check_static_hosts_file(&config);

    let repos = di::Repositories::new(&config);
    let use_cases = di::UseCases::new(&repos);

    let app_state = AppState {
        static_hosts: use_cases.static_hosts(),
    };

    let web_addr = bootstrap::resolve_bind_address(&config.server).await?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
