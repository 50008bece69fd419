use dnsmasq_manager_domain::config::ServerConfig;
use std::net::{IpAddr, SocketAddr};

/// Literal IPv4/IPv6 addresses are used as-is; anything else is resolved as a
/// host name and the first address wins.
pub async fn resolve_bind_address(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    if let Ok(ip) = server.bind_address.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, server.port));
    }

    tokio::net::lookup_host((server.bind_address.as_str(), server.port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("bind address {} did not resolve", server.bind_address))
}
