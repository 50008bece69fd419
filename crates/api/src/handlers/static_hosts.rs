use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use dnsmasq_manager_domain::{DomainError, StaticDhcpHost};
use tracing::{debug, info};

use crate::{
    dto::{HostKey, HostQuery, StaticHostRequest, StaticHostResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/static/hosts", get(get_all_hosts))
        .route(
            "/static/host",
            get(get_host)
                .post(create_host)
                .put(update_host)
                .delete(delete_host),
        )
}

async fn get_all_hosts(
    State(state): State<AppState>,
) -> Result<Json<Vec<StaticHostResponse>>, ApiError> {
    let hosts = state.static_hosts.get.get_all().await?;
    debug!(count = hosts.len(), "Static hosts retrieved successfully");

    Ok(Json(
        hosts.into_iter().map(StaticHostResponse::from_host).collect(),
    ))
}

async fn get_host(
    State(state): State<AppState>,
    Query(query): Query<HostQuery>,
) -> Result<Json<StaticHostResponse>, ApiError> {
    let key = query.into_key().map_err(ApiError::BadRequest)?;

    let found = match key {
        HostKey::Mac(mac) => state.static_hosts.get.get_by_mac(&mac).await?,
        HostKey::Ip(ip) => state.static_hosts.get.get_by_ip(&ip).await?,
    };

    found
        .map(|host| Json(StaticHostResponse::from_host(host)))
        .ok_or_else(|| ApiError::NotFound(not_found_message(key)))
}

async fn create_host(
    State(state): State<AppState>,
    Json(req): Json<StaticHostRequest>,
) -> Result<(StatusCode, Json<StaticHostResponse>), ApiError> {
    let host = parse_request(req)?;
    state.static_hosts.create.execute(&host).await?;

    info!(host_name = %host.host_name, "Static host created via API");
    Ok((StatusCode::CREATED, Json(StaticHostResponse::from_host(host))))
}

async fn update_host(
    State(state): State<AppState>,
    Json(req): Json<StaticHostRequest>,
) -> Result<(StatusCode, Json<StaticHostResponse>), ApiError> {
    let host = parse_request(req)?;
    state.static_hosts.update.execute(&host).await?;

    info!(host_name = %host.host_name, "Static host updated via API");
    Ok((StatusCode::CREATED, Json(StaticHostResponse::from_host(host))))
}

async fn delete_host(
    State(state): State<AppState>,
    Query(query): Query<HostQuery>,
) -> Result<Response, ApiError> {
    let key = query.into_key().map_err(ApiError::BadRequest)?;

    let removed = match key {
        HostKey::Mac(mac) => state.static_hosts.delete.by_mac(&mac).await?,
        HostKey::Ip(ip) => state.static_hosts.delete.by_ip(&ip).await?,
    };

    Ok(match removed {
        Some(host) => Json(StaticHostResponse::from_host(host)).into_response(),
        None => {
            debug!(key = ?key, "No static host matched delete request");
            StatusCode::NO_CONTENT.into_response()
        }
    })
}

fn parse_request(req: StaticHostRequest) -> Result<StaticDhcpHost, ApiError> {
    req.into_host()
        .map_err(|errors| ApiError::Domain(DomainError::InvalidHost(errors)))
}

fn not_found_message(key: HostKey) -> String {
    match key {
        HostKey::Mac(mac) => format!("Static host with MAC address {} not found", mac),
        HostKey::Ip(ip) => format!("Static host with IP address {} not found", ip),
    }
}
