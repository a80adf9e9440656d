//! `GET /health`: can the clan store be queried, and how busy is the pool.

use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

const STORE_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    store: StoreHealth,
    pool: PoolHealth,
}

#[derive(Serialize)]
pub struct StoreHealth {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct PoolHealth {
    size: u32,
    idle: usize,
    max: u32,
}

/// 200 when `clan_members` answers within the timeout, 503 otherwise.
///
/// Reading the membership table also catches an unmigrated database.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let probe = sqlx::query("SELECT 1 FROM clan_members LIMIT 1").fetch_optional(&state.db_pool);

    let store = match tokio::time::timeout(STORE_PROBE_TIMEOUT, probe).await {
        Ok(Ok(_)) => StoreHealth {
            status: "ok",
            error: None,
        },
        Ok(Err(e)) => StoreHealth {
            status: "error",
            error: Some(format!("Membership query failed: {}", e)),
        },
        Err(_) => StoreHealth {
            status: "error",
            error: Some(format!("Membership query timed out after {:?}", STORE_PROBE_TIMEOUT)),
        },
    };

    let pool = PoolHealth {
        size: state.db_pool.size(),
        idle: state.db_pool.num_idle(),
        max: state.db_pool.options().get_max_connections(),
    };

    let (code, status) = if store.status == "ok" {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (code, Json(HealthResponse { status, store, pool }))
}
