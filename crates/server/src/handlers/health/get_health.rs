use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

/// Reports the configured endpoints verbatim; no liveness probe is made
/// against the RPC endpoint itself.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub rpc_url: String,
    pub contract_address: String,
}

/// Handler for GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        rpc_url: state.config.chain.rpc_url.clone(),
        contract_address: state.config.chain.contract_address.clone(),
    })
}
