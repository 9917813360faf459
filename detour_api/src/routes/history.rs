use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::history::RouteRecord;
use crate::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRouteBody {
    pub from: String,
    pub to: String,
    pub path: Vec<String>,
    pub algorithm: String,
    pub total_distance: u64,
    pub total_traffic: u64,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub history: Vec<RouteRecord>,
}

pub async fn add_route_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AddRouteBody>,
) -> Json<StatusResponse> {
    let record = RouteRecord {
        timestamp: Timestamp::now(),
        from: body.from,
        to: body.to,
        path: body.path,
        algorithm: body.algorithm,
        total_distance: body.total_distance,
        total_traffic: body.total_traffic,
    };

    state.history.write().append(record);

    Json(StatusResponse {
        success: true,
        message: String::from("route added to history"),
    })
}

pub async fn list_history_handler(State(state): State<Arc<AppState>>) -> Json<HistoryResponse> {
    Json(HistoryResponse {
        history: state.history.read().records().to_vec(),
    })
}

pub async fn clear_history_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    state.history.write().clear();

    Json(StatusResponse {
        success: true,
        message: String::from("history cleared"),
    })
}
