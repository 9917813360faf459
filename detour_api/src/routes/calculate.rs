use axum::Json;
use detour_core::engine::calculate_route;
use detour_core::routing::route_request::RouteRequest;
use detour_core::routing::route_response::RouteResponse;

use crate::error::ApiError;

/// Unsolvable requests still come back 200 with `success = false`; only a
/// body that does not describe a request at all is a 400.
pub async fn calculate_route_handler(
    Json(body): Json<serde_json::Value>,
) -> Result<Json<RouteResponse>, ApiError> {
    let request: RouteRequest =
        serde_json::from_value(body).map_err(|error| ApiError::BadRequest(error.to_string()))?;

    Ok(Json(calculate_route(&request)))
}
