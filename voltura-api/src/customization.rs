use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::json;
use voltura_catalog::{total_price, StoredCustomization};

use crate::{error::AppError, middleware::auth::CustomerClaims, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/save-customization", post(save_customization))
        .route("/get-customization", get(get_customization))
        .layer(axum::middleware::from_fn_with_state(
            state,
            crate::middleware::auth::require_user,
        ))
}

/// POST /save-customization
/// Persist the caller's customization, overwriting the previous one.
/// The body is deserialized into the explicit schema, so a malformed
/// payload is rejected before it reaches the store.
async fn save_customization(
    State(state): State<AppState>,
    Extension(claims): Extension<CustomerClaims>,
    Json(customization): Json<StoredCustomization>,
) -> Result<Json<serde_json::Value>, AppError> {
    // The client computes its own total; cross-check against the catalog so
    // drift shows up in the logs. Unknown car ids cannot be verified.
    if let Some(vehicle) = state.vehicles.find(&customization.car_id) {
        let expected = total_price(vehicle, &state.options, &customization.config);
        if expected != customization.total_price {
            tracing::warn!(
                "Client total {} differs from computed total {} for {} (user {})",
                customization.total_price,
                expected,
                customization.car_id,
                claims.sub,
            );
        }
    }

    let payload = serde_json::to_value(&customization)
        .map_err(|e| AppError::InternalServerError(format!("Serialization failed: {}", e)))?;

    state
        .redis
        .set_customization(&claims.sub, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Save customization error: {}", e);
            AppError::InternalServerError("Failed to save customization".to_string())
        })?;

    Ok(Json(json!({ "message": "Customization saved successfully" })))
}

/// GET /get-customization
/// Return the caller's saved customization, or null when nothing has been
/// saved yet.
async fn get_customization(
    State(state): State<AppState>,
    Extension(claims): Extension<CustomerClaims>,
) -> Result<Json<serde_json::Value>, AppError> {
    let customization = state
        .redis
        .get_customization(&claims.sub)
        .await
        .map_err(|e| {
            tracing::error!("Get customization error: {}", e);
            AppError::InternalServerError("Failed to get customization".to_string())
        })?;

    Ok(Json(json!({
        "customization": customization.unwrap_or(serde_json::Value::Null)
    })))
}
