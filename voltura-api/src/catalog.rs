use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::json;
use voltura_catalog::{Category, Vehicle};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cars", get(list_cars))
        .route("/cars/{id}", get(get_car))
        .route("/cars/{id}/options", get(car_options))
}

/// GET /cars
async fn list_cars(State(state): State<AppState>) -> Json<Vec<Vehicle>> {
    Json(state.vehicles.vehicles().to_vec())
}

/// GET /cars/{id}
async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vehicle>, AppError> {
    state
        .vehicles
        .find(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown vehicle: {}", id)))
}

/// GET /cars/{id}/options
/// The configurator sheet for one vehicle: base price plus the option list
/// for every category, in display order.
async fn car_options(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let vehicle = state
        .vehicles
        .find(&id)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown vehicle: {}", id)))?;

    let categories: Vec<serde_json::Value> = Category::ALL
        .iter()
        .map(|&category| {
            json!({
                "category": category.wire_name(),
                "label": category.label(),
                "options": state.options.options(category),
            })
        })
        .collect();

    Ok(Json(json!({
        "carId": vehicle.id,
        "basePrice": vehicle.base_price,
        "categories": categories,
    })))
}
