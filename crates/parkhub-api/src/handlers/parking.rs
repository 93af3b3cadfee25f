//! Parking lot handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use parkhub_core::types::ParkedCar;

use crate::dto::request::{
    ClearSlotRequest, ExpandLotRequest, InitializeLotRequest, ParkCarRequest,
};
use crate::dto::response::{
    AllocatedSlotResponse, FreedSlotResponse, SlotNumberResponse, SummaryResponse,
    TotalSlotResponse,
};
use crate::error::ApiError;
use crate::extractors::ApiJson;
use crate::state::AppState;

/// POST /parking/parking_lot
pub async fn initialize_lot(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<InitializeLotRequest>,
) -> Result<(StatusCode, Json<TotalSlotResponse>), ApiError> {
    let total_slot = state.parking_service.initialize(req.count()).await?;
    Ok((StatusCode::CREATED, Json(TotalSlotResponse { total_slot })))
}

/// PATCH /parking/parking_lot
pub async fn expand_lot(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ExpandLotRequest>,
) -> Result<Json<TotalSlotResponse>, ApiError> {
    let total_slot = state.parking_service.expand(req.count()).await?;
    Ok(Json(TotalSlotResponse { total_slot }))
}

/// POST /parking/park
pub async fn park_car(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ParkCarRequest>,
) -> Result<(StatusCode, Json<AllocatedSlotResponse>), ApiError> {
    let allocated_slot_number = state.parking_service.park(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(AllocatedSlotResponse {
            allocated_slot_number,
        }),
    ))
}

/// GET /parking/registration_numbers/{color}
pub async fn registration_numbers_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let registrations = state
        .parking_service
        .registration_numbers_by_color(&color)
        .await?;
    Ok(Json(registrations))
}

/// GET /parking/slot_numbers/{color}
pub async fn slot_numbers_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let slots = state.parking_service.slot_numbers_by_color(&color).await?;
    Ok(Json(slots))
}

/// GET /parking/slots/{registration_number}
pub async fn slot_by_registration(
    State(state): State<AppState>,
    Path(registration_number): Path<String>,
) -> Result<Json<SlotNumberResponse>, ApiError> {
    let slot_number = state
        .parking_service
        .slot_by_registration(&registration_number)
        .await?;
    Ok(Json(SlotNumberResponse { slot_number }))
}

/// POST /parking/clear
pub async fn clear_slot(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ClearSlotRequest>,
) -> Result<Json<FreedSlotResponse>, ApiError> {
    let freed_slot_number = state
        .parking_service
        .clear(req.slot_number, req.car_registration_no)
        .await?;
    Ok(Json(FreedSlotResponse { freed_slot_number }))
}

/// GET /parking/status
pub async fn status(State(state): State<AppState>) -> Result<Json<Vec<ParkedCar>>, ApiError> {
    let parked = state.parking_service.status().await?;
    Ok(Json(parked))
}

/// GET /parking/summary
pub async fn summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    Json(state.parking_service.summary().await.into())
}
