use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Restaurant;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRestaurantRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub cuisine: Option<String>,
    pub rating: Option<serde_json::Number>,
}

#[derive(Debug, Deserialize)]
pub struct ApproveRestaurantRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApprovedListResponse {
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Serialize)]
pub struct PendingListResponse {
    pub pending_approval: Vec<Restaurant>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn add_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<SubmitRestaurantRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    request
        .validate()
        .map_err(|_| AppError::ValidationError("Name and cuisine are required".to_string()))?;

    let restaurant = Restaurant::new(
        request.name.unwrap_or_default(),
        request.cuisine.unwrap_or_default(),
        request.rating,
    );

    tracing::info!(
        name = %restaurant.name,
        cuisine = %restaurant.cuisine,
        "Restaurant submitted for approval"
    );
    state.store.submit(restaurant).await;

    Ok(Json(MessageResponse {
        message: "Restaurant submitted for approval.".to_string(),
    }))
}

#[tracing::instrument(skip(state, payload))]
pub async fn approve_restaurant(
    State(state): State<AppState>,
    payload: Result<Json<ApproveRestaurantRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload?;
    let not_found =
        || AppError::NotFound(anyhow::anyhow!("Restaurant not found in pending approvals."));

    let name = request.name.ok_or_else(not_found)?;
    let approved = state.store.approve(&name).await.ok_or_else(not_found)?;

    tracing::info!(name = %approved.name, "Restaurant approved");

    Ok(Json(MessageResponse {
        message: format!("Restaurant '{}' approved and added to the map.", approved.name),
    }))
}

pub async fn list_restaurants(State(state): State<AppState>) -> Json<ApprovedListResponse> {
    Json(ApprovedListResponse {
        restaurants: state.store.list_approved().await,
    })
}

pub async fn list_pending(State(state): State<AppState>) -> Json<PendingListResponse> {
    Json(PendingListResponse {
        pending_approval: state.store.list_pending().await,
    })
}
