//! CRUD admin de vendors, anidado bajo /api/admin/vendors

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vendor_controller::VendorController;
use crate::dto::vendor_dto::{ApiResponse, CreateVendorRequest, UpdateVendorRequest, VendorResponse};
use crate::middleware::auth::require_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vendor_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vendor))
        .route("/", get(list_vendors))
        .route("/:id", get(get_vendor))
        .route("/:id", put(update_vendor))
        .route("/:id", delete(delete_vendor))
}

async fn create_vendor(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateVendorRequest>,
) -> Result<Json<ApiResponse<VendorResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = VendorController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vendors(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<VendorResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = VendorController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<VendorResponse>, AppError> {
    require_admin(&state, &headers)?;
    let controller = VendorController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateVendorRequest>,
) -> Result<Json<ApiResponse<VendorResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = VendorController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vendor(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;
    let controller = VendorController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vendor deleted successfully"
    })))
}
