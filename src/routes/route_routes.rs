//! CRUD admin de routes, anidado bajo /api/admin/routes

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{CreateRouteRequest, RouteResponse, UpdateRouteRequest};
use crate::dto::vendor_dto::ApiResponse;
use crate::middleware::auth::require_admin;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:id", get(get_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
}

async fn create_route(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_routes(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<RouteResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<RouteResponse>, AppError> {
    require_admin(&state, &headers)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateRouteRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, AppError> {
    require_admin(&state, &headers)?;
    let controller = RouteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Route deleted successfully"
    })))
}
