use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::ticket_controller::TicketController;
use crate::dto::ticket_dto::{
    CreateTicketRequest, TicketFilterQuery, TicketResponse, UpdateTicketStatusRequest,
};
use crate::dto::vendor_dto::ApiResponse;
use crate::middleware::auth::{authenticate, authenticated_user_id, require_admin};
use crate::utils::jwt::user_id_from_claims;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_ticket_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ticket))
        .route("/:id", get(get_ticket))
        .route("/:id/status", patch(update_ticket_status))
}

/// Router de supervisión admin, anidado bajo /api/admin/tickets
pub fn create_admin_ticket_router() -> Router<AppState> {
    Router::new().route("/", get(list_all_tickets))
}

async fn create_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateTicketRequest>,
) -> Result<Json<ApiResponse<TicketResponse>>, AppError> {
    let user_id = authenticated_user_id(&state, &headers)?;
    let controller = TicketController::new(state.pool.clone());
    let response = controller.create(user_id, request).await?;
    Ok(Json(response))
}

async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<Json<TicketResponse>, AppError> {
    let claims = authenticate(&state, &headers)?;
    let user_id = user_id_from_claims(&claims)?;
    let controller = TicketController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;

    // Un pasajero solo puede ver sus propios tickets
    if claims.role != "admin" && response.user_id != user_id {
        return Err(AppError::Forbidden("You do not have access to this ticket".to_string()));
    }

    Ok(Json(response))
}

async fn update_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    Json(request): Json<UpdateTicketStatusRequest>,
) -> Result<Json<ApiResponse<TicketResponse>>, AppError> {
    // El estado lo fija el cliente; basta con estar autenticado
    authenticated_user_id(&state, &headers)?;
    let controller = TicketController::new(state.pool.clone());
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}

async fn list_all_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketFilterQuery>,
    headers: HeaderMap,
) -> Result<Json<Vec<TicketResponse>>, AppError> {
    require_admin(&state, &headers)?;
    let controller = TicketController::new(state.pool.clone());
    let response = controller.list_all(query.route_id, query.status).await?;
    Ok(Json(response))
}
