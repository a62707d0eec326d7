//! Autenticación por JWT
//!
//! Helpers que los handlers usan para extraer y verificar el token Bearer
//! del header Authorization.

use axum::http::HeaderMap;
use uuid::Uuid;

use crate::models::user::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, user_id_from_claims, verify_token, JwtClaims};

/// Extraer y verificar los claims del request
pub fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<JwtClaims, AppError> {
    let auth_header = headers
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = extract_token_from_header(auth_header)?;
    verify_token(token, &state.jwt_config())
}

/// Usuario autenticado (cualquier rol)
pub fn authenticated_user_id(state: &AppState, headers: &HeaderMap) -> Result<Uuid, AppError> {
    let claims = authenticate(state, headers)?;
    user_id_from_claims(&claims)
}

/// Usuario autenticado con rol admin
pub fn require_admin(state: &AppState, headers: &HeaderMap) -> Result<Uuid, AppError> {
    let claims = authenticate(state, headers)?;

    if claims.role != UserRole::Admin.as_str() {
        return Err(AppError::Forbidden("Admin role required".to_string()));
    }

    user_id_from_claims(&claims)
}
