use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
use crate::dto::vendor_dto::ApiResponse;
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{validate_email, validate_phone};

pub struct AuthController {
    repository: UserRepository,
    jwt_config: JwtConfig,
}

impl AuthController {
    pub fn new(pool: PgPool, jwt_config: JwtConfig) -> Self {
        Self {
            repository: UserRepository::new(pool),
            jwt_config,
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        // Validar campos
        if request.full_name.trim().is_empty() {
            return Err(AppError::ValidationError("Full name is required".to_string()));
        }

        validate_email(&request.email)
            .map_err(|_| AppError::ValidationError("Invalid email".to_string()))?;

        if let Some(ref phone) = request.phone {
            validate_phone(phone)
                .map_err(|_| AppError::ValidationError("Invalid phone number".to_string()))?;
        }

        if request.password.len() < 8 {
            return Err(AppError::ValidationError("Password must be at least 8 characters".to_string()));
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let user = self.repository.create(
            request.full_name,
            request.email,
            request.phone,
            password_hash,
            UserRole::Passenger.as_str(),
        ).await?;

        Ok(ApiResponse::success_with_message(
            user_to_response(user),
            "Account created successfully".to_string(),
        ))
    }

    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        // Buscar usuario por email
        let user = self.repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        // Verificar contraseña
        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        // Generar JWT token
        let token = generate_token(user.id, &user.role, &self.jwt_config)?;

        Ok(LoginResponse::success(token, user.id.to_string(), user.role))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user_to_response(user))
    }
}

fn user_to_response(user: crate::models::user::User) -> UserResponse {
    UserResponse {
        id: user.id,
        full_name: user.full_name,
        email: user.email,
        phone: user.phone,
        role: user.role,
        created_at: user.created_at,
    }
}
