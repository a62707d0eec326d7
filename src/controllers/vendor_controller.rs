use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::vendor_dto::{ApiResponse, CreateVendorRequest, UpdateVendorRequest, VendorResponse};
use crate::repositories::vendor_repository::VendorRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_email;

pub struct VendorController {
    repository: VendorRepository,
}

impl VendorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VendorRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVendorRequest,
    ) -> Result<ApiResponse<VendorResponse>, AppError> {
        // Validar campos
        if request.name.trim().is_empty() {
            return Err(AppError::ValidationError("Vendor name is required".to_string()));
        }

        validate_email(&request.contact_email)
            .map_err(|_| AppError::ValidationError("Invalid contact email".to_string()))?;

        if request.password.len() < 8 {
            return Err(AppError::ValidationError("Password must be at least 8 characters".to_string()));
        }

        // Verificar que el email no exista
        if self.repository.email_exists(&request.contact_email).await? {
            return Err(AppError::Conflict("Contact email already registered".to_string()));
        }

        // Hash de la contraseña
        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let vendor = self.repository.create(
            request.name,
            request.contact_email,
            request.contact_phone,
            password_hash,
        ).await?;

        Ok(ApiResponse::success_with_message(
            VendorResponse {
                id: vendor.id,
                name: vendor.name,
                contact_email: vendor.contact_email,
                contact_phone: vendor.contact_phone,
                created_at: vendor.created_at,
            },
            "Vendor registered successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VendorResponse, AppError> {
        let vendor = self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

        Ok(VendorResponse {
            id: vendor.id,
            name: vendor.name,
            contact_email: vendor.contact_email,
            contact_phone: vendor.contact_phone,
            created_at: vendor.created_at,
        })
    }

    pub async fn list_all(&self) -> Result<Vec<VendorResponse>, AppError> {
        let vendors = self.repository.find_all().await?;

        let response = vendors.into_iter().map(|v| VendorResponse {
            id: v.id,
            name: v.name,
            contact_email: v.contact_email,
            contact_phone: v.contact_phone,
            created_at: v.created_at,
        }).collect();

        Ok(response)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVendorRequest,
    ) -> Result<ApiResponse<VendorResponse>, AppError> {
        if let Some(ref email) = request.contact_email {
            validate_email(email)
                .map_err(|_| AppError::ValidationError("Invalid contact email".to_string()))?;
        }

        let vendor = self.repository.update(
            id,
            request.name,
            request.contact_email,
            request.contact_phone,
        ).await?;

        Ok(ApiResponse::success_with_message(
            VendorResponse {
                id: vendor.id,
                name: vendor.name,
                contact_email: vendor.contact_email,
                contact_phone: vendor.contact_phone,
                created_at: vendor.created_at,
            },
            "Vendor updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
