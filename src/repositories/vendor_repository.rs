use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vendor::Vendor;
use crate::utils::errors::AppError;

pub struct VendorRepository {
    pool: PgPool,
}

impl VendorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        contact_email: String,
        contact_phone: Option<String>,
        password_hash: String,
    ) -> Result<Vendor, AppError> {
        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            INSERT INTO vendors (id, name, contact_email, contact_phone, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(contact_email)
        .bind(contact_phone)
        .bind(password_hash)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vendor)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Vendor>, AppError> {
        let vendor = sqlx::query_as::<_, Vendor>("SELECT * FROM vendors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vendor)
    }

    pub async fn find_all(&self) -> Result<Vec<Vendor>, AppError> {
        let vendors = sqlx::query_as::<_, Vendor>(
            "SELECT * FROM vendors ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vendors)
    }

    pub async fn email_exists(&self, contact_email: &str) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM vendors WHERE contact_email = $1)"
        )
        .bind(contact_email)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        contact_email: Option<String>,
        contact_phone: Option<String>,
    ) -> Result<Vendor, AppError> {
        let current = self.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".to_string()))?;

        let vendor = sqlx::query_as::<_, Vendor>(
            r#"
            UPDATE vendors
            SET name = $2, contact_email = $3, contact_phone = $4
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(contact_email.unwrap_or(current.contact_email))
        .bind(contact_phone.or(current.contact_phone))
        .fetch_one(&self.pool)
        .await?;

        Ok(vendor)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM vendors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Vendor not found".to_string()));
        }

        Ok(())
    }
}
