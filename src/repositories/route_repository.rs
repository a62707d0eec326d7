use chrono::{NaiveTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::route::Route;
use crate::utils::errors::AppError;

pub struct RouteRepository {
    pool: PgPool,
}

impl RouteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vendor_id: Uuid,
        departure_city: String,
        destination_city: String,
        departure_time: NaiveTime,
        fare: sqlx::types::Decimal,
        capacity: i32,
    ) -> Result<Route, AppError> {
        let route = sqlx::query_as::<_, Route>(
            r#"
            INSERT INTO routes (id, vendor_id, departure_city, destination_city, departure_time, fare, capacity, route_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, 'active', $8)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(vendor_id)
        .bind(departure_city)
        .bind(destination_city)
        .bind(departure_time)
        .bind(fare)
        .bind(capacity)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Route>, AppError> {
        let route = sqlx::query_as::<_, Route>("SELECT * FROM routes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(route)
    }

    pub async fn find_all(&self) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            "SELECT * FROM routes ORDER BY created_at DESC"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    /// Routes activas para la búsqueda del pasajero, con filtros opcionales
    /// de ciudad origen/destino (match case-insensitive)
    pub async fn find_active(
        &self,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<Vec<Route>, AppError> {
        let routes = sqlx::query_as::<_, Route>(
            r#"
            SELECT * FROM routes
            WHERE route_status = 'active'
              AND ($1::text IS NULL OR LOWER(departure_city) = LOWER($1))
              AND ($2::text IS NULL OR LOWER(destination_city) = LOWER($2))
            ORDER BY departure_time ASC
            "#
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(routes)
    }

    pub async fn update(
        &self,
        id: Uuid,
        departure_city: Option<String>,
        destination_city: Option<String>,
        departure_time: Option<NaiveTime>,
        fare: Option<sqlx::types::Decimal>,
        capacity: Option<i32>,
        route_status: Option<String>,
    ) -> Result<Route, AppError> {
        let current = self.find_by_id(id).await?
            .ok_or_else(|| AppError::NotFound("Route not found".to_string()))?;

        let route = sqlx::query_as::<_, Route>(
            r#"
            UPDATE routes
            SET departure_city = $2, destination_city = $3, departure_time = $4, fare = $5, capacity = $6, route_status = $7
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(departure_city.unwrap_or(current.departure_city))
        .bind(destination_city.unwrap_or(current.destination_city))
        .bind(departure_time.unwrap_or(current.departure_time))
        .bind(fare.unwrap_or(current.fare))
        .bind(capacity.unwrap_or(current.capacity))
        .bind(route_status.unwrap_or(current.route_status))
        .fetch_one(&self.pool)
        .await?;

        Ok(route)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM routes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Route not found".to_string()));
        }

        Ok(())
    }
}
