use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::ticket::Ticket;
use crate::utils::errors::AppError;

pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        route_id: Uuid,
        user_id: Uuid,
        vendor_id: Uuid,
        seat_number: i32,
        travel_date: NaiveDate,
        passenger_name: String,
        passenger_phone: String,
        fare: sqlx::types::Decimal,
    ) -> Result<Ticket, AppError> {
        let now = Utc::now();

        // El índice parcial idx_tickets_live_seat convierte una doble reserva
        // concurrente en violación de unicidad; se responde 409
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets (id, route_id, user_id, vendor_id, seat_number, travel_date, passenger_name, passenger_phone, fare, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, 'pending', $10, $10)
            RETURNING *
            "#
        )
        .bind(Uuid::new_v4())
        .bind(route_id)
        .bind(user_id)
        .bind(vendor_id)
        .bind(seat_number)
        .bind(travel_date)
        .bind(passenger_name)
        .bind(passenger_phone)
        .bind(fare)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx_unique(e, "Seat already booked for this route and date"))?;

        Ok(ticket)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>("SELECT * FROM tickets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(ticket)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Ticket>, AppError> {
        let tickets = sqlx::query_as::<_, Ticket>(
            "SELECT * FROM tickets WHERE user_id = $1 ORDER BY created_at DESC"
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    pub async fn find_all(
        &self,
        route_id: Option<Uuid>,
        status: Option<String>,
    ) -> Result<Vec<Ticket>, AppError> {
        let tickets = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT * FROM tickets
            WHERE ($1::uuid IS NULL OR route_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#
        )
        .bind(route_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await?;

        Ok(tickets)
    }

    /// Asientos ocupados para una route/fecha. Los tickets cancelados o
    /// reembolsados liberan su asiento.
    pub async fn booked_seats(
        &self,
        route_id: Uuid,
        travel_date: NaiveDate,
    ) -> Result<Vec<i32>, AppError> {
        let rows: Vec<(i32,)> = sqlx::query_as(
            r#"
            SELECT seat_number FROM tickets
            WHERE route_id = $1 AND travel_date = $2
              AND status NOT IN ('cancelled', 'refunded')
            "#
        )
        .bind(route_id)
        .bind(travel_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(seat,)| seat).collect())
    }

    pub async fn seat_taken(
        &self,
        route_id: Uuid,
        travel_date: NaiveDate,
        seat_number: i32,
    ) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM tickets
                WHERE route_id = $1 AND travel_date = $2 AND seat_number = $3
                  AND status NOT IN ('cancelled', 'refunded')
            )
            "#
        )
        .bind(route_id)
        .bind(travel_date)
        .bind(seat_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(result.0)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Ticket, AppError> {
        // Revivir un ticket cancelado/reembolsado cuyo asiento ya fue
        // re-reservado también viola el índice parcial; eso es 409, no 500
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET status = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(status)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx_unique(e, "Seat already booked for this route and date"))?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        Ok(ticket)
    }

    pub async fn record_payment(
        &self,
        id: Uuid,
        payment_reference: &str,
    ) -> Result<Ticket, AppError> {
        let ticket = sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET status = 'paid', payment_reference = $2, updated_at = $3
            WHERE id = $1
            RETURNING *
            "#
        )
        .bind(id)
        .bind(payment_reference)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_sqlx_unique(e, "Seat already booked for this route and date"))?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        Ok(ticket)
    }
}
