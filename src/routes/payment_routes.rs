//! Endpoint del simulador de pagos mobile money

use axum::{extract::State, http::HeaderMap, routing::post, Json, Router};
use tracing::error;

use crate::dto::payment_dto::{PaymentRequest, PaymentResponse};
use crate::middleware::auth::authenticated_user_id;
use crate::repositories::notification_repository::NotificationRepository;
use crate::repositories::ticket_repository::TicketRepository;
use crate::services::payment_service::PaymentService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_payment_router() -> Router<AppState> {
    Router::new().route("/", post(process_payment))
}

async fn process_payment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, AppError> {
    authenticated_user_id(&state, &headers)?;

    let service = PaymentService::new(state.config.payment_delay_ms);
    let response = service.process(&request.phone, request.amount).await?;

    // Con un ticket asociado, un pago exitoso lo marca como pagado.
    // El pago ya ocurrió: si la contabilización falla se loggea y se
    // devuelve igual la respuesta con la referencia, para conciliar después.
    if let (Some(ticket_id), Some(reference)) =
        (request.ticket_id, response.transaction_reference.as_deref())
    {
        let tickets = TicketRepository::new(state.pool.clone());
        match tickets.record_payment(ticket_id, reference).await {
            Ok(ticket) => {
                // La notificación va al dueño del ticket, no al pagador
                if let Err(e) = NotificationRepository::new(state.pool.clone())
                    .create(
                        ticket.user_id,
                        "Payment received".to_string(),
                        format!(
                            "Payment {} recorded for seat {} on {}.",
                            reference, ticket.seat_number, ticket.travel_date,
                        ),
                    )
                    .await
                {
                    error!("❌ Error creando notificación de pago {}: {}", reference, e);
                }
            }
            Err(e) => {
                error!(
                    "❌ Pago {} recibido pero no registrado en ticket {}: {}",
                    reference, ticket_id, e
                );
            }
        }
    }

    Ok(Json(response))
}
