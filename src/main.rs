mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Tiyende - Bus Ticket Booking API");
    info!("===================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Migraciones pendientes
    if let Err(e) = database::connection::run_migrations(&pool).await {
        error!("❌ Error ejecutando migraciones: {}", e);
        return Err(anyhow::anyhow!("Error de migraciones: {}", e));
    }
    info!("✅ Migraciones aplicadas");

    // Crear router de la API
    let config = EnvironmentConfig::default();
    let port = config.port;
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/user", routes::user_routes::create_user_router())
        .nest("/api/tickets", routes::ticket_routes::create_ticket_router())
        .nest("/api/payments", routes::payment_routes::create_payment_router())
        .nest("/api/admin/routes", routes::route_routes::create_route_router())
        .nest("/api/admin/vendors", routes::vendor_routes::create_vendor_router())
        .nest("/api/admin/tickets", routes::ticket_routes::create_admin_ticket_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("0.0.0.0:{}", port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔐 Auth:");
    info!("   POST /api/auth/register - Registrar pasajero");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/auth/me - Usuario actual");
    info!("🧳 Pasajero:");
    info!("   GET  /api/user/routes - Buscar routes activas");
    info!("   GET  /api/user/routes/:id - Detalle de route");
    info!("   GET  /api/user/routes/:id/seats?travelDate= - Seat map");
    info!("   GET  /api/user/tickets - Mis tickets");
    info!("   GET  /api/user/notifications - Mis notificaciones");
    info!("   PATCH /api/user/notifications/:id/read - Marcar leída");
    info!("   PATCH /api/user/notifications/read-all - Marcar todas leídas");
    info!("🎫 Tickets:");
    info!("   POST /api/tickets - Reservar asiento");
    info!("   GET  /api/tickets/:id - E-ticket");
    info!("   PATCH /api/tickets/:id/status - Cambiar estado");
    info!("💰 Pagos:");
    info!("   POST /api/payments - Simulador mobile money");
    info!("🏢 Admin:");
    info!("   CRUD /api/admin/routes - Gestión de routes");
    info!("   CRUD /api/admin/vendors - Gestión de vendors");
    info!("   GET  /api/admin/tickets - Supervisión de tickets");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "service": "tiyende-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let app = Router::new().route("/health", get(health_check));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["service"], "tiyende-backend");
        assert_eq!(body["status"], "healthy");
    }
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
