use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

// Response de notificación
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
