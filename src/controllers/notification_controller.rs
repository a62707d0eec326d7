use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::notification_dto::NotificationResponse;
use crate::models::notification::Notification;
use crate::repositories::notification_repository::NotificationRepository;
use crate::utils::errors::AppError;

pub struct NotificationController {
    repository: NotificationRepository,
}

impl NotificationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: NotificationRepository::new(pool),
        }
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<NotificationResponse>, AppError> {
        let notifications = self.repository.find_by_user(user_id).await?;
        Ok(notifications.into_iter().map(to_response).collect())
    }

    pub async fn mark_read(
        &self,
        id: Uuid,
        user_id: Uuid,
    ) -> Result<NotificationResponse, AppError> {
        let notification = self.repository.mark_read(id, user_id).await?;
        Ok(to_response(notification))
    }

    pub async fn mark_all_read(&self, user_id: Uuid) -> Result<u64, AppError> {
        self.repository.mark_all_read(user_id).await
    }
}

fn to_response(notification: Notification) -> NotificationResponse {
    NotificationResponse {
        id: notification.id,
        user_id: notification.user_id,
        title: notification.title,
        body: notification.body,
        is_read: notification.is_read,
        created_at: notification.created_at,
    }
}
