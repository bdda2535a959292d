use serde::Serialize;

use super::entities::Notification;

// 通知列表响应
#[derive(Debug, Serialize)]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
}
