use serde::{Deserialize, Serialize};

// 学生通知（收件箱条目）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub student_id: i64,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
