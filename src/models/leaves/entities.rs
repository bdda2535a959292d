use serde::{Deserialize, Serialize};

use crate::models::ReviewStatus;

// 请假申请
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveReport {
    pub id: i64,
    pub student_id: i64,
    pub leave_date: chrono::NaiveDate,
    pub message: String,
    pub status: ReviewStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
