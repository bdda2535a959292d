use serde::{Deserialize, Serialize};

use crate::models::ReviewStatus;

// 无异议证明（NOC）申请记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Noc {
    pub id: i64,
    pub student_id: i64,
    pub purpose: String,
    pub status: ReviewStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
