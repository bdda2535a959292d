use serde::{Deserialize, Serialize};

// 作业提交记录（每个 (student, subject) 至多一条，重复提交覆盖）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentSubmission {
    pub id: i64,
    pub student_id: i64,
    pub subject_id: i64,
    pub submitted: bool,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
