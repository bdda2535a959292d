use serde::{Deserialize, Serialize};

// 学生反馈（reply 由教务填写，学生侧只读）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: i64,
    pub student_id: i64,
    pub feedback: String,
    pub reply: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
