use serde::Serialize;

// 学生视角的科目条目（含任课教师与本人提交状态）
#[derive(Debug, Clone, Serialize)]
pub struct SubjectListItem {
    pub id: i64,
    pub name: String,
    pub staff_name: String,
    pub submitted: bool,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 科目列表响应
#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<SubjectListItem>,
}
