use serde::Deserialize;

// 请假申请请求（leave_date 为 "YYYY-MM-DD" 文本）
#[derive(Debug, Deserialize)]
pub struct ApplyLeaveRequest {
    pub leave_date: String,
    pub message: String,
}
