use serde::Deserialize;

// 作业提交请求
#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentRequest {
    pub subject_id: i64,
}
