use serde::Serialize;

// 提交端点的线格式是固定对外契约：
// 成功为裸 {"message"}，失败为裸 {"error"}，不套统一响应壳。

// 提交成功响应
#[derive(Debug, Serialize)]
pub struct SubmitAssignmentResponse {
    pub message: String,
}

// 提交失败响应
#[derive(Debug, Serialize)]
pub struct AssignmentErrorResponse {
    pub error: String,
}
