use serde::Deserialize;

// 提交反馈请求
#[derive(Debug, Deserialize)]
pub struct SubmitFeedbackRequest {
    pub feedback: String,
}
