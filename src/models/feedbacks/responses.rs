use serde::Serialize;

use super::entities::Feedback;

// 反馈历史响应
#[derive(Debug, Serialize)]
pub struct FeedbackListResponse {
    pub items: Vec<Feedback>,
}
