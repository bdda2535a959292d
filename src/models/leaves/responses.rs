use serde::Serialize;

use super::entities::LeaveReport;

// 请假历史响应
#[derive(Debug, Serialize)]
pub struct LeaveListResponse {
    pub items: Vec<LeaveReport>,
}
