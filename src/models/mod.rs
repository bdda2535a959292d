//! 业务数据模型
//!
//! 按领域拆分为 requests / responses / entities，与数据库实体解耦。

pub mod common;

pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod feedbacks;
pub mod leaves;
pub mod nocs;
pub mod notifications;
pub mod students;
pub mod subjects;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;
pub use common::status::ReviewStatus;

/// 程序启动时间（用于运行时长统计）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
