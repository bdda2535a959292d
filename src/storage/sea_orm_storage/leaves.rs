//! 请假存储操作

use super::SeaOrmStorage;
use crate::entity::leave_reports::{ActiveModel, Column, Entity as LeaveReports};
use crate::errors::{Result, SMSystemError};
use crate::models::ReviewStatus;
use crate::models::leaves::entities::LeaveReport;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建请假申请（状态恒为 pending，student_id 由服务端绑定）
    pub async fn create_leave_report_impl(
        &self,
        student_id: i64,
        leave_date: NaiveDate,
        message: String,
    ) -> Result<LeaveReport> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            leave_date: Set(leave_date),
            message: Set(message),
            status: Set(ReviewStatus::Pending.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建请假申请失败: {e}")))?;

        Ok(result.into_leave_report())
    }

    /// 列出学生的请假历史（按创建时间倒序）
    pub async fn list_leave_reports_impl(&self, student_id: i64) -> Result<Vec<LeaveReport>> {
        let results = LeaveReports::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询请假历史失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_leave_report()).collect())
    }
}
