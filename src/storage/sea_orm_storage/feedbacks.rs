//! 反馈存储操作

use super::SeaOrmStorage;
use crate::entity::feedbacks::{ActiveModel, Column, Entity as Feedbacks};
use crate::errors::{Result, SMSystemError};
use crate::models::feedbacks::entities::Feedback;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建反馈（student_id 由服务端绑定）
    pub async fn create_feedback_impl(&self, student_id: i64, feedback: String) -> Result<Feedback> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            feedback: Set(feedback),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("创建反馈失败: {e}")))?;

        Ok(result.into_feedback())
    }

    /// 列出学生的反馈历史（按创建时间倒序）
    pub async fn list_feedbacks_impl(&self, student_id: i64) -> Result<Vec<Feedback>> {
        let results = Feedbacks::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询反馈历史失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_feedback()).collect())
    }
}
