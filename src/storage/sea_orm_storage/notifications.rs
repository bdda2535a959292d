//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{Column, Entity as Notifications};
use crate::errors::{Result, SMSystemError};
use crate::models::notifications::entities::Notification;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出学生的通知（按创建时间倒序）
    pub async fn list_notifications_impl(&self, student_id: i64) -> Result<Vec<Notification>> {
        let results = Notifications::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询通知列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_notification()).collect())
    }
}
