//! NOC 存储操作

use super::SeaOrmStorage;
use crate::entity::nocs::{Column, Entity as Nocs};
use crate::errors::{Result, SMSystemError};
use crate::models::nocs::entities::Noc;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出学生的 NOC 记录（按创建时间倒序）
    pub async fn list_nocs_impl(&self, student_id: i64) -> Result<Vec<Noc>> {
        let results = Nocs::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询 NOC 记录失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_noc()).collect())
    }
}
