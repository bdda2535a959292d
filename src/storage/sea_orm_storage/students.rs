//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::students::{Column, Entity as Students};
use crate::errors::{Result, SMSystemError};
use crate::models::students::entities::Student;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

impl SeaOrmStorage {
    /// 通过用户 ID 获取学生记录
    pub async fn get_student_by_user_id_impl(&self, user_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询学生记录失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }
}
