//! 科目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::subjects::{Column, Entity as Subjects};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{Result, SMSystemError};
use crate::models::subjects::entities::Subject;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 通过 ID 获取科目
    pub async fn get_subject_by_id_impl(&self, subject_id: i64) -> Result<Option<Subject>> {
        let result = Subjects::find_by_id(subject_id)
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询科目失败: {e}")))?;

        Ok(result.map(|m| m.into_subject()))
    }

    /// 列出课程下的科目
    pub async fn list_subjects_by_course_impl(&self, course_id: i64) -> Result<Vec<Subject>> {
        let results = Subjects::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询科目列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_subject()).collect())
    }

    /// 列出课程下的科目及任课教师姓名
    pub async fn list_subjects_with_staff_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<(Subject, String)>> {
        let subjects = self.list_subjects_by_course_impl(course_id).await?;

        // 批量查询任课教师
        let staff_ids: Vec<i64> = subjects
            .iter()
            .map(|s| s.staff_id)
            .collect::<std::collections::HashSet<_>>()
            .into_iter()
            .collect();

        let staff = Users::find()
            .filter(UserColumn::Id.is_in(staff_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询教师信息失败: {e}")))?;

        let staff_map: HashMap<i64, String> = staff
            .into_iter()
            .map(|u| (u.id, format!("{} {}", u.first_name, u.last_name)))
            .collect();

        Ok(subjects
            .into_iter()
            .map(|s| {
                let staff_name = staff_map
                    .get(&s.staff_id)
                    .cloned()
                    .unwrap_or_else(|| "未知教师".to_string());
                (s, staff_name)
            })
            .collect())
    }
}
