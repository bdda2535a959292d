//! 作业提交存储操作

use super::SeaOrmStorage;
use crate::entity::assignment_submissions::{ActiveModel, Column, Entity as AssignmentSubmissions};
use crate::errors::{Result, SMSystemError};
use crate::models::assignments::entities::AssignmentSubmission;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 按 (student_id, subject_id) 唯一键 upsert 提交记录
    ///
    /// 已存在则覆盖 submitted 与 submitted_at，不存在则新建。
    /// 并发提交由该唯一键在存储层兜底互斥。
    /// 返回 (记录, 是否新建)。
    pub async fn upsert_assignment_submission_impl(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<(AssignmentSubmission, bool)> {
        let now = chrono::Utc::now().timestamp();

        let existing = AssignmentSubmissions::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::SubjectId.eq(subject_id))
            .one(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询提交记录失败: {e}")))?;

        match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                active.submitted = Set(true);
                active.submitted_at = Set(now);

                let updated = active.update(&self.db).await.map_err(|e| {
                    SMSystemError::database_operation(format!("更新提交记录失败: {e}"))
                })?;

                Ok((updated.into_submission(), false))
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(student_id),
                    subject_id: Set(subject_id),
                    submitted: Set(true),
                    submitted_at: Set(now),
                    ..Default::default()
                };

                let inserted = model.insert(&self.db).await.map_err(|e| {
                    SMSystemError::database_operation(format!("创建提交记录失败: {e}"))
                })?;

                Ok((inserted.into_submission(), true))
            }
        }
    }

    /// 列出学生的作业提交记录
    pub async fn list_assignment_submissions_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        let results = AssignmentSubmissions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询提交记录失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_submission()).collect())
    }
}
