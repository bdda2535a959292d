//! 请假申请实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "leave_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub leave_date: Date,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_leave_report(self) -> crate::models::leaves::entities::LeaveReport {
        use crate::models::ReviewStatus;
        use crate::models::leaves::entities::LeaveReport;
        use chrono::{DateTime, Utc};

        LeaveReport {
            id: self.id,
            student_id: self.student_id,
            leave_date: self.leave_date,
            message: self.message,
            status: self
                .status
                .parse::<ReviewStatus>()
                .unwrap_or(ReviewStatus::Pending),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
