//! 考勤存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::attendance::{Column as AttendanceColumn, Entity as Attendance};
use crate::entity::attendance_reports::{Column, Entity as AttendanceReports};
use crate::errors::{Result, SMSystemError};
use crate::models::attendance::responses::AttendanceRangeEntry;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

impl SeaOrmStorage {
    /// 统计学生在某科目的出勤 (present, absent)
    pub async fn count_attendance_status_impl(
        &self,
        student_id: i64,
        subject_id: i64,
    ) -> Result<(i64, i64)> {
        // 先取该科目的全部场次 ID
        let attendance_ids: Vec<i64> = Attendance::find()
            .filter(AttendanceColumn::SubjectId.eq(subject_id))
            .select_only()
            .column(AttendanceColumn::Id)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤场次失败: {e}")))?;

        if attendance_ids.is_empty() {
            return Ok((0, 0));
        }

        let present = AttendanceReports::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceId.is_in(attendance_ids.clone()))
            .filter(Column::Status.eq(true))
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计出勤记录失败: {e}")))?;

        let absent = AttendanceReports::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceId.is_in(attendance_ids))
            .filter(Column::Status.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("统计缺勤记录失败: {e}")))?;

        Ok((present as i64, absent as i64))
    }

    /// 查询学生在某科目 [start, end] 闭区间内的考勤记录，按日期升序
    pub async fn list_attendance_in_range_impl(
        &self,
        student_id: i64,
        subject_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<AttendanceRangeEntry>> {
        // 区间内的场次
        let sessions = Attendance::find()
            .filter(AttendanceColumn::SubjectId.eq(subject_id))
            .filter(AttendanceColumn::Date.between(start, end))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤场次失败: {e}")))?;

        if sessions.is_empty() {
            return Ok(vec![]);
        }

        let date_map: HashMap<i64, NaiveDate> =
            sessions.iter().map(|s| (s.id, s.date)).collect();
        let attendance_ids: Vec<i64> = sessions.iter().map(|s| s.id).collect();

        // 该学生对这些场次的记录
        let reports = AttendanceReports::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::AttendanceId.is_in(attendance_ids))
            .all(&self.db)
            .await
            .map_err(|e| SMSystemError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let mut entries: Vec<(NaiveDate, bool)> = reports
            .into_iter()
            .filter_map(|r| date_map.get(&r.attendance_id).map(|d| (*d, r.status)))
            .collect();
        entries.sort_by_key(|(date, _)| *date);

        Ok(entries
            .into_iter()
            .map(|(date, status)| AttendanceRangeEntry {
                date: date.format("%Y-%m-%d").to_string(),
                status,
            })
            .collect())
    }
}
