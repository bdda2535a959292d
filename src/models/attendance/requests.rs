use serde::Deserialize;

// 按日期区间查询考勤（日期为 "YYYY-MM-DD" 文本，闭区间）
#[derive(Debug, Deserialize)]
pub struct AttendanceRangeRequest {
    pub subject_id: i64,
    pub start_date: String,
    pub end_date: String,
}
