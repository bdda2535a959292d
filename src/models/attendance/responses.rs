use serde::Serialize;

// 单科考勤汇总
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectAttendanceRow {
    pub subject_id: i64,
    pub subject: String,
    pub total_present: i64,
    pub total_absent: i64,
    pub percent_present: f64,
}

// 考勤汇总响应：逐科目表格 + 图表序列 + 全课程占比
#[derive(Debug, Serialize)]
pub struct AttendanceSummaryResponse {
    pub subjects: Vec<SubjectAttendanceRow>,
    pub data_name: Vec<String>,
    pub data_present: Vec<i64>,
    pub data_absent: Vec<i64>,
    pub percent_present: f64,
    pub percent_absent: f64,
}

// 日期区间查询的单条记录
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceRangeEntry {
    pub date: String, // "YYYY-MM-DD"
    pub status: bool,
}

// 日期区间查询响应
#[derive(Debug, Serialize)]
pub struct AttendanceRangeResponse {
    pub items: Vec<AttendanceRangeEntry>,
}
