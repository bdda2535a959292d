use serde::Serialize;

use super::entities::Noc;

// NOC 状态列表响应
#[derive(Debug, Serialize)]
pub struct NocListResponse {
    pub items: Vec<Noc>,
}

// NOC 资格视图的单科行：科目、任课教师、出勤率
//
// 原型中的提交跟踪与教师签章字段为占位数据，行为未定义，
// 在产品明确之前不在此暴露（见 DESIGN.md）。
#[derive(Debug, Clone, Serialize)]
pub struct NocEligibilityRow {
    pub subject_id: i64,
    pub subject: String,
    pub staff: String,
    pub attendance_percent: f64,
}

// NOC 资格视图响应
#[derive(Debug, Serialize)]
pub struct NocEligibilityResponse {
    pub items: Vec<NocEligibilityRow>,
}
