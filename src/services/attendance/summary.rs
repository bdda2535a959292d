use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::responses::{AttendanceSummaryResponse, SubjectAttendanceRow};
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_attendance_summary(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户
    let user = match RequireJWT::extract_user_claims(request) {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    // 定位学生记录
    let student = match storage.get_student_by_user_id(user.id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "学生记录不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询学生记录失败: {e}"),
                )),
            );
        }
    };

    // 逐科目统计出勤
    let subjects = match storage.list_subjects_by_course(student.course_id).await {
        Ok(subjects) => subjects,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目列表失败: {e}"),
                )),
            );
        }
    };

    let mut rows = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let (present, absent) = match storage
            .count_attendance_status(student.id, subject.id)
            .await
        {
            Ok(counts) => counts,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("统计考勤失败: {e}"),
                    )),
                );
            }
        };

        rows.push(SubjectAttendanceRow {
            subject_id: subject.id,
            subject: subject.name,
            total_present: present,
            total_absent: absent,
            percent_present: percent_present(present, absent),
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(build_summary(rows), "查询成功")))
}

/// 零分母安全的出勤率，保留两位小数
///
/// 没有任何考勤记录时出勤率定义为 0，不产生除零。
pub(crate) fn percent_present(present: i64, absent: i64) -> f64 {
    let total = present + absent;
    if total > 0 {
        (present as f64 / total as f64 * 100.0 * 100.0).round() / 100.0
    } else {
        0.0
    }
}

/// 由逐科目行组装汇总响应：图表序列 + 全课程出勤/缺勤占比
pub(crate) fn build_summary(rows: Vec<SubjectAttendanceRow>) -> AttendanceSummaryResponse {
    let data_name: Vec<String> = rows.iter().map(|r| r.subject.clone()).collect();
    let data_present: Vec<i64> = rows.iter().map(|r| r.total_present).collect();
    let data_absent: Vec<i64> = rows.iter().map(|r| r.total_absent).collect();

    let total_present: i64 = data_present.iter().sum();
    let total_absent: i64 = data_absent.iter().sum();

    AttendanceSummaryResponse {
        subjects: rows,
        data_name,
        data_present,
        data_absent,
        percent_present: percent_present(total_present, total_absent),
        percent_absent: percent_present(total_absent, total_present),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(subject: &str, present: i64, absent: i64) -> SubjectAttendanceRow {
        SubjectAttendanceRow {
            subject_id: 1,
            subject: subject.to_string(),
            total_present: present,
            total_absent: absent,
            percent_present: percent_present(present, absent),
        }
    }

    #[test]
    fn test_percent_zero_records() {
        // 无记录时出勤率为 0，而不是除零
        assert_eq!(percent_present(0, 0), 0.0);
    }

    #[test]
    fn test_percent_math_example() {
        // 8 次出勤 2 次缺勤 -> 80.0
        assert_eq!(percent_present(8, 2), 80.0);
    }

    #[test]
    fn test_percent_rounded_to_two_decimals() {
        assert_eq!(percent_present(1, 2), 33.33);
        assert_eq!(percent_present(2, 1), 66.67);
    }

    #[test]
    fn test_percent_all_present() {
        assert_eq!(percent_present(5, 0), 100.0);
        assert_eq!(percent_present(0, 5), 0.0);
    }

    #[test]
    fn test_build_summary_chart_sequences() {
        let summary = build_summary(vec![row("Math", 8, 2), row("Physics", 3, 1)]);

        assert_eq!(summary.data_name, vec!["Math", "Physics"]);
        assert_eq!(summary.data_present, vec![8, 3]);
        assert_eq!(summary.data_absent, vec![2, 1]);
        assert_eq!(summary.subjects[0].percent_present, 80.0);
    }

    #[test]
    fn test_build_summary_course_wide_percent() {
        // 全课程：出勤 11 / 总计 14
        let summary = build_summary(vec![row("Math", 8, 2), row("Physics", 3, 1)]);

        assert_eq!(summary.percent_present, 78.57);
        assert_eq!(summary.percent_absent, 21.43);
    }

    #[test]
    fn test_build_summary_empty_course() {
        let summary = build_summary(vec![]);

        assert!(summary.subjects.is_empty());
        assert_eq!(summary.percent_present, 0.0);
        assert_eq!(summary.percent_absent, 0.0);
    }
}
