use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::AttendanceService;
use crate::middlewares::RequireJWT;
use crate::models::attendance::requests::AttendanceRangeRequest;
use crate::models::attendance::responses::AttendanceRangeResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 日期参数的固定文本格式
const DATE_FORMAT: &str = "%Y-%m-%d";

pub async fn query_attendance_range(
    service: &AttendanceService,
    request: &HttpRequest,
    req: AttendanceRangeRequest,
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

    // 科目必须存在
    let subject = match storage.get_subject_by_id(req.subject_id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "科目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询科目失败: {e}"),
                )),
            );
        }
    };

    // 日期解析失败按类型化错误返回，不吞掉
    let (start, end) = match parse_date_range(&req.start_date, &req.end_date) {
        Ok(range) => range,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::DateParseFailed, msg)));
        }
    };

    match storage
        .list_attendance_in_range(student.id, subject.id, start, end)
        .await
    {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(AttendanceRangeResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询考勤记录失败: {e}"),
            )),
        ),
    }
}

/// 解析 "YYYY-MM-DD" 闭区间端点
pub(crate) fn parse_date_range(
    start: &str,
    end: &str,
) -> Result<(NaiveDate, NaiveDate), String> {
    let start_date = NaiveDate::parse_from_str(start, DATE_FORMAT)
        .map_err(|_| format!("起始日期格式错误: '{start}'，应为 YYYY-MM-DD"))?;
    let end_date = NaiveDate::parse_from_str(end, DATE_FORMAT)
        .map_err(|_| format!("结束日期格式错误: '{end}'，应为 YYYY-MM-DD"))?;

    if end_date < start_date {
        return Err("结束日期不能早于起始日期".to_string());
    }

    Ok((start_date, end_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_range() {
        let (start, end) = parse_date_range("2026-01-01", "2026-01-31").unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!(end, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
    }

    #[test]
    fn test_parse_single_day_range() {
        // 闭区间允许起止同日
        assert!(parse_date_range("2026-03-05", "2026-03-05").is_ok());
    }

    #[test]
    fn test_parse_malformed_date() {
        assert!(parse_date_range("01/01/2026", "2026-01-31").is_err());
        assert!(parse_date_range("2026-01-01", "not-a-date").is_err());
        assert!(parse_date_range("2026-13-01", "2026-13-02").is_err());
    }

    #[test]
    fn test_parse_inverted_range() {
        assert!(parse_date_range("2026-02-01", "2026-01-01").is_err());
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(parse_date_range("2024-02-29", "2024-03-01").is_ok());
        assert!(parse_date_range("2026-02-29", "2026-03-01").is_err());
    }
}
