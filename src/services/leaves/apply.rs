use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::NaiveDate;

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::leaves::requests::ApplyLeaveRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_submission_text;

pub async fn apply_leave(
    service: &LeaveService,
    request: &HttpRequest,
    req: ApplyLeaveRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

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

    // 校验失败不落库
    if let Err(msg) = validate_submission_text(&req.message) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("请假理由无效: {msg}"),
        )));
    }

    let leave_date = match NaiveDate::parse_from_str(&req.leave_date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::DateParseFailed,
                format!("请假日期格式错误: '{}'，应为 YYYY-MM-DD", req.leave_date),
            )));
        }
    };

    // student_id 由服务端绑定，客户端无法伪造归属
    match storage
        .create_leave_report(student.id, leave_date, req.message)
        .await
    {
        Ok(report) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(report, "请假申请已提交，等待审核"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交请假申请失败: {e}"),
            )),
        ),
    }
}
