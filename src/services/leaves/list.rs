use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::LeaveService;
use crate::middlewares::RequireJWT;
use crate::models::leaves::responses::LeaveListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_leave_reports(
    service: &LeaveService,
    request: &HttpRequest,
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

    match storage.list_leave_reports(student.id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(LeaveListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询请假历史失败: {e}"),
            )),
        ),
    }
}
