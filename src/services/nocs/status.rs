use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NocService;
use crate::middlewares::RequireJWT;
use crate::models::nocs::responses::NocListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_noc_status(
    service: &NocService,
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

    // 只按学生归属过滤，无其他筛选
    match storage.list_nocs(student.id).await {
        Ok(items) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(NocListResponse { items }, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询 NOC 记录失败: {e}"),
            )),
        ),
    }
}
