use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_submission_text;

pub async fn submit_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    req: SubmitFeedbackRequest,
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
    if let Err(msg) = validate_submission_text(&req.feedback) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            format!("反馈内容无效: {msg}"),
        )));
    }

    // student_id 由服务端绑定，客户端无法伪造归属
    match storage.create_feedback(student.id, req.feedback).await {
        Ok(feedback) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(feedback, "反馈已提交，等待处理")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("提交反馈失败: {e}"),
            )),
        ),
    }
}
