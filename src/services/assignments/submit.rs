use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::assignments::responses::{AssignmentErrorResponse, SubmitAssignmentResponse};
use crate::services::websocket;

/// 首次提交的响应消息
pub const MSG_SUBMITTED: &str = "Assignment submitted successfully!";
/// 重复提交（覆盖）的响应消息
pub const MSG_UPDATED: &str = "Assignment submission updated!";

pub async fn submit_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(u) => u,
        None => {
            return Ok(HttpResponse::Unauthorized().json(AssignmentErrorResponse {
                error: "无法获取用户信息".to_string(),
            }));
        }
    };

    let student = match storage.get_student_by_user_id(user.id).await {
        Ok(Some(s)) => s,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(AssignmentErrorResponse {
                error: "学生记录不存在".to_string(),
            }));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(AssignmentErrorResponse {
                error: format!("查询学生记录失败: {e}"),
            }));
        }
    };

    // 科目必须存在
    match storage.get_subject_by_id(req.subject_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(AssignmentErrorResponse {
                error: "科目不存在".to_string(),
            }));
        }
        Err(e) => {
            return Ok(HttpResponse::InternalServerError().json(AssignmentErrorResponse {
                error: format!("查询科目失败: {e}"),
            }));
        }
    }

    // (student, subject) 唯一键 upsert：重复提交覆盖而不是新增
    match storage
        .upsert_assignment_submission(student.id, req.subject_id)
        .await
    {
        Ok((submission, created)) => {
            // 向提交者推送实时状态
            websocket::push_assignment_status(user.id, &submission, created);

            Ok(HttpResponse::Ok().json(SubmitAssignmentResponse {
                message: outcome_message(created).to_string(),
            }))
        }
        Err(e) => Ok(HttpResponse::InternalServerError().json(AssignmentErrorResponse {
            error: format!("提交作业失败: {e}"),
        })),
    }
}

/// 新建与覆盖返回不同的提示语
pub(crate) fn outcome_message(created: bool) -> &'static str {
    if created { MSG_SUBMITTED } else { MSG_UPDATED }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_submission_message() {
        assert_eq!(outcome_message(true), "Assignment submitted successfully!");
    }

    #[test]
    fn test_resubmission_message() {
        assert_eq!(outcome_message(false), "Assignment submission updated!");
    }

    #[test]
    fn test_messages_are_distinct() {
        assert_ne!(outcome_message(true), outcome_message(false));
    }
}
