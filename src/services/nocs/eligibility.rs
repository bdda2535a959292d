use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::NocService;
use crate::middlewares::RequireJWT;
use crate::models::nocs::responses::{NocEligibilityResponse, NocEligibilityRow};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::attendance::summary::percent_present;

pub async fn get_noc_eligibility(
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

    let subjects = match storage.list_subjects_with_staff(student.course_id).await {
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

    let mut items = Vec::with_capacity(subjects.len());
    for (subject, staff_name) in subjects {
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

        items.push(NocEligibilityRow {
            subject_id: subject.id,
            subject: subject.name,
            staff: staff_name,
            attendance_percent: percent_present(present, absent),
        });
    }

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success(NocEligibilityResponse { items }, "查询成功")))
}
