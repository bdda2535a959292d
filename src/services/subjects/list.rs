use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubjectService;
use crate::middlewares::RequireJWT;
use crate::models::assignments::entities::AssignmentSubmission;
use crate::models::subjects::entities::Subject;
use crate::models::subjects::responses::{SubjectListItem, SubjectListResponse};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_subjects(
    service: &SubjectService,
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

    let submissions = match storage.list_assignment_submissions(student.id).await {
        Ok(submissions) => submissions,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询提交记录失败: {e}"),
                )),
            );
        }
    };

    let items = merge_submission_state(subjects, submissions);

    Ok(HttpResponse::Ok()
        .json(ApiResponse::success(SubjectListResponse { items }, "查询成功")))
}

/// 把学生的提交记录并入科目列表
pub(crate) fn merge_submission_state(
    subjects: Vec<(Subject, String)>,
    submissions: Vec<AssignmentSubmission>,
) -> Vec<SubjectListItem> {
    let submission_map: HashMap<i64, AssignmentSubmission> = submissions
        .into_iter()
        .map(|s| (s.subject_id, s))
        .collect();

    subjects
        .into_iter()
        .map(|(subject, staff_name)| {
            let submission = submission_map.get(&subject.id);
            SubjectListItem {
                id: subject.id,
                name: subject.name,
                staff_name,
                submitted: submission.map(|s| s.submitted).unwrap_or(false),
                submitted_at: submission.map(|s| s.submitted_at),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(id: i64, name: &str) -> (Subject, String) {
        (
            Subject {
                id,
                name: name.to_string(),
                course_id: 1,
                staff_id: 10,
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
            "Alice Smith".to_string(),
        )
    }

    fn submission(subject_id: i64) -> AssignmentSubmission {
        AssignmentSubmission {
            id: 1,
            student_id: 7,
            subject_id,
            submitted: true,
            submitted_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_merge_marks_submitted_subjects() {
        let items = merge_submission_state(
            vec![subject(1, "Math"), subject(2, "Physics")],
            vec![submission(2)],
        );

        assert_eq!(items.len(), 2);
        assert!(!items[0].submitted);
        assert!(items[0].submitted_at.is_none());
        assert!(items[1].submitted);
        assert!(items[1].submitted_at.is_some());
    }

    #[test]
    fn test_merge_without_submissions() {
        let items = merge_submission_state(vec![subject(1, "Math")], vec![]);

        assert_eq!(items.len(), 1);
        assert!(!items[0].submitted);
    }
}
