use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProfileService;
use crate::middlewares::RequireJWT;
use crate::models::users::requests::{StudentProfileUpdate, UpdateProfileRequest};
use crate::models::users::responses::UserResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::password::hash_password;
use crate::utils::validate::validate_password_simple;

pub async fn update_profile(
    service: &ProfileService,
    request: &HttpRequest,
    req: UpdateProfileRequest,
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

    // 空密码视为未提供，保持原哈希不变
    let hashed_password = match normalize_password(req.password) {
        Some(password) => {
            // 验证密码策略
            if let Err(msg) = validate_password_simple(&password) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::UserPasswordInvalid,
                    msg,
                )));
            }

            match hash_password(&password) {
                Ok(hash) => Some(hash),
                Err(e) => {
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            format!("密码哈希失败: {e}"),
                        ),
                    ));
                }
            }
        }
        None => None,
    };

    let storage_update = StudentProfileUpdate {
        first_name: req.first_name,
        last_name: req.last_name,
        address: req.address,
        gender: req.gender,
        password_hash: hashed_password,
        avatar_url: None,
    };

    // 用户记录与学生记录在同一事务中更新
    match storage.update_student_profile(user.id, storage_update).await {
        Ok(Some(user)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(UserResponse { user }, "资料更新成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UserUpdateFailed,
                format!("更新资料失败: {e}"),
            )),
        ),
    }
}

/// 空白密码视为未提供
pub(crate) fn normalize_password(password: Option<String>) -> Option<String> {
    password.filter(|p| !p.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_password_keeps_hash() {
        assert_eq!(normalize_password(None), None);
    }

    #[test]
    fn test_empty_password_keeps_hash() {
        assert_eq!(normalize_password(Some(String::new())), None);
        assert_eq!(normalize_password(Some("   ".to_string())), None);
    }

    #[test]
    fn test_non_empty_password_passes_through() {
        assert_eq!(
            normalize_password(Some("SecurePass123".to_string())),
            Some("SecurePass123".to_string())
        );
    }
}
