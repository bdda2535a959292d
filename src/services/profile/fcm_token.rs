use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::header::CONTENT_TYPE};

use super::ProfileService;
use crate::middlewares::RequireJWT;
use crate::models::users::requests::FcmTokenRequest;

/// 注册 FCM 设备令牌
///
/// 对外契约：明文 "True"/"False" 表示成功/失败，不是 JSON。
pub async fn register_fcm_token(
    service: &ProfileService,
    request: &HttpRequest,
    req: FcmTokenRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let user = match RequireJWT::extract_user_claims(request) {
        Some(u) => u,
        None => return Ok(plaintext_response("False")),
    };

    match storage.update_fcm_token(user.id, &req.token).await {
        Ok(true) => Ok(plaintext_response("True")),
        Ok(false) => Ok(plaintext_response("False")),
        Err(e) => {
            tracing::error!("Failed to update FCM token for user {}: {}", user.id, e);
            Ok(plaintext_response("False"))
        }
    }
}

fn plaintext_response(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
        .body(body)
}
