use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::users::entities::UserRole;
use crate::models::users::requests::{FcmTokenRequest, UpdateProfileRequest};
use crate::services::ProfileService;

// 懒加载的全局 ProfileService 实例
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

// 查看个人资料
pub async fn get_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.get_profile(&req).await
}

// 更新个人资料
pub async fn update_profile(
    req: HttpRequest,
    body: web::Json<UpdateProfileRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.update_profile(&req, body.into_inner()).await
}

// 上传头像
pub async fn upload_avatar(req: HttpRequest, payload: Multipart) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.upload_avatar(&req, payload).await
}

// 注册 FCM 设备令牌
pub async fn register_fcm_token(
    req: HttpRequest,
    body: web::Json<FcmTokenRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.register_fcm_token(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_profile_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/profile")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_profile))
            .route("", web::put().to(update_profile))
            .route("/avatar", web::post().to(upload_avatar)),
    );

    cfg.service(
        web::scope("/api/v1/student/fcm-token")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(register_fcm_token)),
    );
}
