use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::models::users::entities::UserRole;
use crate::services::FeedbackService;

// 懒加载的全局 FeedbackService 实例
static FEEDBACK_SERVICE: Lazy<FeedbackService> = Lazy::new(FeedbackService::new_lazy);

// 反馈历史
pub async fn list_feedbacks(req: HttpRequest) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.list(&req).await
}

// 提交反馈
pub async fn submit_feedback(
    req: HttpRequest,
    body: web::Json<SubmitFeedbackRequest>,
) -> ActixResult<HttpResponse> {
    FEEDBACK_SERVICE.submit(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_feedbacks_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/feedback")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_feedbacks))
            .route("", web::post().to(submit_feedback)),
    );
}
