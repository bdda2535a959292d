use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::leaves::requests::ApplyLeaveRequest;
use crate::models::users::entities::UserRole;
use crate::services::LeaveService;

// 懒加载的全局 LeaveService 实例
static LEAVE_SERVICE: Lazy<LeaveService> = Lazy::new(LeaveService::new_lazy);

// 请假历史
pub async fn list_leaves(req: HttpRequest) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.list(&req).await
}

// 提交请假申请
pub async fn apply_leave(
    req: HttpRequest,
    body: web::Json<ApplyLeaveRequest>,
) -> ActixResult<HttpResponse> {
    LEAVE_SERVICE.apply(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_leaves_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/leaves")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_leaves))
            .route("", web::post().to(apply_leave)),
    );
}
