use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::users::entities::UserRole;
use crate::services::NocService;

// 懒加载的全局 NocService 实例
static NOC_SERVICE: Lazy<NocService> = Lazy::new(NocService::new_lazy);

// NOC 申请状态列表
pub async fn list_noc_status(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOC_SERVICE.list_status(&req).await
}

// 逐科目 NOC 资格（出勤率）
pub async fn get_eligibility(req: HttpRequest) -> ActixResult<HttpResponse> {
    NOC_SERVICE.eligibility(&req).await
}

// 配置路由
pub fn configure_nocs_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/nocs")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_noc_status))
            .route("/eligibility", web::get().to(get_eligibility)),
    );
}
