use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::users::entities::UserRole;
use crate::services::SubjectService;

// 懒加载的全局 SubjectService 实例
static SUBJECT_SERVICE: Lazy<SubjectService> = Lazy::new(SubjectService::new_lazy);

// 学生课程下的科目列表（含任课教师与提交状态）
pub async fn list_subjects(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBJECT_SERVICE.list(&req).await
}

// 配置路由
pub fn configure_subjects_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/subjects")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_subjects)),
    );
}
