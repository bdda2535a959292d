use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::assignments::requests::SubmitAssignmentRequest;
use crate::models::assignments::responses::AssignmentErrorResponse;
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

// 提交作业
pub async fn submit_assignment(
    req: HttpRequest,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.submit(&req, body.into_inner()).await
}

// 非 POST 方法按对外契约返回 400 {"error"}
pub async fn invalid_method() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::BadRequest().json(AssignmentErrorResponse {
        error: "Invalid request method".to_string(),
    }))
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/assignments")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/submit")
                    .route(web::post().to(submit_assignment))
                    .route(web::route().to(invalid_method)),
            ),
    );
}
