use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::attendance::requests::AttendanceRangeRequest;
use crate::models::users::entities::UserRole;
use crate::services::AttendanceService;

// 懒加载的全局 AttendanceService 实例
static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

// 考勤汇总（学生主页数据）
pub async fn get_summary(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.get_summary(&req).await
}

// 按日期区间查询考勤
pub async fn query_range(
    req: HttpRequest,
    body: web::Json<AttendanceRangeRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.query_range(&req, body.into_inner()).await
}

// 配置路由
pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student/attendance")
            .wrap(RequireRole::new(&UserRole::Student))
            .wrap(middlewares::RequireJWT)
            .route("/summary", web::get().to(get_summary))
            .route("/range", web::post().to(query_range)),
    );
}
