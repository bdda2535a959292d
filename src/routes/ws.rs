use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Deserialize;

use crate::models::{ApiResponse, ErrorCode};
use crate::services::websocket::WebSocketService;
use crate::utils::jwt::JwtUtils;

/// WebSocket 握手鉴权参数
///
/// 浏览器的 WebSocket API 无法携带 Authorization 头，token 走查询参数。
#[derive(Debug, Deserialize)]
pub struct WsAuthQuery {
    pub token: String,
}

// 作业提交状态推送通道
pub async fn assignment_status_ws(
    req: HttpRequest,
    stream: web::Payload,
    query: web::Query<WsAuthQuery>,
) -> ActixResult<HttpResponse> {
    let claims = match JwtUtils::verify_access_token(&query.token) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::info!("WebSocket token validation failed: {}", e);
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "Invalid or expired token",
            )));
        }
    };

    let user_id = match claims.sub.parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::<()>::error_empty(
                ErrorCode::Unauthorized,
                "Invalid user ID in token",
            )));
        }
    };

    let (response, session, msg_stream) = actix_ws::handle(&req, stream)?;

    actix_web::rt::spawn(WebSocketService::handle_connection(
        user_id, session, msg_stream,
    ));

    Ok(response)
}

// 配置路由
pub fn configure_ws_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/ws/assignment_status",
        web::get().to(assignment_status_ws),
    );
}
