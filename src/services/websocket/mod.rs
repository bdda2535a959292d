/*!
 * WebSocket 作业提交状态服务
 *
 * 此服务用于建立 WebSocket 连接，向学生实时推送作业提交状态变更。
 *
 * ## 使用方法
 *
 * 客户端通过以下 URL 连接：
 * ```text
 * ws://host/ws/assignment_status?token=<access_token>
 * ```
 *
 * ## 消息格式（暂定契约，产品定稿前可能调整）
 *
 * ### 服务端推送
 * ```json
 * {
 *     "type": "assignment_status",
 *     "payload": {
 *         "subject_id": 5,
 *         "submitted": true,
 *         "submitted_at": "2026-01-24T12:00:00Z",
 *         "created": false
 *     }
 * }
 * ```
 *
 * ### 心跳
 * ```json
 * {"type": "ping"}
 * {"type": "pong"}
 * ```
 */

use actix_ws::Message;
use dashmap::DashMap;
use futures_util::StreamExt;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::models::assignments::entities::AssignmentSubmission;

/// 全局连接管理器
static CONNECTION_MANAGER: Lazy<ConnectionManager> = Lazy::new(ConnectionManager::new);

/// WebSocket 消息类型
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// 作业提交状态变更
    AssignmentStatus { payload: AssignmentStatusPayload },
    /// 心跳请求
    Ping,
    /// 心跳响应
    Pong,
    /// 连接成功
    Connected { user_id: i64 },
    /// 错误消息
    Error { message: String },
}

/// 作业提交状态载荷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentStatusPayload {
    pub subject_id: i64,
    pub submitted: bool,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    /// true 表示首次提交，false 表示覆盖更新
    pub created: bool,
}

/// 连接管理器
pub struct ConnectionManager {
    /// 用户 ID -> 广播发送器
    connections: DashMap<i64, broadcast::Sender<WsMessage>>,
}

impl ConnectionManager {
    fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// 获取全局实例
    pub fn get() -> &'static Self {
        &CONNECTION_MANAGER
    }

    /// 注册用户连接
    pub fn register(&self, user_id: i64) -> broadcast::Receiver<WsMessage> {
        let entry = self.connections.entry(user_id).or_insert_with(|| {
            let (tx, _) = broadcast::channel(100);
            tx
        });
        entry.subscribe()
    }

    /// 移除用户连接
    pub fn unregister(&self, user_id: i64) {
        // 只有当没有订阅者时才移除
        if let Some(entry) = self.connections.get(&user_id)
            && entry.receiver_count() == 0
        {
            self.connections.remove(&user_id);
        }
    }

    /// 向指定用户发送消息
    pub fn send_to_user(&self, user_id: i64, message: WsMessage) -> bool {
        if let Some(sender) = self.connections.get(&user_id) {
            sender.send(message).is_ok()
        } else {
            false
        }
    }

    /// 推送作业提交状态
    pub fn push_assignment_status(&self, user_id: i64, payload: AssignmentStatusPayload) {
        let message = WsMessage::AssignmentStatus { payload };
        self.send_to_user(user_id, message);
    }

    /// 获取在线用户数
    pub fn online_count(&self) -> usize {
        self.connections
            .iter()
            .filter(|entry| entry.receiver_count() > 0)
            .count()
    }

    /// 检查用户是否在线
    pub fn is_online(&self, user_id: i64) -> bool {
        self.connections
            .get(&user_id)
            .is_some_and(|s| s.receiver_count() > 0)
    }
}

/// WebSocket 服务
pub struct WebSocketService;

impl WebSocketService {
    /// 处理 WebSocket 连接
    pub async fn handle_connection(
        user_id: i64,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) {
        info!("WebSocket connected for user: {}", user_id);

        // 注册连接
        let mut rx = ConnectionManager::get().register(user_id);

        // 发送连接成功消息
        let connected_msg = WsMessage::Connected { user_id };
        if let Ok(json) = serde_json::to_string(&connected_msg) {
            let _ = session.text(json).await;
        }

        // 心跳间隔
        let heartbeat_interval = std::time::Duration::from_secs(30);
        let mut heartbeat = tokio::time::interval(heartbeat_interval);

        loop {
            tokio::select! {
                // 处理来自客户端的消息
                msg = stream.next() => {
                    match msg {
                        Some(Ok(Message::Text(text))) => {
                            if let Ok(ws_msg) = serde_json::from_str::<WsMessage>(&text) {
                                match ws_msg {
                                    WsMessage::Ping => {
                                        let pong = serde_json::to_string(&WsMessage::Pong)
                                            .unwrap_or_else(|_| r#"{"type":"pong"}"#.to_string());
                                        if session.text(pong).await.is_err() {
                                            break;
                                        }
                                    }
                                    _ => {
                                        debug!("Received message from user {}: {:?}", user_id, ws_msg);
                                    }
                                }
                            }
                        }
                        Some(Ok(Message::Ping(data))) => {
                            if session.pong(&data).await.is_err() {
                                break;
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            info!("WebSocket closed for user: {}", user_id);
                            break;
                        }
                        Some(Err(e)) => {
                            warn!("WebSocket error for user {}: {:?}", user_id, e);
                            break;
                        }
                        _ => {}
                    }
                }

                // 处理来自服务器的推送消息
                msg = rx.recv() => {
                    match msg {
                        Ok(ws_msg) => {
                            if let Ok(json) = serde_json::to_string(&ws_msg)
                                && session.text(json).await.is_err() {
                                    break;
                                }
                        }
                        Err(broadcast::error::RecvError::Lagged(n)) => {
                            warn!("WebSocket for user {} lagged by {} messages", user_id, n);
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            break;
                        }
                    }
                }

                // 心跳
                _ = heartbeat.tick() => {
                    if session.ping(b"").await.is_err() {
                        break;
                    }
                }
            }
        }

        // 清理连接
        ConnectionManager::get().unregister(user_id);
        info!("WebSocket disconnected for user: {}", user_id);
    }
}

/// 辅助函数：向学生推送作业提交状态
pub fn push_assignment_status(user_id: i64, submission: &AssignmentSubmission, created: bool) {
    ConnectionManager::get().push_assignment_status(
        user_id,
        AssignmentStatusPayload {
            subject_id: submission.subject_id,
            submitted: submission.submitted,
            submitted_at: submission.submitted_at,
            created,
        },
    );
}

/// 辅助函数：检查用户是否在线
pub fn is_user_online(user_id: i64) -> bool {
    ConnectionManager::get().is_online(user_id)
}

/// 辅助函数：获取在线用户数
pub fn get_online_count() -> usize {
    ConnectionManager::get().online_count()
}
