use super::entities::{Gender, UserRole};
use serde::Deserialize;

// 用户创建请求（管理端/启动播种使用，password 为已哈希值）
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
}

// 学生资料更新请求（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    /// 为空或缺省时保持原密码不变
    pub password: Option<String>,
}

// 学生资料更新（用于存储层，密码已哈希）
#[derive(Debug, Clone, Default)]
pub struct StudentProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub gender: Option<Gender>,
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
}

// FCM 设备令牌注册请求
#[derive(Debug, Deserialize)]
pub struct FcmTokenRequest {
    pub token: String,
}
