use serde::Serialize;

use super::entities::User;

// 用户信息响应
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: User,
}

// 头像上传响应
#[derive(Debug, Serialize)]
pub struct AvatarUploadResponse {
    pub avatar_url: String,
}
