pub mod avatar;
pub mod fcm_token;
pub mod get;
pub mod update;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{FcmTokenRequest, UpdateProfileRequest};
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    /// 查看个人资料
    pub async fn get_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_profile(self, request).await
    }

    /// 更新个人资料（部分更新）
    pub async fn update_profile(
        &self,
        request: &HttpRequest,
        req: UpdateProfileRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_profile(self, request, req).await
    }

    /// 上传头像
    pub async fn upload_avatar(
        &self,
        request: &HttpRequest,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        avatar::upload_avatar(self, request, payload).await
    }

    /// 注册 FCM 设备令牌
    pub async fn register_fcm_token(
        &self,
        request: &HttpRequest,
        req: FcmTokenRequest,
    ) -> ActixResult<HttpResponse> {
        fcm_token::register_fcm_token(self, request, req).await
    }
}
