pub mod eligibility;
pub mod status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct NocService {
    storage: Option<Arc<dyn Storage>>,
}

impl NocService {
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

    /// 查看 NOC 申请状态
    pub async fn list_status(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        status::list_noc_status(self, request).await
    }

    /// 查看逐科目 NOC 资格（出勤率）
    pub async fn eligibility(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        eligibility::get_noc_eligibility(self, request).await
    }
}
