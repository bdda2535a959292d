pub mod apply;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::leaves::requests::ApplyLeaveRequest;
use crate::storage::Storage;

pub struct LeaveService {
    storage: Option<Arc<dyn Storage>>,
}

impl LeaveService {
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

    /// 提交请假申请
    pub async fn apply(
        &self,
        request: &HttpRequest,
        req: ApplyLeaveRequest,
    ) -> ActixResult<HttpResponse> {
        apply::apply_leave(self, request, req).await
    }

    /// 查看请假历史
    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_leave_reports(self, request).await
    }
}
