pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::feedbacks::requests::SubmitFeedbackRequest;
use crate::storage::Storage;

pub struct FeedbackService {
    storage: Option<Arc<dyn Storage>>,
}

impl FeedbackService {
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

    /// 提交反馈
    pub async fn submit(
        &self,
        request: &HttpRequest,
        req: SubmitFeedbackRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_feedback(self, request, req).await
    }

    /// 查看反馈历史
    pub async fn list(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_feedbacks(self, request).await
    }
}
