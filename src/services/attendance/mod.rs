pub mod range;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::attendance::requests::AttendanceRangeRequest;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
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

    /// 考勤汇总（逐科目 + 全课程 + 图表序列）
    pub async fn get_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::get_attendance_summary(self, request).await
    }

    /// 按日期区间查询考勤
    pub async fn query_range(
        &self,
        request: &HttpRequest,
        req: AttendanceRangeRequest,
    ) -> ActixResult<HttpResponse> {
        range::query_attendance_range(self, request, req).await
    }
}
