use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::OfficeId,
    list::PaginatedList,
    office::{Office, OfficeListOptions},
};

#[async_trait]
pub trait OfficeRepository: Send + Sync {
    async fn find_all(&self, options: OfficeListOptions) -> AppResult<PaginatedList<Office>>;
    async fn find_by_id(&self, office_id: OfficeId) -> AppResult<Option<Office>>;
}
