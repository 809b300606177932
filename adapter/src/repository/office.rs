use crate::database::{
    model::office::{OfficeRow, PaginatedOfficeRow},
    ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::OfficeId,
    list::PaginatedList,
    office::{Office, OfficeListOptions},
};
use kernel::repository::office::OfficeRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct OfficeRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl OfficeRepository for OfficeRepositoryImpl {
    async fn find_all(&self, options: OfficeListOptions) -> AppResult<PaginatedList<Office>> {
        let OfficeListOptions { limit, offset } = options;

        // Pick the page of ids first, then load the offices themselves.
        let rows: Vec<PaginatedOfficeRow> = sqlx::query_as(
            r#"
                SELECT
                COUNT(*) OVER() AS total,
                office_id
                FROM offices
                WHERE is_available
                ORDER BY created_at DESC
                LIMIT $1
                OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let total = rows.first().map(|r| r.total).unwrap_or_default();
        let office_ids: Vec<uuid::Uuid> = rows.into_iter().map(|r| r.office_id.raw()).collect();

        let items: Vec<Office> = sqlx::query_as::<_, OfficeRow>(
            r#"
                SELECT
                o.office_id,
                o.name,
                o.address,
                o.city,
                o.description,
                o.monthly_price,
                o.is_available,
                o.owned_by,
                u.user_name AS owner_name
                FROM offices AS o
                INNER JOIN users AS u ON o.owned_by = u.user_id
                WHERE o.office_id = ANY($1)
                ORDER BY o.created_at DESC
            "#,
        )
        .bind(office_ids)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Office::from)
        .collect();

        Ok(PaginatedList {
            total,
            limit,
            offset,
            items,
        })
    }

    async fn find_by_id(&self, office_id: OfficeId) -> AppResult<Option<Office>> {
        let row: Option<OfficeRow> = sqlx::query_as(
            r#"
                SELECT
                o.office_id,
                o.name,
                o.address,
                o.city,
                o.description,
                o.monthly_price,
                o.is_available,
                o.owned_by,
                u.user_name AS owner_name
                FROM offices AS o
                INNER JOIN users AS u ON o.owned_by = u.user_id
                WHERE o.office_id = $1
            "#,
        )
        .bind(office_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Office::from))
    }
}
