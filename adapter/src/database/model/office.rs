use kernel::model::{
    id::{OfficeId, UserId},
    office::Office,
    user::OfficeOwner,
};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct OfficeRow {
    pub office_id: OfficeId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: String,
    pub monthly_price: Decimal,
    pub is_available: bool,
    pub owned_by: UserId,
    pub owner_name: String,
}

impl From<OfficeRow> for Office {
    fn from(value: OfficeRow) -> Self {
        let OfficeRow {
            office_id,
            name,
            address,
            city,
            description,
            monthly_price,
            is_available,
            owned_by,
            owner_name,
        } = value;
        Office {
            office_id,
            name,
            address,
            city,
            description,
            monthly_price,
            is_available,
            owner: OfficeOwner {
                owner_id: owned_by,
                owner_name,
            },
        }
    }
}

// adapter-internal type for pagination
#[derive(sqlx::FromRow)]
pub struct PaginatedOfficeRow {
    pub total: i64,
    pub office_id: OfficeId,
}
