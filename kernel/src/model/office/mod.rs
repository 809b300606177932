use crate::model::{id::OfficeId, user::OfficeOwner};
use rust_decimal::Decimal;

#[derive(Debug, Clone)]
pub struct Office {
    pub office_id: OfficeId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: String,
    pub monthly_price: Decimal,
    pub is_available: bool,
    pub owner: OfficeOwner,
}

#[derive(Debug, Clone, Copy)]
pub struct OfficeListOptions {
    pub limit: i64,
    pub offset: i64,
}
