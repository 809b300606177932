use garde::Validate;
use kernel::model::{
    id::{OfficeId, UserId},
    list::PaginatedList,
    office::{Office, OfficeListOptions},
    user::OfficeOwner,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DEFAULT_LIMIT: i64 = 20;
const fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, Validate)]
pub struct OfficeListQuery {
    #[garde(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[garde(range(min = 0))]
    #[serde(default)]
    pub offset: i64,
}

impl From<OfficeListQuery> for OfficeListOptions {
    fn from(value: OfficeListQuery) -> Self {
        let OfficeListQuery { limit, offset } = value;
        Self { limit, offset }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeResponse {
    pub office_id: OfficeId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub description: String,
    pub monthly_price: Decimal,
    pub is_available: bool,
    pub owner: OfficeOwnerResponse,
}

impl From<Office> for OfficeResponse {
    fn from(value: Office) -> Self {
        let Office {
            office_id,
            name,
            address,
            city,
            description,
            monthly_price,
            is_available,
            owner,
        } = value;
        Self {
            office_id,
            name,
            address,
            city,
            description,
            monthly_price,
            is_available,
            owner: owner.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeOwnerResponse {
    pub owner_id: UserId,
    pub owner_name: String,
}

impl From<OfficeOwner> for OfficeOwnerResponse {
    fn from(value: OfficeOwner) -> Self {
        let OfficeOwner {
            owner_id,
            owner_name,
        } = value;
        Self {
            owner_id,
            owner_name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedOfficeResponse {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub items: Vec<OfficeResponse>,
}

impl From<PaginatedList<Office>> for PaginatedOfficeResponse {
    fn from(value: PaginatedList<Office>) -> Self {
        let PaginatedList {
            total,
            limit,
            offset,
            items,
        } = value;
        Self {
            total,
            limit,
            offset,
            items: items.into_iter().map(OfficeResponse::from).collect(),
        }
    }
}
