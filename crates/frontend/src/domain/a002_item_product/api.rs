//! Item product service (`/quotation/componen_product`) and the read-only
//! accessory catalog (`/quotation/accessories`).

use crate::shared::api_utils::{fetch_one, fetch_page, remove, save};
use contracts::domain::a002_item_product::{Accessory, ItemProduct, ItemProductDto, ItemProductId};
use contracts::shared::api_error::ApiError;
use contracts::shared::pagination::{ListQuery, Paginated};

pub async fn fetch_item_products(query: ListQuery) -> Result<Paginated<ItemProduct>, ApiError> {
    fetch_page::<ItemProduct>(&query).await
}

pub async fn fetch_item_product(id: ItemProductId) -> Result<ItemProduct, ApiError> {
    fetch_one::<ItemProduct>(id).await
}

/// Prices are sent normalized ("Rp 1.250.000" becomes "1250000").
pub async fn create_item_product(dto: ItemProductDto) -> Result<Option<ItemProduct>, ApiError> {
    save::<ItemProduct>(None, &dto.normalized()).await
}

pub async fn update_item_product(
    id: ItemProductId,
    dto: ItemProductDto,
) -> Result<Option<ItemProduct>, ApiError> {
    save::<ItemProduct>(Some(id), &dto.normalized()).await
}

pub async fn delete_item_product(id: ItemProductId) -> Result<(), ApiError> {
    remove::<ItemProduct>(id).await
}

/// Accessory catalog page; the query must carry the `island` filter.
pub async fn fetch_accessories(query: ListQuery) -> Result<Paginated<Accessory>, ApiError> {
    fetch_page::<Accessory>(&query).await
}
