use poem_openapi::{
    param::{Path, Query},
    payload::Json,
    OpenApi, Tags,
};
use crate::errors::{InternalError, ItemApiError};
use crate::stores::ItemStore;
use crate::types::dto::items::{
    CreateItemRequest, CreateItemResponse, DeleteItemResponse, GetItemResponse, ItemResponse,
    ItemsQuery, ListItemsResponse,
};
use crate::types::internal::filter::ItemsFilter;
use crate::types::internal::item::Item;
use std::sync::Arc;

/// Items API endpoints
pub struct ItemsApi {
    item_store: Arc<ItemStore>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given ItemStore
    pub fn new(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }

    async fn find_item(&self, raw_id: &str) -> Result<Item, InternalError> {
        let id = parse_item_id(raw_id)?;

        self.item_store
            .get_by_id(id)
            .await
            .ok_or_else(|| InternalError::ItemNotFound(raw_id.to_string()))
    }

    async fn remove_item(&self, raw_id: &str) -> Result<(), InternalError> {
        let id = parse_item_id(raw_id)?;

        if self.item_store.delete_by_id(id).await {
            Ok(())
        } else {
            Err(InternalError::ItemNotFound(raw_id.to_string()))
        }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

/// Parse an item id path segment
///
/// Ids that aren't integers can't exist, so they are reported as not found.
fn parse_item_id(raw: &str) -> Result<i64, InternalError> {
    raw.parse()
        .map_err(|_| InternalError::ItemNotFound(raw.to_string()))
}

#[OpenApi]
impl ItemsApi {
    /// Create a new item
    ///
    /// Stores the item and returns it with its assigned id and validity window
    #[oai(path = "/item/", method = "post", tag = "ItemTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> CreateItemResponse {
        let item = self.item_store.insert(body.0.into()).await;

        CreateItemResponse::Created(Json(ItemResponse::from(item)))
    }

    /// Get an existing item by id
    #[oai(path = "/item/:item_id/", method = "get", tag = "ItemTags::Items")]
    async fn get_item(&self, item_id: Path<String>) -> GetItemResponse {
        match self.find_item(&item_id.0).await {
            Ok(item) => GetItemResponse::Ok(Json(ItemResponse::from(item))),
            Err(e) => GetItemResponse::NotFound(ItemApiError::from_internal_error(e).into_body()),
        }
    }

    /// Delete an existing item by id
    #[oai(path = "/item/:item_id/", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, item_id: Path<String>) -> DeleteItemResponse {
        match self.remove_item(&item_id.0).await {
            Ok(()) => DeleteItemResponse::Deleted,
            Err(e) => DeleteItemResponse::NotFound(ItemApiError::from_internal_error(e).into_body()),
        }
    }

    /// List items, optionally filtered
    ///
    /// All filters are optional. `keywords` is comma-separated and every entry
    /// must match. `lat`/`lon` select a square of `radius` degrees (default 5).
    /// Dates use the format YYYY-MM-DDTHH:MM:SS.
    #[oai(path = "/items/", method = "get", tag = "ItemTags::Items")]
    async fn list_items(
        &self,
        user_id: Query<Option<String>>,
        keywords: Query<Option<String>>,
        lat: Query<Option<f64>>,
        lon: Query<Option<f64>>,
        radius: Query<Option<f64>>,
        date_from: Query<Option<String>>,
        date_to: Query<Option<String>>,
    ) -> ListItemsResponse {
        let query = ItemsQuery {
            user_id: user_id.0,
            keywords: keywords.0,
            lat: lat.0,
            lon: lon.0,
            radius: radius.0,
            date_from: date_from.0,
            date_to: date_to.0,
        };

        let filter = match ItemsFilter::try_from(query) {
            Ok(filter) => filter,
            Err(e) => {
                return ListItemsResponse::MalformedInput(
                    ItemApiError::from_internal_error(e).into_body(),
                )
            }
        };

        let items = self.item_store.list_filtered(&filter).await;
        ListItemsResponse::Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }
}
