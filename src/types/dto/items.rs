use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::errors::{InternalError, ItemApiError};
use crate::types::dto::common::ErrorResponse;
use crate::types::internal::filter::ItemsFilter;
use crate::types::internal::item::{Item, NewItem};
use crate::types::internal::timestamp;

/// Request model for creating a new item
#[derive(Object, Debug, Clone)]
pub struct CreateItemRequest {
    /// Identifier of the user offering the item
    #[oai(validator(min_length = 1))]
    pub user_id: String,

    /// Free-text keywords describing the item, order is kept
    pub keywords: Vec<String>,

    /// Description of the item
    #[oai(validator(min_length = 1))]
    pub description: String,

    /// Optional image reference (URL or data URI)
    pub image: Option<String>,

    /// Optional latitude in degrees
    pub lat: Option<f64>,

    /// Optional longitude in degrees
    pub lon: Option<f64>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(request: CreateItemRequest) -> Self {
        Self {
            user_id: request.user_id,
            keywords: request.keywords,
            description: request.description,
            image: request.image,
            lat: request.lat,
            lon: request.lon,
        }
    }
}

/// Response model representing a stored item
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: i64,

    pub user_id: String,

    pub keywords: Vec<String>,

    pub description: String,

    pub image: Option<String>,

    pub lat: Option<f64>,

    pub lon: Option<f64>,

    /// Start of the validity window (YYYY-MM-DDTHH:MM:SS)
    pub date_from: String,

    /// End of the validity window, null while open-ended
    pub date_to: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            user_id: item.user_id,
            keywords: item.keywords,
            description: item.description,
            image: item.image,
            lat: item.lat,
            lon: item.lon,
            date_from: timestamp::format(&item.date_from),
            date_to: item.date_to.as_ref().map(timestamp::format),
        }
    }
}

/// Responses for `POST /item/`
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "create_item_bad_request")]
pub enum CreateItemResponse {
    /// Item was stored
    #[oai(status = 201)]
    Created(Json<ItemResponse>),

    /// Body was not a valid item
    #[oai(status = 405)]
    MalformedInput(Json<ErrorResponse>),
}

fn create_item_bad_request(err: poem::Error) -> CreateItemResponse {
    CreateItemResponse::MalformedInput(ItemApiError::from_parse_request_error(err).into_body())
}

/// Responses for `GET /item/:item_id/`
#[derive(ApiResponse, Debug)]
pub enum GetItemResponse {
    /// The requested item
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),

    /// No item with that id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

/// Responses for `DELETE /item/:item_id/`
#[derive(ApiResponse, Debug)]
pub enum DeleteItemResponse {
    /// Item was removed
    #[oai(status = 204)]
    Deleted,

    /// No item with that id
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

/// Responses for `GET /items/`
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "list_items_bad_request")]
pub enum ListItemsResponse {
    /// Matching items in ascending id order
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),

    /// A query parameter could not be parsed
    #[oai(status = 405)]
    MalformedInput(Json<ErrorResponse>),
}

fn list_items_bad_request(err: poem::Error) -> ListItemsResponse {
    ListItemsResponse::MalformedInput(ItemApiError::from_parse_request_error(err).into_body())
}

/// Raw query parameters of `GET /items/`
///
/// Numeric values arrive already parsed; timestamps are still strings.
#[derive(Debug, Clone, Default)]
pub struct ItemsQuery {
    pub user_id: Option<String>,
    pub keywords: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub radius: Option<f64>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}

impl TryFrom<ItemsQuery> for ItemsFilter {
    type Error = InternalError;

    fn try_from(query: ItemsQuery) -> Result<Self, Self::Error> {
        let date_from = query
            .date_from
            .as_deref()
            .map(|raw| timestamp::parse("date_from", raw))
            .transpose()?;
        let date_to = query
            .date_to
            .as_deref()
            .map(|raw| timestamp::parse("date_to", raw))
            .transpose()?;

        Ok(Self {
            user_id: query.user_id,
            keywords: query.keywords,
            lat: query.lat,
            lon: query.lon,
            radius: query.radius,
            date_from,
            date_to,
        })
    }
}
