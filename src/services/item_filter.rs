use chrono::NaiveDateTime;

use crate::types::internal::filter::{ItemsFilter, DEFAULT_RADIUS};
use crate::types::internal::item::Item;

/// Apply `filter` to `items`, keeping their order
///
/// An empty filter returns `items` untouched. Otherwise the radius defaults
/// to [`DEFAULT_RADIUS`] and the end date to `now`, and each item must pass
/// every criterion that applies:
///
/// - owner equals `user_id`
/// - every comma-separated entry of `keywords` is one of the item's keywords
/// - inside the bounding box, when both `lat` and `lon` are given
/// - window does not open before `date_from`
/// - window does not close after `date_to` (open-ended items always pass)
pub fn apply(items: Vec<Item>, filter: &ItemsFilter, now: NaiveDateTime) -> Vec<Item> {
    if filter.is_empty() {
        return items;
    }

    let radius = filter.radius.unwrap_or(DEFAULT_RADIUS);
    let date_to = filter.date_to.unwrap_or(now);

    items
        .into_iter()
        .filter(|item| matches(item, filter, radius, date_to))
        .collect()
}

fn matches(item: &Item, filter: &ItemsFilter, radius: f64, date_to: NaiveDateTime) -> bool {
    if let Some(user_id) = &filter.user_id {
        if &item.user_id != user_id {
            return false;
        }
    }

    if let Some(keywords) = filter.keyword_list() {
        if !item.has_all_keywords(keywords) {
            return false;
        }
    }

    if let (Some(lat), Some(lon)) = (filter.lat, filter.lon) {
        if !item.in_range(radius, lat, lon) {
            return false;
        }
    }

    if let Some(date_from) = filter.date_from {
        if item.date_from < date_from {
            return false;
        }
    }

    match item.date_to {
        Some(item_date_to) => item_date_to <= date_to,
        None => true,
    }
}
