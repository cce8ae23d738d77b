use chrono::NaiveDateTime;

/// Input for creating a new item
///
/// Carries everything the caller supplies; identity and the validity window
/// are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub user_id: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub image: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// A stored item
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i64,
    pub user_id: String,
    pub keywords: Vec<String>,
    pub description: String,
    pub image: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub date_from: NaiveDateTime,
    pub date_to: Option<NaiveDateTime>,
}

impl Item {
    /// Build a stored item from creation input
    ///
    /// The validity window opens at `date_from` and is left open-ended.
    pub fn from_new(id: i64, new_item: NewItem, date_from: NaiveDateTime) -> Self {
        Self {
            id,
            user_id: new_item.user_id,
            keywords: new_item.keywords,
            description: new_item.description,
            image: new_item.image,
            lat: new_item.lat,
            lon: new_item.lon,
            date_from,
            date_to: None,
        }
    }

    /// Check whether the item lies inside the square centred on (`lat`, `lon`)
    ///
    /// Each axis is checked independently with strict bounds, so this is a
    /// bounding box in degrees rather than a distance. Items without both
    /// coordinates are never in range.
    pub fn in_range(&self, radius: f64, lat: f64, lon: f64) -> bool {
        match (self.lat, self.lon) {
            (Some(item_lat), Some(item_lon)) => {
                item_lat > lat - radius
                    && item_lat < lat + radius
                    && item_lon > lon - radius
                    && item_lon < lon + radius
            }
            _ => false,
        }
    }

    /// Check whether every keyword in `wanted` is among the item's keywords
    pub fn has_all_keywords<'a>(&self, mut wanted: impl Iterator<Item = &'a str>) -> bool {
        wanted.all(|keyword| self.keywords.iter().any(|own| own == keyword))
    }
}
