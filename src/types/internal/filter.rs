use chrono::NaiveDateTime;

/// Radius, in degrees, applied to location filters that don't give one
pub const DEFAULT_RADIUS: f64 = 5.0;

/// Criteria for listing items
///
/// Every field is optional; an all-`None` filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemsFilter {
    /// Owner that items must belong to
    pub user_id: Option<String>,

    /// Comma-separated keywords that must all be present on an item
    pub keywords: Option<String>,

    pub lat: Option<f64>,
    pub lon: Option<f64>,

    /// Half the side of the bounding box, in degrees
    pub radius: Option<f64>,

    /// Items whose window opens before this are excluded
    pub date_from: Option<NaiveDateTime>,

    /// Items whose window closes after this are excluded
    pub date_to: Option<NaiveDateTime>,
}

impl ItemsFilter {
    /// Whether no criteria are set at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Iterate the requested keywords
    ///
    /// The raw value is split on `,` as-is, so `"a,,b"` asks for an empty
    /// keyword too.
    pub fn keyword_list(&self) -> Option<impl Iterator<Item = &str> + Clone> {
        self.keywords.as_deref().map(|raw| raw.split(','))
    }
}
