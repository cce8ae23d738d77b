// Internal types - domain data that never crosses the API boundary as-is
pub mod filter;
pub mod item;
pub mod timestamp;
