// Services layer - Business logic
pub mod item_filter;
