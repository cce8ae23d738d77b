// DTOs - request and response bodies of the HTTP API
pub mod common;
pub mod items;
