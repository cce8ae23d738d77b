// API layer - HTTP endpoints
pub mod health;
pub mod index;
pub mod items;

use std::sync::Arc;

pub use health::HealthApi;
pub use index::IndexApi;
pub use items::ItemsApi;

use poem::middleware::{Cors, NormalizePath, Tracing, TrailingSlash};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;

/// All OpenAPI endpoint groups served by the application
pub type ApiEndpoints = (IndexApi, HealthApi, ItemsApi);

/// Create the OpenAPI service for the item endpoints
///
/// The settings' public URL is advertised as the server in the document.
pub fn api_service(app_data: &AppData) -> OpenApiService<ApiEndpoints, ()> {
    let endpoints = (IndexApi, HealthApi, ItemsApi::new(app_data.item_store.clone()));

    OpenApiService::new(endpoints, "Freecycle API", env!("CARGO_PKG_VERSION"))
        .server(app_data.settings.public_url())
}

/// Compose the full route tree
///
/// Swagger UI is nested under `/swagger`; everything else is served by the
/// OpenAPI service at the root. Operation paths are registered without a
/// trailing slash, so request paths are trimmed before routing and
/// `/item/1/` reaches the same operation as `/item/1`. CORS allows any origin.
pub fn build_app(app_data: Arc<AppData>) -> impl Endpoint {
    let api_service = api_service(&app_data);
    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(NormalizePath::new(TrailingSlash::Trim))
        .with(Cors::new())
        .with(Tracing)
}
