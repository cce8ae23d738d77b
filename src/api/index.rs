use poem_openapi::{payload::Html, OpenApi, Tags};

const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Freecycle API</title>
</head>
<body>
    <h1>Freecycle API</h1>
    <p>The server is operational.</p>
    <ul>
        <li><code>POST /item/</code> create an item</li>
        <li><code>GET /item/{id}/</code> fetch an item</li>
        <li><code>DELETE /item/{id}/</code> delete an item</li>
        <li><code>GET /items/</code> list and filter items</li>
    </ul>
    <p>Interactive documentation is served at <a href="/swagger">/swagger</a>.</p>
</body>
</html>
"#;

/// Human readable landing page
pub struct IndexApi;

/// API tags for the landing page
#[derive(Tags)]
enum IndexTags {
    /// Server status page
    Index,
}

#[OpenApi]
impl IndexApi {
    /// Landing page saying that the server is operational
    #[oai(path = "/", method = "get", tag = "IndexTags::Index")]
    async fn index(&self) -> Html<&'static str> {
        Html(INDEX_PAGE)
    }
}
