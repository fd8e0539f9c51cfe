use axum::response::Html;

use crate::route::api::{API_BASE_PATH, API_NAME, API_VERSION};

#[tracing::instrument]
pub async fn docs() -> Html<String> {
    Html(format!(
        concat!(
            "<!doctype html>\n",
            "<html>\n",
            "<head><title>{name} docs</title></head>\n",
            "<body>\n",
            "<h1>{name} {version}</h1>\n",
            "<p>API base URL: <a href=\"{base}\">{base}</a></p>\n",
            "<ul>\n",
            "<li><code>GET /</code></li>\n",
            "<li><code>GET /healthz</code></li>\n",
            "<li><code>GET /health/rich</code></li>\n",
            "<li><code>GET {base}</code></li>\n",
            "</ul>\n",
            "</body>\n",
            "</html>\n",
        ),
        name = API_NAME,
        version = API_VERSION,
        base = API_BASE_PATH,
    ))
}
