//! Landing page with example queries

use axum::{response::Html, routing::get, Router};

const EXAMPLE_LISTING: &str = "/joyas?limits=3&page=2&order_by=stock_ASC";
const EXAMPLE_FILTER: &str =
    "/joyas/filtros?precio_min=25000&precio_max=30000&categoria=aros&metal=plata";

/// GET /
async fn index() -> Html<String> {
    Html(format!(
        "<h1>Prueba con las siguientes consultas</h1>\n\
         <ul>\n\
         <li><a href=\"{listing}\">{listing}</a></li>\n\
         <li><a href=\"{filter}\">{filter}</a></li>\n\
         </ul>\n",
        listing = EXAMPLE_LISTING.replace('&', "&amp;"),
        filter = EXAMPLE_FILTER.replace('&', "&amp;"),
    ))
}

/// Index routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
