//! Welcome Route

use axum::response::Html;

/// Browsable paths; `<start>` and `<end>` are placeholders for dates
pub const ROUTES: [&str; 7] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/precipitation/by-station",
    "/api/v1.0/stations",
    "/api/v1.0/stations/details",
    "/api/v1.0/tobs",
    "/api/v1.0/<start>",
    "/api/v1.0/<start>/<end>",
];

/// List the available routes as links
pub async fn welcome() -> Html<String> {
    let mut body = String::from("Welcome to the Climate API!<br/>Available Routes:<br/>");
    for path in ROUTES {
        let label = path.replace('<', "&lt;").replace('>', "&gt;");
        body.push_str(&format!("<a href='{path}'>{label}</a><br/>"));
    }
    Html(body)
}
