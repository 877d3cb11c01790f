use axum::extract::Request;
use axum::http::Method;
use axum::middleware::Next;
use axum::response::Response;

/// Rewrite `POST /path?_method=PUT` (or `DELETE`) into the method the form
/// meant. HTML forms can only submit GET and POST; the edit and delete forms
/// tunnel the real verb through the `_method` query parameter. Runs before
/// routing, so the rewritten method picks the route.
pub async fn method_override(mut request: Request, next: Next) -> Response {
    if request.method() == Method::POST {
        if let Some(target) = override_target(request.uri().query()) {
            *request.method_mut() = target;
        }
    }
    next.run(request).await
}

fn override_target(query: Option<&str>) -> Option<Method> {
    let value = query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("_method="))?;
    match value.to_ascii_uppercase().as_str() {
        "PUT" => Some(Method::PUT),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}
