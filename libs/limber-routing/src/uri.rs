use crate::{RequestSource, RoutingError};

/// Form parameter that overrides the method of a `POST` request.
pub const METHOD_OVERRIDE_PARAM: &str = "_method";

/// The request path from `PATH_INFO`, without leading or trailing slashes.
/// Empty when the variable is not set.
pub fn querystring(request: &impl RequestSource) -> &str {
    request.server_var("PATH_INFO").unwrap_or_default().trim_matches('/')
}

/// The lowercased request method. A `POST` carrying a `_method` form
/// parameter reports that parameter's value instead.
pub fn method(request: &impl RequestSource) -> Result<String, RoutingError> {
    let method = request
        .server_var("REQUEST_METHOD")
        .ok_or(RoutingError::MissingRequestMethod)?;

    if method == "POST" {
        if let Some(overridden) = request.form_param(METHOD_OVERRIDE_PARAM) {
            tracing::debug!(method = overridden, "request method overridden");
            return Ok(overridden.to_lowercase());
        }
    }

    Ok(method.to_lowercase())
}
