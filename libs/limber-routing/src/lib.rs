//! Request helpers for routing: the path a request targets, and its method
//! with support for overriding `POST` through a `_method` form parameter.
mod env;
mod error;
mod uri;

pub use env::RequestEnv;
pub use error::RoutingError;
pub use uri::{METHOD_OVERRIDE_PARAM, method, querystring};

/// Where request data is read from. Server variables follow the CGI naming
/// (`REQUEST_METHOD`, `PATH_INFO`).
pub trait RequestSource {
    fn server_var(&self, name: &str) -> Option<&str>;

    fn form_param(&self, name: &str) -> Option<&str>;
}
