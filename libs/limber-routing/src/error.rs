use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutingError {
    #[error("The request does not define a REQUEST_METHOD")]
    MissingRequestMethod,
}
