use thiserror::Error;

#[derive(Debug, Error)]
pub enum InflectionError {
    #[error("Invalid inflection pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("The {kind} word of an inflection must not be empty")]
    EmptyWord { kind: &'static str },
}
