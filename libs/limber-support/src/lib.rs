//! String helpers for naming things: case conversion, accent handling, URL
//! slugs, and the model/table/foreign key naming conventions built on top of
//! the inflector.
mod accents;
mod case;
mod model;
mod slug;

pub use accents::{acute, transliterate};
pub use case::{camelize, dasherize, demodulize, humanize, underscore};
pub use limber_inflector::{capitalize, pluralize, singularize};
pub use model::{classify, classify_with, foreign_key, tableize, tableize_with};
pub use slug::{parameterize, squeeze};

/// True if `s` is empty or contains only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
