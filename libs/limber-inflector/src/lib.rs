//! English noun inflection.
//!
//! Words are pluralized and singularized by scanning ordered suffix rules, most
//! recently registered first. Uncountable words and irregular pairs are checked
//! before any rule is consulted.
//!
//! ```
//! assert_eq!(limber_inflector::pluralize("person"), "people");
//! assert_eq!(limber_inflector::singularize("cities"), "city");
//! assert_eq!(limber_inflector::classical().pluralize("formula"), "formulae");
//! ```
mod categories;
mod error;
mod exceptions;
mod inflector;
mod rules;

pub use error::InflectionError;
pub use inflector::{Inflector, InflectorBuilder, Mode, capitalize};

use once_cell::sync::Lazy;

static DEFAULT: Lazy<Inflector> = Lazy::new(|| Inflector::new(Mode::Anglicized));
static CLASSICAL: Lazy<Inflector> = Lazy::new(|| Inflector::new(Mode::Classical));

/// Default inflector, anglicized mode.
pub fn default() -> &'static Inflector {
    &DEFAULT
}

/// Inflector, classical mode.
pub fn classical() -> &'static Inflector {
    &CLASSICAL
}

/// Returns the plural form of `word`, using the default inflector.
pub fn pluralize(word: &str) -> String {
    DEFAULT.pluralize(word)
}

/// Returns the singular form of `word`, using the default inflector.
pub fn singularize(word: &str) -> String {
    DEFAULT.singularize(word)
}
