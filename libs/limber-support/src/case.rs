use limber_inflector::capitalize;
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

static RE_ACRONYM: Lazy<Regex> = Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

static RE_LOWER_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

static RE_NAMESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\|::").unwrap());

/// Joins underscored pieces into UpperCamelCase, or lowerCamelCase when
/// `first_letter_uppercase` is false.
///
/// ```
/// assert_eq!(limber_support::camelize("limber_record", true), "LimberRecord");
/// assert_eq!(limber_support::camelize("limber_record", false), "limberRecord");
/// ```
pub fn camelize(s: &str, first_letter_uppercase: bool) -> String {
    let camelized: String = s.split('_').map(capitalize).collect();

    if first_letter_uppercase {
        camelized
    } else {
        lowercase_first(&camelized)
    }
}

/// The reverse of `camelize`: "LimberRecord" -> "limber_record". Namespace
/// separators become `/` and dashes become underscores.
pub fn underscore(s: &str) -> String {
    let res = RE_NAMESPACE.replace_all(s, "/");
    let res = RE_ACRONYM.replace_all(&res, "${1}_${2}");
    let res = RE_LOWER_UPPER.replace_all(&res, "${1}_${2}");

    res.replace('-', "_").to_lowercase()
}

/// "my_string" -> "my-string".
pub fn dasherize(s: &str) -> String {
    s.replace('_', "-")
}

/// Drops a trailing `_id`, turns underscores into spaces, and capitalizes
/// the first letter: "author_id" -> "Author", "employee_salary" -> "Employee
/// salary".
pub fn humanize(s: &str) -> String {
    let s = s.strip_suffix("_id").unwrap_or(s);

    capitalize(&s.replace('_', " "))
}

/// Removes the namespace from a class name: `Models\Person` and
/// `models::Person` both become `Person`.
pub fn demodulize(s: &str) -> &str {
    let start = [s.rfind('\\').map(|i| i + 1), s.rfind("::").map(|i| i + 2)]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(0);

    &s[start..]
}

fn lowercase_first(s: &str) -> String {
    let mut graphemes = s.graphemes(true);

    match graphemes.next() {
        Some(first) => first.to_lowercase() + graphemes.as_str(),
        None => String::new(),
    }
}
