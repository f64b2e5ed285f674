use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::transliterate;

static RE_UNWANTED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[^a-z0-9\-_+]+").unwrap());

/// Turns `s` into something usable as part of a pretty URL: accents are
/// transliterated, every run of other characters becomes `separator`, and the
/// result is lowercased with no separator at either end.
///
/// ```
/// assert_eq!(limber_support::parameterize("Donald E. Knuth", "-"), "donald-e-knuth");
/// assert_eq!(limber_support::parameterize("Ação é boa!", "_"), "acao_e_boa");
/// ```
pub fn parameterize(s: &str, separator: &str) -> String {
    let transliterated = transliterate(s);
    let replaced = RE_UNWANTED.replace_all(&transliterated, NoExpand(separator));

    if separator.is_empty() {
        return replaced.to_lowercase();
    }

    let squeezed = squeeze(&replaced, separator);
    let trimmed = squeezed.strip_prefix(separator).unwrap_or(&squeezed);
    let trimmed = trimmed.strip_suffix(separator).unwrap_or(trimmed);

    trimmed.to_lowercase()
}

/// Collapses every run of two or more `sequence` into a single one:
/// "my--string" -> "my-string".
pub fn squeeze(s: &str, sequence: &str) -> String {
    if sequence.is_empty() {
        return s.to_owned();
    }

    let pattern = format!("(?:{}){{2,}}", regex::escape(sequence));

    match Regex::new(&pattern) {
        Ok(repeated) => repeated.replace_all(s, NoExpand(sequence)).into_owned(),
        Err(_) => s.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameterize_replaces_unwanted_characters() {
        assert_eq!(parameterize("Donald E. Knuth", "-"), "donald-e-knuth");
        assert_eq!(parameterize("  leading and trailing  ", "-"), "leading-and-trailing");
        assert_eq!(parameterize("keeps_under-scores+plus", "-"), "keeps_under-scores+plus");
    }

    #[test]
    fn parameterize_transliterates_accents() {
        assert_eq!(parameterize("Ação é boa!", "-"), "acao-e-boa");
    }

    #[test]
    fn parameterize_squeezes_existing_separators() {
        assert_eq!(parameterize("a -- b", "-"), "a-b");
        assert_eq!(parameterize("a__b", "_"), "a_b");
    }

    #[test]
    fn parameterize_with_custom_separators() {
        assert_eq!(parameterize("Hello World", "$"), "hello$world");
        assert_eq!(parameterize("Hello World", ""), "helloworld");
    }

    #[test]
    fn squeeze_repeated_sequences() {
        assert_eq!(
            squeeze("my-string--with-repeated---character", "-"),
            "my-string-with-repeated-character"
        );
        assert_eq!(squeeze("a..b...c", "."), "a.b.c");
        assert_eq!(squeeze("abab-ab", "ab"), "ab-ab");
        assert_eq!(squeeze("unchanged", ""), "unchanged");
    }
}
