use unicode_segmentation::UnicodeSegmentation;

use crate::{
    InflectionError, categories,
    exceptions::{IRREGULARS, UNCOUNTABLES},
    rules::{self, Rule},
};

/// Selects the built-in rule set an `Inflector` starts from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// English plurals: "formula" -> "formulas", "schema" -> "schemas".
    #[default]
    Anglicized,
    /// Latin and Greek plurals on top of the English ones: "formula" ->
    /// "formulae", "schema" -> "schemata", "appendix" -> "appendices".
    Classical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Number {
    Singular,
    Plural,
}

/// Frozen inflection tables.
///
/// Uncountable words are checked first, then irregular pairs, then the suffix
/// rules of the requested direction, most recently registered first. The first
/// rule that matches wins. Words no rule matches are returned as they are.
#[derive(Debug, Clone)]
pub struct Inflector {
    plurals: Vec<Rule>,
    singulars: Vec<Rule>,
    /// Lowercased (singular, plural) pairs.
    irregulars: Vec<(String, String)>,
    /// Lowercased.
    uncountables: Vec<String>,
}

impl Inflector {
    /// Builds an inflector with the built-in tables of `mode`.
    pub fn new(mode: Mode) -> Self {
        Self::builder(mode)
            .build()
            .expect("built-in inflection rules are valid")
    }

    /// A builder seeded with the built-in tables of `mode`. Everything
    /// registered on it takes precedence over the built-in entries.
    pub fn builder(mode: Mode) -> InflectorBuilder {
        let mut builder = InflectorBuilder::empty();

        builder.extend_rules(Number::Plural, rules::PLURALS);
        builder.extend_rules(Number::Singular, rules::SINGULARS);

        if mode == Mode::Classical {
            builder.extend_rules(Number::Plural, categories::CLASSICAL_PLURALS);
            builder.extend_rules(Number::Singular, categories::CLASSICAL_SINGULARS);
        }

        for (singular, plural) in IRREGULARS {
            builder = builder.irregular(*singular, *plural);
        }

        for word in UNCOUNTABLES {
            builder = builder.uncountable(*word);
        }

        builder
    }

    pub fn pluralize(&self, word: &str) -> String {
        self.inflect(word, Number::Plural)
    }

    pub fn singularize(&self, word: &str) -> String {
        self.inflect(word, Number::Singular)
    }

    /// True if `word` ends with an uncountable word, ignoring case
    /// ("goldfish", "FarmSheep").
    pub fn is_uncountable(&self, word: &str) -> bool {
        let lowered = word.to_lowercase();

        self.uncountables
            .iter()
            .any(|uncountable| lowered.ends_with(uncountable.as_str()))
    }

    fn inflect(&self, word: &str, number: Number) -> String {
        if word.trim().is_empty() || self.is_uncountable(word) {
            return word.to_owned();
        }

        if let Some(inflected) = self.inflect_irregular(word, number) {
            return inflected;
        }

        let rules = match number {
            Number::Plural => &self.plurals,
            Number::Singular => &self.singulars,
        };

        for rule in rules.iter().rev() {
            if let Some(inflected) = rule.apply(word) {
                tracing::trace!(word, rule = rule.pattern(), ?number, "inflected by rule");
                return restore_case(word, inflected);
            }
        }

        word.to_owned()
    }

    /// Looks the last segment of `word` up in the irregular pairs. A segment
    /// that is already in the requested form leaves the word unchanged.
    fn inflect_irregular(&self, word: &str, number: Number) -> Option<String> {
        let start = segment_starts(word).last().copied().unwrap_or(0);
        let (prefix, segment) = word.split_at(start);
        let lowered = segment.to_lowercase();

        for (singular, plural) in self.irregulars.iter().rev() {
            let (from, to) = match number {
                Number::Plural => (singular, plural),
                Number::Singular => (plural, singular),
            };

            if lowered == *to {
                return Some(word.to_owned());
            }

            if lowered == *from {
                tracing::trace!(word, irregular = to.as_str(), ?number, "inflected as irregular");
                return Some(format!("{prefix}{}", restore_case(segment, to.clone())));
            }
        }

        None
    }
}

/// Collects custom rules and exceptions, compiling them into an `Inflector`
/// on `build`.
///
/// ```
/// use limber_inflector::{Inflector, Mode};
///
/// let inflector = Inflector::builder(Mode::Anglicized)
///     .irregular("cow", "kine")
///     .uncountable("pokemon")
///     .build()
///     .unwrap();
///
/// assert_eq!(inflector.pluralize("cow"), "kine");
/// assert_eq!(inflector.pluralize("pokemon"), "pokemon");
/// ```
#[derive(Debug, Default, Clone)]
pub struct InflectorBuilder {
    plurals: Vec<(String, String)>,
    singulars: Vec<(String, String)>,
    irregulars: Vec<(String, String)>,
    uncountables: Vec<String>,
}

impl InflectorBuilder {
    /// A builder without any rules or exceptions.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registers a singular to plural rule. `pattern` is matched
    /// case-insensitively; `replacement` may refer to capture groups as `${1}`.
    pub fn plural(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.plurals.push((pattern.into(), replacement.into()));
        self
    }

    /// Registers a plural to singular rule.
    pub fn singular(mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.singulars.push((pattern.into(), replacement.into()));
        self
    }

    /// Registers an irregular pair, replacing any earlier pair for either
    /// word. Neither word stays uncountable.
    pub fn irregular(mut self, singular: impl Into<String>, plural: impl Into<String>) -> Self {
        let singular = singular.into().to_lowercase();
        let plural = plural.into().to_lowercase();

        self.irregulars
            .retain(|(s, p)| *s != singular && *p != plural && *s != plural && *p != singular);
        self.uncountables.retain(|word| *word != singular && *word != plural);
        self.irregulars.push((singular, plural));
        self
    }

    /// Registers an uncountable word.
    pub fn uncountable(mut self, word: impl Into<String>) -> Self {
        let word = word.into().to_lowercase();

        if !self.uncountables.contains(&word) {
            self.uncountables.push(word);
        }

        self
    }

    pub fn build(self) -> Result<Inflector, InflectionError> {
        for (singular, plural) in &self.irregulars {
            if singular.is_empty() {
                return Err(InflectionError::EmptyWord { kind: "singular" });
            }

            if plural.is_empty() {
                return Err(InflectionError::EmptyWord { kind: "plural" });
            }
        }

        if self.uncountables.iter().any(String::is_empty) {
            return Err(InflectionError::EmptyWord { kind: "uncountable" });
        }

        Ok(Inflector {
            plurals: compile(&self.plurals)?,
            singulars: compile(&self.singulars)?,
            irregulars: self.irregulars,
            uncountables: self.uncountables,
        })
    }

    fn extend_rules(&mut self, number: Number, rules: &[(&str, &str)]) {
        let target = match number {
            Number::Plural => &mut self.plurals,
            Number::Singular => &mut self.singulars,
        };

        target.extend(
            rules
                .iter()
                .map(|(pattern, replacement)| ((*pattern).to_owned(), (*replacement).to_owned())),
        );
    }
}

fn compile(rules: &[(String, String)]) -> Result<Vec<Rule>, InflectionError> {
    rules
        .iter()
        .map(|(pattern, replacement)| Rule::new(pattern, replacement))
        .collect()
}

/// Byte offsets where a word segment starts: the beginning of the word, after
/// a run of non-alphanumeric separators, and at camel case humps ("fooBar",
/// "HTMLParser").
fn segment_starts(word: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut starts = vec![0];

    for (i, &(offset, c)) in chars.iter().enumerate().skip(1) {
        let previous = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let after_separator = !previous.is_alphanumeric() && c.is_alphanumeric();
        let camel_hump = c.is_uppercase() && (previous.is_lowercase() || previous.is_numeric());
        let acronym_end = c.is_uppercase() && previous.is_uppercase() && next.is_some_and(char::is_lowercase);

        if after_separator || camel_hump || acronym_end {
            starts.push(offset);
        }
    }

    starts
}

/// Carries the casing of `original` over to `inflected`: all caps stay all
/// caps, and a capitalized first letter stays capitalized.
fn restore_case(original: &str, inflected: String) -> String {
    let mut letters = original.chars().filter(|c| c.is_alphabetic()).peekable();
    let shouted = letters.peek().is_some() && original.chars().count() > 1 && letters.all(char::is_uppercase);

    if shouted {
        return inflected.to_uppercase();
    }

    match original.chars().next() {
        Some(first) if first.is_uppercase() => capitalize(&inflected),
        _ => inflected,
    }
}

/// Uppercases the first letter, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut graphemes = s.graphemes(true);

    match graphemes.next() {
        Some(first) => first.to_uppercase() + graphemes.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_split_on_separators_and_humps() {
        assert_eq!(segment_starts("person"), vec![0]);
        assert_eq!(segment_starts("sales_person"), vec![0, 6]);
        assert_eq!(segment_starts("CamelOctopus"), vec![0, 5]);
        assert_eq!(segment_starts("HTMLPerson"), vec![0, 4]);
        assert_eq!(segment_starts("PERSON"), vec![0]);
    }

    #[test]
    fn restore_case_mirrors_the_first_letter() {
        assert_eq!(restore_case("Person", "people".to_owned()), "People");
        assert_eq!(restore_case("person", "people".to_owned()), "people");
        assert_eq!(restore_case("PERSON", "people".to_owned()), "PEOPLE");
        assert_eq!(restore_case("BOX", "BOXes".to_owned()), "BOXES");
        assert_eq!(restore_case("A", "as".to_owned()), "As");
    }

    #[test]
    fn uncountables_match_any_word_ending() {
        let inflector = Inflector::new(Mode::Anglicized);

        assert!(inflector.is_uncountable("sheep"));
        assert!(inflector.is_uncountable("Sheep"));
        assert!(inflector.is_uncountable("farm_sheep"));
        assert!(inflector.is_uncountable("FarmSheep"));
        assert!(inflector.is_uncountable("farmsheep"));
        assert!(inflector.is_uncountable("goldfish"));
        assert!(inflector.is_uncountable("MISINFORMATION"));
        assert!(!inflector.is_uncountable("price"));
        assert!(!inflector.is_uncountable("sheepdog"));
    }

    #[test]
    fn capitalize_first_grapheme() {
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize("people"), "People");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn later_irregulars_replace_earlier_ones() {
        let inflector = InflectorBuilder::empty()
            .irregular("cow", "cows")
            .irregular("cow", "kine")
            .build()
            .unwrap();

        assert_eq!(inflector.pluralize("cow"), "kine");
        assert_eq!(inflector.singularize("kine"), "cow");
        assert_eq!(inflector.singularize("cows"), "cows");
    }

    #[test]
    fn irregulars_are_no_longer_uncountable() {
        let inflector = InflectorBuilder::empty()
            .uncountable("fish")
            .irregular("fish", "fishes")
            .build()
            .unwrap();

        assert!(!inflector.is_uncountable("fish"));
        assert_eq!(inflector.pluralize("fish"), "fishes");
    }

    #[test]
    fn empty_builder_returns_words_unchanged() {
        let inflector = InflectorBuilder::empty().build().unwrap();

        assert_eq!(inflector.pluralize("post"), "post");
        assert_eq!(inflector.singularize("posts"), "posts");
    }

    #[test]
    fn empty_exception_words_are_rejected() {
        let err = InflectorBuilder::empty().irregular("", "kine").build().unwrap_err();
        assert!(matches!(err, InflectionError::EmptyWord { kind: "singular" }));

        let err = InflectorBuilder::empty().uncountable("").build().unwrap_err();
        assert!(matches!(err, InflectionError::EmptyWord { kind: "uncountable" }));
    }

    #[test]
    fn invalid_custom_rules_fail_to_build() {
        let result = Inflector::builder(Mode::Anglicized).plural("(oops", "x").build();

        assert!(matches!(result, Err(InflectionError::InvalidPattern { .. })));
    }
}
