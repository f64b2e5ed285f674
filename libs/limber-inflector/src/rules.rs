use regex::{Regex, RegexBuilder};

use crate::InflectionError;

/// Singular to plural suffix rules, in registration order. Scanned back to front.
pub(crate) const PLURALS: &[(&str, &str)] = &[
    ("$", "s"),
    ("s$", "s"),
    (
        "(alias|status|campus|bonus|census|virus|prospectus|apparatus|radius|genius|circus|chorus|walrus|focus)$",
        "${1}es",
    ),
    ("(bu)s$", "${1}ses"),
    ("([^aeiou])o$", "${1}oes"),
    (
        "(photo|piano|halo|memo|logo|kilo|solo|pro|auto|disco|casino|kimono|silo|taco|combo|demo|euro|intro|limo|macro|metro|repo|typo|tempo|turbo|ego|embryo|avocado|dynamo|lasso|zero|cello|ghetto|soprano|alto|burrito|gizmo|inferno|jumbo|poncho)$",
        "${1}s",
    ),
    ("(dat|medi|curricul|strat|bacteri|millenni|memorand|erat|symposi)um$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(lea|loa|thie|shea)f$", "${1}ves"),
    ("(cafe|safe|carafe)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh|z)$", "${1}es"),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("(quiz)$", "${1}zes"),
];

/// Plural to singular suffix rules, in registration order. Scanned back to front.
pub(crate) const SINGULARS: &[(&str, &str)] = &[
    ("s$", ""),
    ("(ss)$", "${1}"),
    ("(dat|medi|curricul|strat|bacteri|millenni|memorand|erat|symposi)a$", "${1}um"),
    (
        "(analy|diagno|parenthe|progno|synop|the|cri|empha|hypothe|ellip|oa)(sis|ses)$",
        "${1}sis",
    ),
    ("([^f])ves$", "${1}fe"),
    ("([lr])ves$", "${1}f"),
    ("(lea|loa|thie|shea)ves$", "${1}f"),
    (
        "(hive|tive|curve|valve|glove|love|groove|drive|dive|five|sieve|nerve|sleeve|wave|stove|cave|grave|slave|olive|move|serve|dove|cove|grove)s$",
        "${1}",
    ),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    (
        "(cook|mov|zomb|rook|calor|brown|self|smooth|newb|freeb|hipp|goal|pix|budg|gen)ies$",
        "${1}ie",
    ),
    ("(x|ch|ss|sh|zz|tz)es$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe|canoe|oboe|floe|throe)s$", "${1}"),
    ("(^|[^a-z])(toe|foe|hoe|doe|roe|woe|sloe)s$", "${1}${2}"),
    ("(bus)(es)?$", "${1}"),
    (
        "(alias|status|campus|bonus|census|virus|prospectus|apparatus|radius|genius|circus|chorus|walrus|focus)(es)?$",
        "${1}",
    ),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
];

/// A suffix rule: a case-insensitive pattern, and the template its match is
/// replaced with. Templates use the `regex` expansion syntax (`${1}`).
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pattern: Regex,
    replacement: String,
}

impl Rule {
    pub(crate) fn new(pattern: &str, replacement: &str) -> Result<Self, InflectionError> {
        let compiled = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| InflectionError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;

        Ok(Self {
            pattern: compiled,
            replacement: replacement.to_owned(),
        })
    }

    pub(crate) fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Applies the rule to the first match in `word`, or returns `None` if the
    /// pattern does not match.
    pub(crate) fn apply(&self, word: &str) -> Option<String> {
        let captures = self.pattern.captures(word)?;
        let matched = captures.get(0)?;

        let mut inflected = String::with_capacity(word.len() + self.replacement.len());
        inflected.push_str(&word[..matched.start()]);
        captures.expand(&self.replacement, &mut inflected);
        inflected.push_str(&word[matched.end()..]);

        Some(inflected)
    }
}
