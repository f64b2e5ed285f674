use limber_inflector::Inflector;

use crate::{camelize, demodulize, underscore};

/// Table name for a model class: "LimberRecord" -> "limber_records".
pub fn tableize(class_name: &str) -> String {
    tableize_with(limber_inflector::default(), class_name)
}

pub fn tableize_with(inflector: &Inflector, class_name: &str) -> String {
    inflector.pluralize(&underscore(class_name))
}

/// Class name for a table: "limber_records" -> "LimberRecord".
pub fn classify(table_name: &str) -> String {
    classify_with(limber_inflector::default(), table_name)
}

pub fn classify_with(inflector: &Inflector, table_name: &str) -> String {
    camelize(&inflector.singularize(table_name), true)
}

/// Foreign key column for a class: `Models\Person` -> "person_id", or
/// "personid" without the underscore.
pub fn foreign_key(class_name: &str, separate_with_underscore: bool) -> String {
    let suffix = if separate_with_underscore { "_id" } else { "id" };

    format!("{}{suffix}", underscore(demodulize(class_name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use limber_inflector::Mode;

    #[test]
    fn tableize_class_names() {
        assert_eq!(tableize("LimberRecord"), "limber_records");
        assert_eq!(tableize("Person"), "people");
        assert_eq!(tableize("RawScaledScorer"), "raw_scaled_scorers");
        assert_eq!(tableize("Category"), "categories");
    }

    #[test]
    fn classify_table_names() {
        assert_eq!(classify("limber_records"), "LimberRecord");
        assert_eq!(classify("people"), "Person");
        assert_eq!(classify("categories"), "Category");
    }

    #[test]
    fn tableize_with_a_custom_inflector() {
        let inflector = Inflector::builder(Mode::Classical).build().unwrap();

        assert_eq!(tableize_with(&inflector, "Formula"), "formulae");
        assert_eq!(classify_with(&inflector, "formulae"), "Formula");
    }

    #[test]
    fn foreign_keys() {
        assert_eq!(foreign_key("Models\\Person", true), "person_id");
        assert_eq!(foreign_key("Models\\Person", false), "personid");
        assert_eq!(foreign_key("MessageQueue", true), "message_queue_id");
    }
}
