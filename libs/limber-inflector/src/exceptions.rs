/// Singular/plural pairs that bypass the suffix rules.
pub(crate) const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("ox", "oxen"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("die", "dice"),
    ("pie", "pies"),
    ("tie", "ties"),
    ("lie", "lies"),
    ("octopus", "octopi"),
    ("cactus", "cacti"),
    ("axis", "axes"),
    ("testis", "testes"),
    ("criterion", "criteria"),
    ("phenomenon", "phenomena"),
    ("datum", "data"),
    ("medium", "media"),
    ("fez", "fezzes"),
];

/// Words with identical singular and plural forms. Any word ending in one of
/// these is uncountable too, so none of them may be a common ending of
/// unrelated words ("rice" would catch "price").
pub(crate) const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
    "deer",
    "moose",
    "bison",
    "salmon",
    "trout",
    "swine",
    "aircraft",
    "offspring",
    "software",
    "hardware",
    "furniture",
    "luggage",
    "advice",
    "knowledge",
    "music",
    "traffic",
    "feedback",
    "metadata",
];
