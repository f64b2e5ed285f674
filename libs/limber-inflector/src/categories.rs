//! Latin and Greek plurals registered on top of the base tables in classical mode.

pub(crate) const CLASSICAL_PLURALS: &[(&str, &str)] = &[
    ("([ti])um$", "${1}a"),
    ("(criteri|phenomen|automat)on$", "${1}a"),
    ("(formul|antenn|vertebr|alumn|larv|nebul|nov)a$", "${1}ae"),
    ("(stigm|schem|dogm|lemm)a$", "${1}ata"),
    ("(radi|fung|nucle|stimul|syllab|foc|cact|alumn)us$", "${1}i"),
    ("(append|matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("(cherub|seraph)$", "${1}im"),
];

pub(crate) const CLASSICAL_SINGULARS: &[(&str, &str)] = &[
    ("([ti])a$", "${1}um"),
    ("(criteri|phenomen|automat)a$", "${1}on"),
    ("(formul|antenn|vertebr|alumn|larv|nebul|nov)ae$", "${1}a"),
    ("(stigm|schem|dogm|lemm)ata$", "${1}a"),
    ("(radi|fung|nucle|stimul|syllab|foc|cact|alumn)i$", "${1}us"),
    ("(append|matr)ices$", "${1}ix"),
    ("(cherub|seraph)im$", "${1}"),
];
