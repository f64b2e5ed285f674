/// Puts an acute accent on every plain vowel: "Pao" -> "Páó".
pub fn acute(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'a' => 'á',
            'e' => 'é',
            'i' => 'í',
            'o' => 'ó',
            'u' => 'ú',
            'A' => 'Á',
            'E' => 'É',
            'I' => 'Í',
            'O' => 'Ó',
            'U' => 'Ú',
            other => other,
        })
        .collect()
}

/// Replaces accented Latin letters with their closest ASCII letter:
/// "Ação é boa" -> "Acao e boa". Characters without a mapping are kept.
pub fn transliterate(s: &str) -> String {
    s.chars().map(|c| ascii_equivalent(c).unwrap_or(c)).collect()
}

fn ascii_equivalent(c: char) -> Option<char> {
    let ascii = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Æ' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ð' => 'D',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' => 'Y',
        'Þ' => 'b',
        'ß' => 's',
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'æ' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ð' => 'd',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'þ' => 'b',
        'Ŕ' => 'R',
        'ŕ' => 'r',
        _ => return None,
    };

    Some(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn acute_accents_vowels() {
        assert_eq!(acute("aeiou AEIOU xyz"), "áéíóú ÁÉÍÓÚ xyz");
    }

    #[test]
    fn transliterate_strips_accents() {
        assert_eq!(transliterate("Ação é boa"), "Acao e boa");
        assert_eq!(transliterate("Ærøskøbing"), "Aroskobing");
        assert_eq!(transliterate("straße"), "strase");
        assert_eq!(transliterate("Müller"), "Muller");
    }

    #[test]
    fn transliterate_keeps_unmapped_characters() {
        assert_eq!(transliterate("plain ascii"), "plain ascii");
        assert_eq!(transliterate("10 €"), "10 €");
    }

    #[test]
    fn transliterate_undoes_acute() {
        assert_eq!(transliterate(&acute("limber")), "limber");
    }
}
