//! Romanization of translated text.
//!
//! Only Cyrillic scripts are covered for now.

/// Languages written in Cyrillic, by primary subtag.
const CYRILLIC_LANGS: &[&str] = &["ru", "uk", "bg", "sr", "mk", "kk", "ky"];

fn cyrillic_to_latin(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'А' => "A",
        'а' => "a",
        'Б' => "B",
        'б' => "b",
        'В' => "V",
        'в' => "v",
        'Г' => "G",
        'г' => "g",
        'Д' => "D",
        'д' => "d",
        'Е' => "E",
        'е' => "e",
        'Ё' => "Yo",
        'ё' => "yo",
        'Ж' => "Zh",
        'ж' => "zh",
        'З' => "Z",
        'з' => "z",
        'И' => "I",
        'и' => "i",
        'Й' => "Y",
        'й' => "y",
        'К' => "K",
        'к' => "k",
        'Л' => "L",
        'л' => "l",
        'М' => "M",
        'м' => "m",
        'Н' => "N",
        'н' => "n",
        'О' => "O",
        'о' => "o",
        'П' => "P",
        'п' => "p",
        'Р' => "R",
        'р' => "r",
        'С' => "S",
        'с' => "s",
        'Т' => "T",
        'т' => "t",
        'У' => "U",
        'у' => "u",
        'Ф' => "F",
        'ф' => "f",
        'Х' => "Kh",
        'х' => "kh",
        'Ц' => "Ts",
        'ц' => "ts",
        'Ч' => "Ch",
        'ч' => "ch",
        'Ш' => "Sh",
        'ш' => "sh",
        'Щ' => "Shch",
        'щ' => "shch",
        'Ы' => "Y",
        'ы' => "y",
        'Ъ' | 'ъ' => "",
        'Ь' | 'ь' => "'",
        'Э' => "E",
        'э' => "e",
        'Ю' => "Yu",
        'ю' => "yu",
        'Я' => "Ya",
        'я' => "ya",
        _ => return None,
    };
    Some(latin)
}

/// Romanize `text` written in `lang`.
///
/// Region subtags are ignored (`ru-RU` is `ru`). Returns `None` for empty
/// input or a language without a table; characters outside the table pass
/// through unchanged.
pub fn transliterate(text: &str, lang: &str) -> Option<String> {
    if text.is_empty() || lang.is_empty() {
        return None;
    }

    let primary = lang.split('-').next().unwrap_or(lang).to_lowercase();
    if !CYRILLIC_LANGS.contains(&primary.as_str()) {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match cyrillic_to_latin(ch) {
            Some(latin) => out.push_str(latin),
            None => out.push(ch),
        }
    }
    Some(out)
}
