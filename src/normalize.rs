//! Conversion of free-form name input into the uppercase, letters-only
//! forms used by the lexicons (`name_token`) and by CURP generation
//! (`normalize_for_code`).

use std::borrow::Cow;
use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

use smallvec::SmallVec;

const COMBINING_TILDE: char = '\u{303}';

#[inline]
pub fn is_combining(c: char) -> bool {
    canonical_combining_class(c) > 0
}

#[inline]
fn already_stripped(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii())
}

fn strip_marks(text: &str, keep_enye: bool) -> Cow<str> {
    if already_stripped(text) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut decomposed = text.nfd().peekable();
    while let Some(c) = decomposed.next() {
        if keep_enye && (c == 'N' || c == 'n') && decomposed.peek() == Some(&COMBINING_TILDE) {
            decomposed.next();
            result.push(if c == 'N' { 'Ñ' } else { 'ñ' });
        } else if !is_combining(c) {
            result.push(c);
        }
    }
    Cow::Owned(result)
}

/// Removes every combining mark after canonical decomposition, so `Ñ`
/// becomes `N`.
pub fn strip_diacritics(text: &str) -> Cow<str> {
    strip_marks(text, false)
}

/// Like `strip_diacritics`, but recomposes `N` + combining tilde back into
/// `Ñ`/`ñ`, which the lexicons treat as a letter of its own.
pub fn fold_accents(text: &str) -> Cow<str> {
    strip_marks(text, true)
}

#[inline]
pub fn is_token_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}

/// Normalizes text for the CURP productions: diacritics are stripped,
/// letters and spaces survive, everything else is dropped, and the result
/// is trimmed.
pub fn normalize_for_code(text: &str) -> String {
    let upper = strip_diacritics(text).to_uppercase();
    upper
        .chars()
        .filter(|&c| is_token_letter(c) || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Normalizes text into a `NameToken` for lexicon lookups. Hyphens separate
/// words; other punctuation is dropped; runs of whitespace collapse.
pub fn name_token(text: &str) -> String {
    let upper = fold_accents(text).to_uppercase();
    let cleaned: String = upper
        .chars()
        .filter_map(|c| {
            if is_token_letter(c) {
                Some(c)
            } else if c.is_whitespace() || c == '-' {
                Some(' ')
            } else {
                None
            }
        })
        .collect();
    let joined = words(&cleaned).join(" ");
    joined
}

pub fn words(text: &str) -> SmallVec<[&str; 4]> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!("Perez", strip_diacritics("Pérez"));
        assert_eq!("AEIOU", strip_diacritics("ÁÉÍÓÚ"));
        assert_eq!("Guell", strip_diacritics("Güell"));
    }

    #[test]
    fn strips_enye_tilde() {
        assert_eq!("NUNEZ", strip_diacritics("NÚÑEZ"));
    }

    #[test]
    fn folding_keeps_enye() {
        assert_eq!("NUÑEZ", fold_accents("NÚÑEZ"));
        assert_eq!("peña", fold_accents("peña"));
        // Decomposed input recomposes to the same letter
        assert_eq!("Ñ", fold_accents("N\u{303}"));
        assert_eq!("Perez", fold_accents("Pérez"));
    }

    #[test]
    fn ascii_is_borrowed() {
        assert!(matches!(strip_diacritics("GARCIA"), Cow::Borrowed(_)));
    }

    #[test]
    fn code_normalization() {
        assert_eq!("PEREZ", normalize_for_code("  Pérez "));
        assert_eq!("DE LA CRUZ", normalize_for_code("de la Cruz"));
        assert_eq!("OBRIEN", normalize_for_code("O'Brien"));
        assert_eq!("PENA", normalize_for_code("Peña"));
        assert_eq!("", normalize_for_code(""));
        assert_eq!("", normalize_for_code("123"));
    }

    #[test]
    fn tokens() {
        assert_eq!("JULIO CESAR", name_token("  julio   César  "));
        assert_eq!("JIMENEZ LOPEZ", name_token("Jiménez-López"));
        assert_eq!("MA", name_token("Ma."));
        assert_eq!("PEÑA", name_token("peña"));
        assert_eq!("", name_token(""));
    }
}
