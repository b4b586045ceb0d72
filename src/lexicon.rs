//! Recognized Mexican given names and surnames.
//!
//! Both sets hold `NameToken`s (see `normalize::name_token`), so accented
//! and unaccented spellings of the same name are one entry.

use crate::normalize::{name_token, words};

static GIVEN_NAMES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/given_names.rs"));

static SURNAMES: phf::Set<&'static str> = include!(concat!(env!("OUT_DIR"), "/surnames.rs"));

// Allowed inside compound surnames without being surnames themselves
static SURNAME_CONNECTIVES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/surname_connectives.rs"));

/// A compound given name is valid if listed as a whole, or if each word is
/// a listed given name ("Julio Cesar").
pub fn is_valid_name(text: &str) -> bool {
    let token = name_token(text);
    if token.is_empty() {
        return false;
    }
    if GIVEN_NAMES.contains(token.as_str()) {
        return true;
    }

    let all_listed = words(&token).iter().all(|w| GIVEN_NAMES.contains(*w));
    all_listed
}

/// A compound surname is valid if listed as a whole, or if every word is a
/// listed surname or a connective ("de", "la", ...). A single word must be
/// listed.
pub fn is_valid_surname(text: &str) -> bool {
    let token = name_token(text);
    if token.is_empty() {
        return false;
    }
    if SURNAMES.contains(token.as_str()) {
        return true;
    }

    let parts = words(&token);
    parts.len() > 1
        && parts
            .iter()
            .all(|w| SURNAMES.contains(*w) || SURNAME_CONNECTIVES.contains(*w))
}

pub fn all_names() -> impl Iterator<Item = &'static str> {
    GIVEN_NAMES.iter().copied()
}

pub fn all_surnames() -> impl Iterator<Item = &'static str> {
    SURNAMES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_names() {
        assert!(is_valid_name("Yair"));
        assert!(is_valid_name("maría"));
        assert!(is_valid_name("  JESÚS "));
        assert!(!is_valid_name("Xyzzy"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn compound_names() {
        assert!(is_valid_name("José Luis"));
        assert!(is_valid_name("julio   cesar"));
        assert!(is_valid_name("Maria Fernanda"));
        assert!(!is_valid_name("Julio Xyzzy"));
    }

    #[test]
    fn simple_surnames() {
        assert!(is_valid_surname("Pérez"));
        assert!(is_valid_surname("NUÑEZ"));
        assert!(is_valid_surname("núñez"));
        assert!(!is_valid_surname("Perezz"));
    }

    #[test]
    fn compound_surnames() {
        assert!(is_valid_surname("de la Cruz"));
        assert!(is_valid_surname("San Martín"));
        assert!(is_valid_surname("de los Ríos"));
        assert!(is_valid_surname("García-López"));
        assert!(!is_valid_surname("de la Xyzzy"));
    }

    #[test]
    fn connective_alone_is_not_a_surname() {
        assert!(!is_valid_surname("de"));
    }

    #[test]
    fn names_and_surnames_are_separate() {
        assert!(is_valid_name("Santiago"));
        assert!(is_valid_surname("Santiago"));
        assert!(!is_valid_name("Aguilar"));
        assert!(!is_valid_surname("Yair"));
    }

    #[test]
    fn iteration() {
        assert!(all_names().any(|n| n == "YAIR"));
        assert!(all_surnames().any(|n| n == "DE LA CRUZ"));
        assert!(all_names().all(|n| n == name_token(n)));
        assert!(all_surnames().all(|n| n == name_token(n)));
    }
}
