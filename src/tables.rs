//! Fixed reference data for CURP productions, compiled from
//! `build/curp_data.json`.

/// State code to full name, including `NE` (born abroad).
pub static STATES: phf::Map<&'static str, &'static str> =
    include!(concat!(env!("OUT_DIR"), "/states.rs"));

/// Initials that would spell an offensive word; the fourth letter is
/// replaced with `X` when one of these comes out of generation.
pub static FORBIDDEN_INITIALS: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/forbidden_initials.rs"));

/// Leading given names skipped when a second given name is present.
pub static IGNORABLE_GIVEN_NAMES: phf::Set<&'static str> =
    include!(concat!(env!("OUT_DIR"), "/ignorable_given_names.rs"));

pub const VOWELS: &str = "AEIOU";
pub const CONSONANTS: &str = "BCDFGHJKLMNÑPQRSTVWXYZ";
pub const HOMOCLAVE_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// Full name for a two-letter state code, or `None` if the code is unknown.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATES.get(code).copied()
}

/// Inverse of `state_name`.
pub fn state_code(name: &str) -> Option<&'static str> {
    STATES
        .entries()
        .find(|(_, full)| **full == name)
        .map(|(&code, _)| code)
}

#[inline]
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

#[inline]
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(c)
}

#[inline]
pub fn homoclave_value(c: char) -> u32 {
    HOMOCLAVE_ALPHABET
        .chars()
        .position(|a| a == c)
        .map_or(0, |i| i as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_table() {
        assert_eq!(33, STATES.len());
        assert_eq!(Some("Chiapas"), state_name("CS"));
        assert_eq!(Some("Nacido en el Extranjero"), state_name("NE"));
        assert_eq!(None, state_name("ZZ"));
        assert_eq!(None, state_name("cs"));
    }

    #[test]
    fn state_inverse() {
        for (code, name) in STATES.entries() {
            assert_eq!(Some(*code), state_code(name));
        }
        assert_eq!(None, state_code("Atlantis"));
    }

    #[test]
    fn forbidden() {
        assert!(FORBIDDEN_INITIALS.contains("PUTO"));
        assert!(FORBIDDEN_INITIALS.contains("BUEY"));
        assert!(!FORBIDDEN_INITIALS.contains("PEAY"));
    }

    #[test]
    fn alphabet_values() {
        assert_eq!(0, homoclave_value('0'));
        assert_eq!(9, homoclave_value('9'));
        assert_eq!(10, homoclave_value('A'));
        assert_eq!(23, homoclave_value('N'));
        assert_eq!(24, homoclave_value('Ñ'));
        assert_eq!(25, homoclave_value('O'));
        assert_eq!(36, homoclave_value('Z'));
        assert_eq!(0, homoclave_value('-'));
    }

    #[test]
    fn letter_classes() {
        assert!(is_vowel('A'));
        assert!(!is_vowel('Y'));
        assert!(is_consonant('Ñ'));
        assert!(is_consonant('Y'));
        assert!(!is_consonant('E'));
        assert!(!is_consonant(' '));
    }
}
