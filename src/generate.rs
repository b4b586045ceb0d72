//! CURP generation from personal data.
//!
//! A code is the concatenation of six productions:
//!
//! ```text
//! CURP ::= <initials> <date> <sex> <state> <consonants> <homoclave>
//!            4 letters  YYMMDD  H|M|X  2 letters 3 letters  2 chars
//! ```
//!
//! Name fields are normalized first (see `normalize::normalize_for_code`),
//! so accents and punctuation never reach the code.

use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use crate::error::GenerationError;
use crate::normalize::normalize_for_code;
use crate::personal::{PersonalData, Sex, StateCode};
use crate::tables::{homoclave_value, is_consonant, is_vowel, FORBIDDEN_INITIALS, IGNORABLE_GIVEN_NAMES};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

const MISSING: char = 'X';

/// The given name that contributes to the code: a leading "MARIA" or
/// "JOSE" (and similar) is skipped when another name follows it.
pub fn principal_given_name(normalized: &str) -> &str {
    let mut words = normalized.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) if IGNORABLE_GIVEN_NAMES.contains(first) => second,
        (Some(first), _) => first,
        (None, _) => "",
    }
}

#[inline]
fn first_letter(word: &str) -> char {
    word.chars().next().unwrap_or(MISSING)
}

#[inline]
fn first_inner<F: Fn(char) -> bool>(word: &str, matches: F) -> char {
    word.chars().skip(1).find(|&c| matches(c)).unwrap_or(MISSING)
}

/// First vowel after the first letter, or `X`.
pub fn first_inner_vowel(word: &str) -> char {
    first_inner(word, is_vowel)
}

/// First consonant after the first letter, or `X`.
pub fn first_inner_consonant(word: &str) -> char {
    first_inner(word, is_consonant)
}

/// The four leading letters, with the profanity filter applied. Inputs are
/// raw field values.
pub fn initials(paternal_surname: &str, maternal_surname: &str, given_name: &str) -> String {
    let paternal = normalize_for_code(paternal_surname);
    let maternal = normalize_for_code(maternal_surname);
    let given = normalize_for_code(given_name);
    let principal = principal_given_name(&given);

    let mut initials = String::with_capacity(5);
    initials.push(first_letter(&paternal));
    initials.push(first_inner_vowel(&paternal));
    initials.push(first_letter(&maternal));
    initials.push(first_letter(principal));

    if FORBIDDEN_INITIALS.contains(initials.as_str()) {
        initials.pop();
        initials.push(MISSING);
    }
    initials
}

/// The three inner consonants. Inputs are raw field values.
pub fn consonants(paternal_surname: &str, maternal_surname: &str, given_name: &str) -> String {
    let paternal = normalize_for_code(paternal_surname);
    let maternal = normalize_for_code(maternal_surname);
    let given = normalize_for_code(given_name);
    let principal = principal_given_name(&given);

    [
        first_inner_consonant(&paternal),
        first_inner_consonant(&maternal),
        first_inner_consonant(principal),
    ]
    .iter()
    .collect()
}

/// Parses a `DD/MM/YYYY` birth date and checks it lies between 1900 and
/// `today`, inclusive.
pub fn parse_birth_date(text: &str, today: NaiveDate) -> Result<NaiveDate, GenerationError> {
    let trimmed = text.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| GenerationError::InvalidDateFormat(trimmed.to_string()))?;

    if date > today {
        return Err(GenerationError::FutureDate(trimmed.to_string()));
    }
    if date.year() < 1900 {
        return Err(GenerationError::DateBefore1900(trimmed.to_string()));
    }
    Ok(date)
}

/// `YYMMDD`.
pub fn date_field(date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        date.year().rem_euclid(100),
        date.month(),
        date.day()
    )
}

/// Check digit over a 16-character partial code: each character's index in
/// the homoclave alphabet is weighted by `18 - position`, and the digit is
/// `(10 - sum % 10) % 10`, written twice. Positions past 18 weigh
/// negatively rather than overflowing.
pub fn homoclave(partial: &str) -> String {
    let sum: i64 = partial
        .chars()
        .enumerate()
        .map(|(i, c)| i64::from(homoclave_value(c)) * (18 - i as i64))
        .sum();
    let digit = (10 - sum.rem_euclid(10)) % 10;

    let c = char::from_digit(digit as u32, 10).unwrap_or('0');
    [c, c].iter().collect()
}

/// Generates a CURP, treating the local date as "today".
pub fn generate_curp(data: &PersonalData) -> Result<String, GenerationError> {
    generate_curp_on(data, Local::now().date_naive())
}

/// Generates a CURP, rejecting birth dates after `today`.
pub fn generate_curp_on(data: &PersonalData, today: NaiveDate) -> Result<String, GenerationError> {
    let initials = initials(
        &data.paternal_surname,
        &data.maternal_surname,
        &data.given_name,
    );
    let date = parse_birth_date(&data.birth_date, today)?;
    let sex: Sex = data.sex.parse()?;
    let state: StateCode = data.state.parse()?;
    let consonants = consonants(
        &data.paternal_surname,
        &data.maternal_surname,
        &data.given_name,
    );

    let mut code = String::with_capacity(20);
    code.push_str(&initials);
    code.push_str(&date_field(date));
    code.push(sex.code());
    code.push_str(state.code());
    code.push_str(&consonants);
    let check = homoclave(&code);
    code.push_str(&check);

    debug!(curp = %code, "generated CURP");
    Ok(code)
}
