//! Structural validation of CURP codes.
//!
//! Validation never fails: every problem becomes a message in
//! `ValidationResult::errors` and clears the `valid` flag. The homoclave is
//! checked for shape only; it is not recomputed from the other fields.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

use crate::generate::{date_field, DATE_FORMAT};
use crate::personal::Sex;
use crate::tables::{state_code, state_name, CONSONANTS, STATES};

#[cfg(feature = "serialization")]
use serde::Serialize;

pub const CURP_LENGTH: usize = 18;

static CURP_GRAMMAR: Lazy<Regex> = Lazy::new(|| {
    let mut states: Vec<&str> = STATES.keys().copied().collect();
    states.sort_unstable();
    let pattern = format!(
        "^[A-ZÑ]{{4}}[0-9]{{6}}[HMX](?:{})[{}]{{3}}[A-Z0-9]{{2}}$",
        states.join("|"),
        CONSONANTS
    );
    Regex::new(&pattern).expect("CURP grammar is a valid regex")
});

/// The fixed-width fields of a CURP, in code order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub enum Token {
    #[cfg_attr(feature = "serialization", serde(rename = "iniciales"))]
    Initials,
    #[cfg_attr(feature = "serialization", serde(rename = "fecha"))]
    Date,
    #[cfg_attr(feature = "serialization", serde(rename = "sexo"))]
    Sex,
    #[cfg_attr(feature = "serialization", serde(rename = "estado"))]
    State,
    #[cfg_attr(feature = "serialization", serde(rename = "consonantes"))]
    Consonants,
    #[cfg_attr(feature = "serialization", serde(rename = "homoclave"))]
    Homoclave,
}

impl Token {
    pub fn key(self) -> &'static str {
        match self {
            Token::Initials => "iniciales",
            Token::Date => "fecha",
            Token::Sex => "sexo",
            Token::State => "estado",
            Token::Consonants => "consonantes",
            Token::Homoclave => "homoclave",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct ValidationResult {
    pub curp: String,
    #[cfg_attr(feature = "serialization", serde(rename = "valida"))]
    pub valid: bool,
    #[cfg_attr(feature = "serialization", serde(rename = "errores"))]
    pub errors: Vec<String>,
    /// Decoded values: the date as `DD/MM/YYYY`, sex and state as display
    /// names, everything else verbatim.
    pub tokens: BTreeMap<Token, String>,
    #[cfg_attr(feature = "serialization", serde(rename = "detalles"))]
    pub details: Vec<String>,
}

impl ValidationResult {
    fn new(curp: String) -> ValidationResult {
        ValidationResult {
            curp,
            valid: true,
            errors: Vec::new(),
            tokens: BTreeMap::new(),
            details: Vec::new(),
        }
    }

    fn fail(&mut self, error: String) {
        self.valid = false;
        self.errors.push(error);
    }

    fn decoded(&mut self, token: Token, value: String, detail: String) {
        self.tokens.insert(token, value);
        self.details.push(detail);
    }

    pub fn token(&self, token: Token) -> Option<&str> {
        self.tokens.get(&token).map(String::as_str)
    }

    /// Rebuilds the code from the decoded tokens, or `None` if any token is
    /// missing.
    pub fn reassemble(&self) -> Option<String> {
        let date = NaiveDate::parse_from_str(self.token(Token::Date)?, DATE_FORMAT).ok()?;
        let sex = Sex::from_label(self.token(Token::Sex)?)?;
        let state = state_code(self.token(Token::State)?)?;

        let mut code = String::with_capacity(CURP_LENGTH + 2);
        code.push_str(self.token(Token::Initials)?);
        code.push_str(&date_field(date));
        code.push(sex.code());
        code.push_str(state);
        code.push_str(self.token(Token::Consonants)?);
        code.push_str(self.token(Token::Homoclave)?);
        Some(code)
    }
}

/// The two-digit year belongs to the current century unless that would put
/// it after this year.
fn infer_year(yy: i32, today: NaiveDate) -> i32 {
    if yy <= today.year().rem_euclid(100) {
        2000 + yy
    } else {
        1900 + yy
    }
}

fn field(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}

fn two_digits(chars: &[char], start: usize) -> u32 {
    chars[start..start + 2]
        .iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0, |acc, d| acc * 10 + d)
}

pub fn is_well_formed(code: &str) -> bool {
    CURP_GRAMMAR.is_match(code)
}

/// Validates a CURP, inferring birth-year centuries from the local date.
pub fn validate_curp(code: &str) -> ValidationResult {
    validate_curp_on(code, Local::now().date_naive())
}

pub fn validate_curp_on(code: &str, today: NaiveDate) -> ValidationResult {
    let curp = code.trim().to_uppercase();
    let chars: Vec<char> = curp.chars().collect();
    let mut result = ValidationResult::new(curp);

    if chars.len() != CURP_LENGTH {
        result.fail(format!(
            "Longitud incorrecta: {} (esperado: {})",
            chars.len(),
            CURP_LENGTH
        ));
        debug!(curp = %result.curp, "rejected CURP length");
        return result;
    }

    if !is_well_formed(&result.curp) {
        result.fail("No cumple con la gramática de la CURP".to_string());
        debug!(curp = %result.curp, "rejected CURP grammar");
        return result;
    }

    let initials = field(&chars, 0, 4);
    let detail = format!("✓ Iniciales: {}", initials);
    result.decoded(Token::Initials, initials, detail);

    let yy = two_digits(&chars, 4) as i32;
    let month = two_digits(&chars, 6);
    let day = two_digits(&chars, 8);
    let year = infer_year(yy, today);
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => {
            let display = date.format(DATE_FORMAT).to_string();
            let detail = format!("✓ Fecha válida: {}", display);
            result.decoded(Token::Date, display, detail);
        }
        None => result.fail(format!(
            "Error en análisis léxico: la fecha {:02}/{:02}/{} no existe",
            day, month, year
        )),
    }

    match Sex::from_code(chars[10]) {
        Some(sex) => {
            let detail = format!("✓ Sexo: {}", sex.label());
            result.decoded(Token::Sex, sex.label().to_string(), detail);
        }
        None => result.fail(format!("Sexo inválido: {}", chars[10])),
    }

    let state = field(&chars, 11, 13);
    match state_name(&state) {
        Some(name) => {
            let detail = format!("✓ Estado: {}", name);
            result.decoded(Token::State, name.to_string(), detail);
        }
        None => result.fail(format!("Estado inválido: {}", state)),
    }

    let consonants = field(&chars, 13, 16);
    let detail = format!("✓ Consonantes internas: {}", consonants);
    result.decoded(Token::Consonants, consonants, detail);

    let homoclave = field(&chars, 16, 18);
    let detail = format!("✓ Homoclave: {}", homoclave);
    result.decoded(Token::Homoclave, homoclave, detail);

    debug!(curp = %result.curp, valid = result.valid, "validated CURP");
    result
}
