//! Spell-checking of name fields.
//!
//! A field passes through three gates and stops at the first that rejects
//! it: syntax, lexicon membership, then similarity suggestions.

use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::case::title_case;
use crate::distance::{suggest, Suggestion};
use crate::error::SyntaxError;
use crate::lexicon;
use crate::normalize::name_token;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

pub const MIN_FIELD_LENGTH: usize = 2;
pub const MAX_FIELD_LENGTH: usize = 50;

const ACCENTED_LETTERS: &str = "ÑñáéíóúüÁÉÍÓÚÜ";
const PUNCTUATION: &str = "-'.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FieldKind {
    #[cfg_attr(feature = "serialization", serde(rename = "nombre"))]
    Name,
    #[cfg_attr(feature = "serialization", serde(rename = "apellido"))]
    Surname,
}

impl FieldKind {
    pub fn default_config(self) -> SpellCheckConfig {
        match self {
            FieldKind::Name => SpellCheckConfig {
                max_results: 3,
                threshold: 65.0,
            },
            FieldKind::Surname => SpellCheckConfig {
                max_results: 3,
                threshold: 70.0,
            },
        }
    }

    fn is_listed(self, text: &str) -> bool {
        match self {
            FieldKind::Name => lexicon::is_valid_name(text),
            FieldKind::Surname => lexicon::is_valid_surname(text),
        }
    }

    fn entries(self) -> Box<dyn Iterator<Item = &'static str>> {
        match self {
            FieldKind::Name => Box::new(lexicon::all_names()),
            FieldKind::Surname => Box::new(lexicon::all_surnames()),
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<FieldKind, String> {
        match s.trim().to_lowercase().as_str() {
            "nombre" | "name" => Ok(FieldKind::Name),
            "apellido" | "apellido_paterno" | "apellido_materno" | "surname" => {
                Ok(FieldKind::Surname)
            }
            other => Err(format!("Tipo de campo desconocido: {}", other)),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldKind::Name => f.write_str("nombre"),
            FieldKind::Surname => f.write_str("apellido"),
        }
    }
}

/// How many suggestions to return, and the minimum similarity (0-100) a
/// lexicon entry needs to be suggested.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SpellCheckConfig {
    pub max_results: usize,
    pub threshold: f64,
}

impl Default for SpellCheckConfig {
    fn default() -> SpellCheckConfig {
        FieldKind::Name.default_config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ErrorCategory {
    #[cfg_attr(feature = "serialization", serde(rename = "sintactico"))]
    Syntactic,
    #[cfg_attr(feature = "serialization", serde(rename = "ortografico"))]
    Orthographic,
    #[cfg_attr(feature = "serialization", serde(rename = "desconocido"))]
    Unknown,
}

/// Outcome of checking one field. `category` is `None` exactly when the
/// field is valid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize))]
pub struct SuggestionResult {
    #[cfg_attr(feature = "serialization", serde(rename = "valido"))]
    pub valid: bool,
    #[cfg_attr(feature = "serialization", serde(rename = "tipo_error"))]
    pub category: Option<ErrorCategory>,
    #[cfg_attr(feature = "serialization", serde(rename = "mensaje"))]
    pub message: String,
    #[cfg_attr(feature = "serialization", serde(rename = "sugerencias"))]
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionResult {
    fn rejected(category: ErrorCategory, message: String) -> SuggestionResult {
        SuggestionResult {
            valid: false,
            category: Some(category),
            message,
            suggestions: Vec::new(),
        }
    }

    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

#[inline]
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphabetic()
        || ACCENTED_LETTERS.contains(c)
        || c.is_whitespace()
        || PUNCTUATION.contains(c)
}

fn has_run<F>(chars: &[char], len: usize, pred: F) -> bool
where
    F: Fn(&[char]) -> bool,
{
    chars.windows(len).any(pred)
}

/// Cheap checks on the raw text, reported in a fixed order.
pub fn check_syntax(text: &str) -> Result<(), SyntaxError> {
    let chars: Vec<char> = text.trim().chars().collect();

    if chars.is_empty() {
        return Err(SyntaxError::Empty);
    }
    if chars.len() < MIN_FIELD_LENGTH {
        return Err(SyntaxError::TooShort);
    }
    if chars.len() > MAX_FIELD_LENGTH {
        return Err(SyntaxError::TooLong);
    }
    if chars.iter().any(|c| c.is_numeric()) {
        return Err(SyntaxError::ContainsDigits);
    }
    if !chars.iter().all(|&c| is_allowed(c)) {
        return Err(SyntaxError::ForbiddenCharacters);
    }
    if has_run(&chars, 2, |w| w.iter().all(|c| c.is_whitespace())) {
        return Err(SyntaxError::RepeatedWhitespace);
    }
    // Three of the same character in a row is almost always a typo
    if has_run(&chars, 3, |w| w[0] == w[1] && w[1] == w[2]) {
        return Err(SyntaxError::RepeatedCharacters);
    }

    Ok(())
}

pub fn validate_field(text: &str, kind: FieldKind) -> SuggestionResult {
    validate_field_with(text, kind, &kind.default_config())
}

pub fn validate_field_with(
    text: &str,
    kind: FieldKind,
    config: &SpellCheckConfig,
) -> SuggestionResult {
    let shown = text.trim();

    if let Err(e) = check_syntax(text) {
        debug!(field = %kind, error = %e, "field failed syntax");
        return SuggestionResult::rejected(
            ErrorCategory::Syntactic,
            format!("Error sintáctico: {}", e),
        );
    }

    if kind.is_listed(text) {
        let message = match kind {
            FieldKind::Name => "Nombre válido",
            FieldKind::Surname => "Apellido válido",
        };
        return SuggestionResult {
            valid: true,
            category: None,
            message: message.to_string(),
            suggestions: Vec::new(),
        };
    }

    let token = name_token(text);
    let suggestions: Vec<Suggestion> =
        suggest(&token, kind.entries(), config.max_results, config.threshold)
            .into_iter()
            .map(|s| Suggestion {
                word: title_case(&s.word).into(),
                similarity: s.similarity,
            })
            .collect();

    let best = match suggestions.first() {
        Some(best) => best.word.clone(),
        None => {
            debug!(field = %kind, "no suggestion above threshold");
            let message = match kind {
                FieldKind::Name => format!("'{}' no es un nombre reconocido", shown),
                FieldKind::Surname => format!("El apellido '{}' no es reconocido", shown),
            };
            return SuggestionResult::rejected(ErrorCategory::Unknown, message);
        }
    };

    let message = match kind {
        FieldKind::Name => format!(
            "'{}' no está en el diccionario. ¿Quisiste decir '{}'?",
            shown, best
        ),
        FieldKind::Surname => format!(
            "El apellido '{}' no está bien escrito. ¿Quisiste decir '{}'?",
            shown, best
        ),
    };
    SuggestionResult {
        valid: false,
        category: Some(ErrorCategory::Orthographic),
        message,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_rules_in_order() {
        assert_eq!(Err(SyntaxError::Empty), check_syntax(""));
        assert_eq!(Err(SyntaxError::Empty), check_syntax("   "));
        assert_eq!(Err(SyntaxError::TooShort), check_syntax("A"));
        assert_eq!(Err(SyntaxError::TooLong), check_syntax(&"ab".repeat(26)));
        assert_eq!(Err(SyntaxError::ContainsDigits), check_syntax("Ana2"));
        assert_eq!(Err(SyntaxError::ForbiddenCharacters), check_syntax("Ana@"));
        assert_eq!(Err(SyntaxError::ForbiddenCharacters), check_syntax("Ana_Luz"));
        assert_eq!(Err(SyntaxError::RepeatedWhitespace), check_syntax("Ana  Luz"));
        assert_eq!(Err(SyntaxError::RepeatedCharacters), check_syntax("Annna"));
        // Length outranks digits
        assert_eq!(Err(SyntaxError::TooShort), check_syntax("1"));
        assert_eq!(Err(SyntaxError::ContainsDigits), check_syntax("A1"));
    }

    #[test]
    fn syntax_accepts_spanish_text() {
        assert_eq!(Ok(()), check_syntax("José Luis"));
        assert_eq!(Ok(()), check_syntax("Núñez"));
        assert_eq!(Ok(()), check_syntax("O'Brien"));
        assert_eq!(Ok(()), check_syntax("Jiménez-López"));
        assert_eq!(Ok(()), check_syntax("Ma."));
        assert_eq!(Ok(()), check_syntax("  Ana  "));
        assert_eq!(Ok(()), check_syntax("Anna"));
        assert_eq!(Ok(()), check_syntax(&"ab".repeat(25)));
    }

    #[test]
    fn valid_name() {
        let result = validate_field("María José", FieldKind::Name);
        assert!(result.valid);
        assert_eq!(None, result.category);
        assert_eq!("Nombre válido", result.message);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn valid_surname() {
        let result = validate_field("de la Cruz", FieldKind::Surname);
        assert!(result.valid);
        assert_eq!("Apellido válido", result.message);
    }

    #[test]
    fn syntax_error_short_circuits() {
        let result = validate_field("Y4ir", FieldKind::Name);
        assert!(!result.valid);
        assert_eq!(Some(ErrorCategory::Syntactic), result.category);
        assert_eq!("Error sintáctico: No puede contener números", result.message);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn misspelled_name() {
        let result = validate_field("Yairr", FieldKind::Name);
        assert!(!result.valid);
        assert_eq!(Some(ErrorCategory::Orthographic), result.category);
        assert!(!result.suggestions.is_empty());
        assert!(result.suggestions.len() <= 3);
        assert_eq!("Yair", result.best().unwrap().word.as_str());
        assert_eq!(80.0, result.best().unwrap().similarity);
        assert_eq!(
            "'Yairr' no está en el diccionario. ¿Quisiste decir 'Yair'?",
            result.message
        );
        assert!(result
            .suggestions
            .windows(2)
            .all(|w| w[0].similarity >= w[1].similarity));
        assert!(result.suggestions.iter().all(|s| s.similarity >= 65.0));
    }

    #[test]
    fn misspelled_surname() {
        let result = validate_field("Gonzales", FieldKind::Surname);
        assert_eq!(Some(ErrorCategory::Orthographic), result.category);
        assert_eq!("Gonzalez", result.best().unwrap().word.as_str());
        assert!(result.message.starts_with("El apellido 'Gonzales' no está bien escrito"));
        assert!(result.suggestions.iter().all(|s| s.similarity >= 70.0));
    }

    #[test]
    fn unknown_name() {
        let result = validate_field("Zxqwv", FieldKind::Name);
        assert!(!result.valid);
        assert_eq!(Some(ErrorCategory::Unknown), result.category);
        assert_eq!("'Zxqwv' no es un nombre reconocido", result.message);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn unknown_surname() {
        let result = validate_field("Zxqwv", FieldKind::Surname);
        assert_eq!(Some(ErrorCategory::Unknown), result.category);
        assert_eq!("El apellido 'Zxqwv' no es reconocido", result.message);
    }

    #[test]
    fn custom_config() {
        let config = SpellCheckConfig {
            max_results: 1,
            threshold: 0.0,
        };
        let result = validate_field_with("Zxqwv", FieldKind::Name, &config);
        assert_eq!(Some(ErrorCategory::Orthographic), result.category);
        assert_eq!(1, result.suggestions.len());
    }

    #[test]
    fn field_kinds() {
        assert_eq!(Ok(FieldKind::Name), "nombre".parse());
        assert_eq!(Ok(FieldKind::Surname), "apellido_paterno".parse());
        assert_eq!(Ok(FieldKind::Surname), "Surname".parse());
        assert!("edad".parse::<FieldKind>().is_err());
        assert_eq!(65.0, FieldKind::Name.default_config().threshold);
        assert_eq!(70.0, FieldKind::Surname.default_config().threshold);
    }
}
