use crate::error::GenerationError;
use crate::tables::STATES;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Raw personal data as a caller collects it. Name fields are free text;
/// the birth date is a `DD/MM/YYYY` literal. Nothing here is checked until
/// generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PersonalData {
    #[cfg_attr(feature = "serialization", serde(rename = "apellido_paterno"))]
    pub paternal_surname: String,
    #[cfg_attr(feature = "serialization", serde(rename = "apellido_materno"))]
    pub maternal_surname: String,
    #[cfg_attr(feature = "serialization", serde(rename = "nombre"))]
    pub given_name: String,
    #[cfg_attr(feature = "serialization", serde(rename = "fecha_nacimiento"))]
    pub birth_date: String,
    #[cfg_attr(feature = "serialization", serde(rename = "sexo"))]
    pub sex: String,
    #[cfg_attr(feature = "serialization", serde(rename = "estado"))]
    pub state: String,
}

impl PersonalData {
    pub fn new(
        paternal_surname: &str,
        maternal_surname: &str,
        given_name: &str,
        birth_date: &str,
        sex: &str,
        state: &str,
    ) -> PersonalData {
        PersonalData {
            paternal_surname: paternal_surname.to_string(),
            maternal_surname: maternal_surname.to_string(),
            given_name: given_name.to_string(),
            birth_date: birth_date.to_string(),
            sex: sex.to_string(),
            state: state.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Sex {
    #[cfg_attr(feature = "serialization", serde(rename = "H"))]
    Male,
    #[cfg_attr(feature = "serialization", serde(rename = "M"))]
    Female,
    #[cfg_attr(feature = "serialization", serde(rename = "X"))]
    NonBinary,
}

impl Sex {
    pub fn code(self) -> char {
        match self {
            Sex::Male => 'H',
            Sex::Female => 'M',
            Sex::NonBinary => 'X',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Hombre",
            Sex::Female => "Mujer",
            Sex::NonBinary => "No binario",
        }
    }

    pub fn from_code(c: char) -> Option<Sex> {
        match c {
            'H' => Some(Sex::Male),
            'M' => Some(Sex::Female),
            'X' => Some(Sex::NonBinary),
            _ => None,
        }
    }

    pub fn from_label(label: &str) -> Option<Sex> {
        [Sex::Male, Sex::Female, Sex::NonBinary]
            .into_iter()
            .find(|s| s.label() == label)
    }
}

impl FromStr for Sex {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Sex, GenerationError> {
        let upper = s.trim().to_uppercase();
        let mut chars = upper.chars();
        let sex = match (chars.next(), chars.next()) {
            (Some(c), None) => Sex::from_code(c),
            _ => None,
        };
        sex.ok_or(GenerationError::InvalidSex(upper))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A two-letter code present in the state table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateCode(&'static str);

impl StateCode {
    pub fn code(self) -> &'static str {
        self.0
    }

    pub fn name(self) -> &'static str {
        STATES.get(self.0).copied().unwrap_or_default()
    }
}

impl FromStr for StateCode {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<StateCode, GenerationError> {
        let upper = s.trim().to_uppercase();
        STATES
            .get_key(upper.as_str())
            .map(|&code| StateCode(code))
            .ok_or(GenerationError::InvalidState(upper))
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_codes() {
        assert_eq!(Ok(Sex::Male), "h".parse());
        assert_eq!(Ok(Sex::Female), " M ".parse());
        assert_eq!(Ok(Sex::NonBinary), "X".parse());
        assert_eq!(
            Err(GenerationError::InvalidSex("F".to_string())),
            "f".parse::<Sex>()
        );
        assert!("HM".parse::<Sex>().is_err());
        assert!("".parse::<Sex>().is_err());
    }

    #[test]
    fn sex_labels() {
        assert_eq!("Hombre", Sex::Male.label());
        assert_eq!(Some(Sex::NonBinary), Sex::from_label("No binario"));
        assert_eq!(None, Sex::from_label("Otro"));
    }

    #[test]
    fn state_codes() {
        let state: StateCode = "cs".parse().unwrap();
        assert_eq!("CS", state.code());
        assert_eq!("Chiapas", state.name());
        assert_eq!(
            Err(GenerationError::InvalidState("ZZ".to_string())),
            "zz".parse::<StateCode>()
        );
    }
}
