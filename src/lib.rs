//! Generation and validation of Mexican CURP codes, plus spelling
//! suggestions for the name fields that feed them.
//!
//! Four operations make up the public surface:
//!
//! - [`validate_field`]: syntax, lexicon and similarity checks on a given
//!   name or surname, returning ranked suggestions when it is misspelled.
//! - [`generate_curp`]: derives the 18-character code from
//!   [`PersonalData`], failing fast with a [`GenerationError`].
//! - [`validate_curp`]: decodes a code field by field; never fails, always
//!   returns a [`ValidationResult`].
//! - The reference tables: [`STATES`] (via [`state_name`]) and
//!   [`FieldKind`].
//!
//! ```
//! use curp::{generate_curp_on, validate_curp_on, PersonalData};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
//! let data = PersonalData::new("Pérez", "Aguilar", "Yair", "16/08/2000", "H", "CS");
//! let code = generate_curp_on(&data, today).unwrap();
//! assert_eq!("PEAY000816HCSRGR55", code);
//!
//! let result = validate_curp_on(&code, today);
//! assert!(result.valid);
//! ```
//!
//! All state is immutable reference data compiled in at build time, so
//! every function here is safe to call from any number of threads.

mod case;
pub mod distance;
mod error;
mod field;
pub mod generate;
pub mod lexicon;
mod normalize;
mod personal;
pub mod tables;
mod validate;

#[cfg(feature = "serialization")]
mod serialization;

pub use distance::Suggestion;
pub use error::{GenerationError, SyntaxError};
pub use field::{
    check_syntax, validate_field, validate_field_with, ErrorCategory, FieldKind, SpellCheckConfig,
    SuggestionResult,
};
pub use generate::{generate_curp, generate_curp_on};
pub use normalize::name_token;
pub use personal::{PersonalData, Sex, StateCode};
pub use tables::{state_name, STATES};
pub use validate::{
    is_well_formed, validate_curp, validate_curp_on, Token, ValidationResult, CURP_LENGTH,
};
