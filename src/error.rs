use thiserror::Error;

/// Why a CURP could not be generated. Generation stops at the first of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Fecha inválida: {0}. Formato esperado: DD/MM/AAAA")]
    InvalidDateFormat(String),

    #[error("Fecha futura no válida: {0}")]
    FutureDate(String),

    #[error("Fecha anterior a 1900 no válida: {0}")]
    DateBefore1900(String),

    #[error("Sexo inválido: {0}. Valores permitidos: H, M, X")]
    InvalidSex(String),

    #[error("Estado inválido: {0}. Debe ser una clave de 2 letras")]
    InvalidState(String),
}

/// First syntax rule a name field breaks.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("El campo no puede estar vacío")]
    Empty,

    #[error("Debe tener al menos 2 caracteres")]
    TooShort,

    #[error("Es demasiado largo (máximo 50 caracteres)")]
    TooLong,

    #[error("No puede contener números")]
    ContainsDigits,

    #[error("Contiene caracteres no permitidos")]
    ForbiddenCharacters,

    #[error("No puede tener espacios múltiples")]
    RepeatedWhitespace,

    #[error("Contiene un patrón sospechoso (letras repetidas)")]
    RepeatedCharacters,
}
