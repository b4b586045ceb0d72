use super::{SuggestionResult, ValidationResult};
use serde::Serialize;
use serde_json::{json, Value};

fn to_json<T: Serialize>(value: &T) -> String {
    // Results hold only strings, numbers and string-keyed maps
    serde_json::to_string(value).unwrap_or_else(|e| json!({ "error": e.to_string() }).to_string())
}

impl ValidationResult {
    pub fn to_json(&self) -> String {
        to_json(self)
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl SuggestionResult {
    pub fn to_json(&self) -> String {
        to_json(self)
    }
}
