//! Field validation
//!
//! Every check runs regardless of earlier failures, and errors are reported in
//! field order: voltage, current, temperature, age, resistance. A value that does not
//! parse is reported with the same message as a value out of range.

use crate::model::{FormInput, RawFields};

/// Ordered validation messages; empty means the input may be submitted
pub type ValidationResult = Vec<String>;

pub const VOLTAGE_ERROR: &str = "Voltage must be >= 0V";
pub const CURRENT_ERROR: &str = "Current must be >= 0A";
pub const TEMPERATURE_ERROR: &str = "Temperature must be between -50°C and 100°C";
pub const AGE_ERROR: &str = "Age must be >= 0 months";
pub const RESISTANCE_ERROR: &str = "Resistance must be >= 0Ω";

pub const TEMPERATURE_MIN: f64 = -50.0;
pub const TEMPERATURE_MAX: f64 = 100.0;

/// Validate raw fields without building the request
pub fn validate(fields: &RawFields) -> ValidationResult {
    match parse(fields) {
        Ok(_) => Vec::new(),
        Err(errors) => errors,
    }
}

/// Validate raw fields and build the request body from them
pub fn parse(fields: &RawFields) -> Result<FormInput, ValidationResult> {
    let voltage = non_negative(&fields.voltage);
    let current = non_negative(&fields.current);
    let temperature = number(&fields.temperature)
        .filter(|t| (TEMPERATURE_MIN..=TEMPERATURE_MAX).contains(t));
    let age_months = fields.age_months.trim().parse::<u32>().ok();
    let resistance = non_negative(&fields.resistance);

    let mut errors = Vec::new();
    if voltage.is_none() {
        errors.push(VOLTAGE_ERROR.to_string());
    }
    if current.is_none() {
        errors.push(CURRENT_ERROR.to_string());
    }
    if temperature.is_none() {
        errors.push(TEMPERATURE_ERROR.to_string());
    }
    if age_months.is_none() {
        errors.push(AGE_ERROR.to_string());
    }
    if resistance.is_none() {
        errors.push(RESISTANCE_ERROR.to_string());
    }

    match (voltage, current, temperature, age_months, resistance) {
        (Some(voltage), Some(current), Some(temperature), Some(age_months), Some(resistance)) => {
            Ok(FormInput {
                voltage,
                current,
                temperature,
                age_months,
                resistance,
            })
        }
        _ => Err(errors),
    }
}

fn number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_negative(raw: &str) -> Option<f64> {
    number(raw).filter(|v| *v >= 0.0)
}
