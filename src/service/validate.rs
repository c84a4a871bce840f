//! Input validation for employee fields.
//!
//! Bounds: name 2-100 characters, department 2-50 characters, email must
//! match a basic syntax check. Uniqueness is a cross-record concern and is
//! enforced at the service layer against the loaded table, not here.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::{ServiceError, ServiceResult};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 100;
const DEPARTMENT_MIN: usize = 2;
const DEPARTMENT_MAX: usize = 50;

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    // One @, something on both sides, a dot in the domain. Deliberately loose.
    EMAIL_RE.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"))
}

/// A field the client must supply; `None` is a validation error.
pub fn required(field: &str, value: Option<String>) -> ServiceResult<String> {
    value.ok_or_else(|| {
        ServiceError::Validation(format!("missing required field: {}", field))
    })
}

pub fn name(value: &str) -> ServiceResult<()> {
    bounded("name", value, NAME_MIN, NAME_MAX)
}

pub fn department(value: &str) -> ServiceResult<()> {
    bounded("department", value, DEPARTMENT_MIN, DEPARTMENT_MAX)
}

pub fn email(value: &str) -> ServiceResult<()> {
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "email {:?} is not a valid address",
            value
        )))
    }
}

fn bounded(field: &str, value: &str, min: usize, max: usize) -> ServiceResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(ServiceError::Validation(format!(
            "{} must be {}-{} characters, got {}",
            field, min, max, len
        )));
    }
    Ok(())
}
