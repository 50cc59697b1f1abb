pub mod booking;
pub mod event;
pub mod health;
pub mod merchant;

use crate::error::AppError;

/// Pulls a required form field, rejecting requests that omit it.
pub(crate) fn require(value: Option<String>, field: &str) -> Result<String, AppError> {
    value.ok_or_else(|| AppError::Validation(format!("Missing required field: {field}")))
}

/// Like [`require`], but blank values are rejected too.
pub(crate) fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(AppError::Validation(format!(
            "Missing required field: {field}"
        ))),
    }
}

pub(crate) fn parse_i64(raw: &str, field: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation(format!("Invalid value for field: {field}")))
}

pub(crate) fn parse_f64(raw: &str, field: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation(format!("Invalid value for field: {field}")))
}

/// Ticket quantities are optional and default to zero; negatives are rejected.
pub(crate) fn parse_qty(value: Option<&str>, field: &str) -> Result<i64, AppError> {
    let Some(raw) = value else {
        return Ok(0);
    };
    if raw.trim().is_empty() {
        return Ok(0);
    }
    let qty = parse_i64(raw, field)?;
    if qty < 0 {
        return Err(AppError::Validation(format!(
            "Invalid value for field: {field}"
        )));
    }
    Ok(qty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_missing_field() {
        let err = require(None, "title").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Missing required field: title"));
    }

    #[test]
    fn test_require_accepts_empty_string() {
        assert_eq!(require(Some(String::new()), "title").unwrap(), "");
    }

    #[test]
    fn test_require_text_rejects_empty_string() {
        let err = require_text(Some(String::new()), "email").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Missing required field: email"));
    }

    #[test]
    fn test_parse_qty_defaults_to_zero() {
        assert_eq!(parse_qty(None, "standardQty").unwrap(), 0);
        assert_eq!(parse_qty(Some(""), "standardQty").unwrap(), 0);
    }

    #[test]
    fn test_parse_qty_rejects_negative() {
        let err = parse_qty(Some("-1"), "vipQty").unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid value for field: vipQty"));
    }

    #[test]
    fn test_parse_f64_rejects_garbage() {
        assert!(parse_f64("abc", "standardPrice").is_err());
        assert_eq!(parse_f64(" 5000 ", "standardPrice").unwrap(), 5000.0);
    }
}
