use crate::common::error::AppError;

/// Ids chegam como texto no path; qualquer coisa que não seja inteiro positivo é InvalidInput.
pub fn parse_id(raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::InvalidId(raw.to_string()))
}
