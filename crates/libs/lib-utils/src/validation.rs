//! # Validation Utilities
//!
//! Input validation helpers.

/// Validate that a string is not empty.
pub fn validate_not_empty(value: &str, field_name: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} cannot be empty", field_name))
    } else {
        Ok(())
    }
}

/// Validate minimum length.
pub fn validate_min_length(value: &str, min: usize, field_name: &str) -> Result<(), String> {
    if value.len() < min {
        Err(format!("{} must be at least {} characters long", field_name, min))
    } else {
        Ok(())
    }
}

/// Validate that a number lies within `min..=max`.
pub fn validate_range(value: i64, min: i64, max: i64, field_name: &str) -> Result<(), String> {
    if value < min || value > max {
        Err(format!("{} must be between {} and {}", field_name, min, max))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_empty() {
        assert!(validate_not_empty("a@x.com", "email").is_ok());
        assert_eq!(
            validate_not_empty("   ", "email").expect_err("Blank should fail"),
            "email cannot be empty"
        );
    }

    #[test]
    fn test_validate_range_bounds() {
        assert!(validate_range(60, 60, 120, "n").is_ok());
        assert!(validate_range(120, 60, 120, "n").is_ok());
        assert!(validate_range(59, 60, 120, "n").is_err());
    }
}
