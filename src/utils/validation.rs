use crate::utils::error::{DemoError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_ordered_pair<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    lower: T,
    upper: T,
) -> Result<()> {
    if lower > upper {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", lower, upper),
            reason: "Lower bound must not exceed upper bound".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_slice<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(DemoError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "0 items".to_string(),
            reason: "Sequence must contain at least one element".to_string(),
        });
    }
    Ok(())
}
