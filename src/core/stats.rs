/// Single-pass sum of a numeric sequence.
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Arithmetic mean of a numeric sequence, `None` when the sequence is empty.
pub fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(sum(values) as f64 / values.len() as f64)
}
