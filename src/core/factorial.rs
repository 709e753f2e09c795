/// Largest input whose factorial still fits an `i64` exactly.
pub const MAX_EXACT_INPUT: i64 = 20;

/// Calculates `n!` by recursive multiplication.
///
/// Inputs `n <= 1` return 1; negative inputs therefore also return 1, which
/// is documented unspecified behavior rather than a mathematical result.
/// Inputs beyond [`MAX_EXACT_INPUT`] wrap silently instead of panicking.
pub fn factorial(n: i64) -> i64 {
    if n <= 1 {
        return 1;
    }
    n.wrapping_mul(factorial(n - 1))
}
