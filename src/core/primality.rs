/// Deterministic primality test using 6k±1 trial division.
///
/// Numbers at or below 1 are not prime; 2 and 3 are prime; multiples of 2 or
/// 3 are not. Remaining candidates are trial-divided by `i` and `i + 2` for
/// `i = 5, 11, 17, …`. The loop bound `i <= num / i` is the division form of
/// `i * i <= num`, so the test stays correct across the whole `i64` range.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }

    let mut i: i64 = 5;
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
