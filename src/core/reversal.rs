/// Reverses a character sequence in place.
///
/// Two-pointer swap from both ends toward the center, `len / 2` iterations.
/// Zero- and one-length sequences are left untouched.
pub fn reverse_in_place(chars: &mut [char]) {
    let len = chars.len();
    for i in 0..len / 2 {
        chars.swap(i, len - 1 - i);
    }
}
