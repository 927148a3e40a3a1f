/// Returns whether two strings are at most one edit apart, by walking both strings one byte
/// at a time.
///
/// An edit is one substitution, one insertion or one deletion of a single byte. This is the
/// reference that every other `one_edit_*` function must agree with.
///
/// # Arguments
/// * `a` - first string (slice)
/// * `b` - second string (slice)
///
/// # Example
/// ```
/// # use one_edit::*;
///
/// assert!(one_edit_naive(b"abc", b"abd"));
/// assert!(one_edit_naive(b"abc", b"bc"));
/// assert!(!one_edit_naive(b"abc", b"bb"));
/// ```
pub fn one_edit_naive(a: &[u8], b: &[u8]) -> bool {
    // swap so that a len >= b len
    let (a, b) = if a.len() < b.len() {(b, a)} else {(a, b)};

    if a.len() - b.len() > 1 {
        return false;
    }

    let same_len = a.len() == b.len();
    let mut consumed = false;
    let mut i = 0;

    while i < b.len() {
        let shift = (consumed && !same_len) as usize;

        if a[i + shift] != b[i] {
            if consumed {
                return false;
            }

            consumed = true;

            if !same_len {
                // skip the extra byte in a and retry b[i]
                continue;
            }
        }

        i += 1;
    }

    true
}
