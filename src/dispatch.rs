use super::lanes::*;
use super::scan::*;
use super::variant::*;

/// How the lengths of two strings relate, which decides the kind of edit that can separate
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRelation {
    /// Same length, only a substitution is possible.
    Equal,
    /// Lengths differ by one, only an insertion or deletion is possible.
    Adjacent,
    /// Lengths differ by more than one, never one edit apart.
    Incompatible
}

impl LengthRelation {
    /// Classify two lengths. The order of the arguments does not matter.
    ///
    /// # Example
    /// ```
    /// # use one_edit::*;
    ///
    /// assert_eq!(LengthRelation::of(3, 4), LengthRelation::Adjacent);
    /// assert_eq!(LengthRelation::of(0, 2), LengthRelation::Incompatible);
    /// ```
    #[inline]
    pub fn of(a_len: usize, b_len: usize) -> Self {
        match a_len.abs_diff(b_len) {
            0 => LengthRelation::Equal,
            1 => LengthRelation::Adjacent,
            _ => LengthRelation::Incompatible
        }
    }
}

// swap so that the first string is the longer one
#[inline(always)]
fn order<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8], LengthRelation) {
    let relation = LengthRelation::of(a.len(), b.len());

    if a.len() < b.len() {
        (b, a, relation)
    }else{
        (a, b, relation)
    }
}

#[inline(always)]
unsafe fn one_edit_lanes<L: ByteLanes>(a: &[u8], b: &[u8]) -> bool {
    let (long, short, relation) = order(a, b);
    let mut scan = Scan::new();

    match relation {
        LengthRelation::Equal => lanes_same_len::<L>(&mut scan, long, short),
        LengthRelation::Adjacent => lanes_off_by_one::<L>(&mut scan, long, short),
        LengthRelation::Incompatible => false
    }
}

/// Returns whether two strings are at most one edit apart, using the fastest implementation
/// available on the current CPU.
///
/// An edit is one substitution, one insertion or one deletion of a single byte. The result is
/// the same as `one_edit_naive`. The implementation is picked once by `Variant::best`: AVX2,
/// then SSE2, then 8 byte words.
///
/// # Arguments
/// * `a` - first string (slice)
/// * `b` - second string (slice)
///
/// # Example
/// ```
/// # use one_edit::*;
///
/// assert!(one_edit(b"", b"a"));
/// assert!(one_edit(b"abcd", b"abc"));
/// assert!(!one_edit(b"", b"aa"));
/// ```
pub fn one_edit(a: &[u8], b: &[u8]) -> bool {
    // best() only returns a vector variant after detecting it on this CPU
    match Variant::best() {
        #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
        Variant::Avx2 => unsafe {one_edit_x86_avx2(a, b)},
        #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
        Variant::Sse => unsafe {one_edit_x86_sse(a, b)},
        _ => one_edit_words(a, b)
    }
}

/// Returns whether two strings are at most one edit apart, by comparing one byte at a time
/// with separate loops for the same length and the off by one cases.
///
/// Unlike `one_edit_naive`, the shift of the longer string is applied once at the divergence
/// point instead of being recomputed for every byte.
///
/// # Arguments
/// * `a` - first string (slice)
/// * `b` - second string (slice)
///
/// # Example
/// ```
/// # use one_edit::*;
///
/// assert!(one_edit_scalar(b"abecd", b"abcd"));
/// assert!(!one_edit_scalar(b"acb", b"abc"));
/// ```
pub fn one_edit_scalar(a: &[u8], b: &[u8]) -> bool {
    let (long, short, relation) = order(a, b);
    let mut scan = Scan::new();

    match relation {
        LengthRelation::Equal => tail_same_len(&mut scan, long, short),
        LengthRelation::Adjacent => tail_off_by_one(&mut scan, long, short),
        LengthRelation::Incompatible => false
    }
}

/// Returns whether two strings are at most one edit apart, by comparing chunks of 64 bits.
///
/// This works on any target and is the fallback for `one_edit_sse` and `one_edit_avx2`.
///
/// # Arguments
/// * `a` - first string (slice)
/// * `b` - second string (slice)
///
/// # Example
/// ```
/// # use one_edit::*;
///
/// assert!(one_edit_words(b"abcdefghijk", b"abcdefghij"));
/// ```
pub fn one_edit_words(a: &[u8], b: &[u8]) -> bool {
    // loads are bounded by the slice lengths and Swar8 needs no special instructions
    unsafe {one_edit_lanes::<Swar8>(a, b)}
}

/// Returns whether two strings are at most one edit apart, by comparing chunks of 128 bits
/// with SSE2.
///
/// Falls back to `one_edit_words` if SSE2 is not available.
///
/// # Arguments
/// * `a` - first string (slice)
/// * `b` - second string (slice)
///
/// # Example
/// ```
/// # use one_edit::*;
///
/// assert!(one_edit_sse(b"aqzwsxedcrfvrfva", b"aqzwsxedcrfvrfv"));
/// ```
pub fn one_edit_sse(a: &[u8], b: &[u8]) -> bool {
    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if sse_detected() {
            return unsafe {one_edit_x86_sse(a, b)};
        }
    }

    one_edit_words(a, b)
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
#[target_feature(enable = "sse2")]
unsafe fn one_edit_x86_sse(a: &[u8], b: &[u8]) -> bool {
    one_edit_lanes::<Sse16>(a, b)
}

/// Returns whether two strings are at most one edit apart, by comparing chunks of 256 bits
/// with AVX2.
///
/// Falls back to `one_edit_words` if AVX2 is not available.
///
/// # Arguments
/// * `a` - first string (slice)
/// * `b` - second string (slice)
///
/// # Example
/// ```
/// # use one_edit::*;
///
/// let a = [b'a'; 40];
/// let mut b = a;
/// b[35] = b'b';
///
/// assert!(one_edit_avx2(&a, &b));
/// b[3] = b'b';
/// assert!(!one_edit_avx2(&a, &b));
/// ```
pub fn one_edit_avx2(a: &[u8], b: &[u8]) -> bool {
    #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
    {
        if avx2_detected() {
            return unsafe {one_edit_x86_avx2(a, b)};
        }
    }

    one_edit_words(a, b)
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
#[target_feature(enable = "avx2")]
unsafe fn one_edit_x86_avx2(a: &[u8], b: &[u8]) -> bool {
    one_edit_lanes::<Avx32>(a, b)
}
