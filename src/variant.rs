use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use super::*;

/// Handle for one implementation of the one-edit check.
///
/// Every variant returns exactly the same answer as `Variant::Naive`; they only differ in
/// speed. Test and benchmark drivers can iterate `Variant::ALL` to run all of them on the
/// same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// `one_edit_naive`, the reference.
    Naive,
    /// `one_edit_scalar`, separate byte loops for the same length and off by one cases.
    Scalar,
    /// `one_edit_words`, 8 bytes at a time in a `u64`.
    Words,
    /// `one_edit_sse`, 16 bytes at a time with SSE2.
    Sse,
    /// `one_edit_avx2`, 32 bytes at a time with AVX2.
    Avx2
}

impl Variant {
    pub const ALL: [Variant; 5] = [Variant::Naive, Variant::Scalar, Variant::Words, Variant::Sse, Variant::Avx2];

    pub fn name(self) -> &'static str {
        match self {
            Variant::Naive => "naive",
            Variant::Scalar => "scalar",
            Variant::Words => "words",
            Variant::Sse => "sse",
            Variant::Avx2 => "avx2"
        }
    }

    /// Number of bytes compared per step.
    pub fn lane_width(self) -> usize {
        match self {
            Variant::Naive | Variant::Scalar => 1,
            Variant::Words => 8,
            Variant::Sse => 16,
            Variant::Avx2 => 32
        }
    }

    /// Whether this variant runs its own code on the current CPU and build, rather than
    /// falling back to `one_edit_words`.
    pub fn is_supported(self) -> bool {
        match self {
            Variant::Naive | Variant::Scalar | Variant::Words => true,
            Variant::Sse => sse_detected(),
            Variant::Avx2 => avx2_detected()
        }
    }

    /// Return the variant if it is supported, otherwise an error.
    ///
    /// # Example
    /// ```
    /// # use one_edit::*;
    ///
    /// assert_eq!(Variant::Words.require(), Ok(Variant::Words));
    /// ```
    pub fn require(self) -> Result<Variant, VariantError> {
        if self.is_supported() {
            Ok(self)
        }else{
            log::warn!("one-edit variant {} requested but not supported, it would fall back to words", self);
            Err(VariantError::Unsupported(self))
        }
    }

    /// The fastest supported variant. Detected once, then cached.
    pub fn best() -> Variant {
        static BEST: OnceLock<Variant> = OnceLock::new();

        *BEST.get_or_init(|| {
            let best = if avx2_detected() {
                Variant::Avx2
            }else if sse_detected() {
                Variant::Sse
            }else{
                Variant::Words
            };

            log::debug!("one-edit comparisons use the {} variant ({} byte lanes)", best, best.lane_width());
            best
        })
    }

    /// The function implementing this variant.
    pub fn as_fn(self) -> fn(&[u8], &[u8]) -> bool {
        match self {
            Variant::Naive => one_edit_naive,
            Variant::Scalar => one_edit_scalar,
            Variant::Words => one_edit_words,
            Variant::Sse => one_edit_sse,
            Variant::Avx2 => one_edit_avx2
        }
    }

    /// Run this variant on `a` and `b`.
    ///
    /// # Example
    /// ```
    /// # use one_edit::*;
    ///
    /// for v in Variant::ALL.iter() {
    ///     assert!(v.run(b"abcd", b"abc"));
    /// }
    /// ```
    #[inline]
    pub fn run(self, a: &[u8], b: &[u8]) -> bool {
        (self.as_fn())(a, b)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = VariantError;

    /// Parse a variant name, ignoring ASCII case.
    ///
    /// # Example
    /// ```
    /// # use one_edit::*;
    ///
    /// assert_eq!("AVX2".parse::<Variant>(), Ok(Variant::Avx2));
    /// assert!("neon".parse::<Variant>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Variant, VariantError> {
        Variant::ALL.iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VariantError::Unknown(s.to_owned()))
    }
}

cfg_if::cfg_if! {
    if #[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))] {
        #[inline]
        pub(crate) fn sse_detected() -> bool {
            is_x86_feature_detected!("sse2")
        }

        #[inline]
        pub(crate) fn avx2_detected() -> bool {
            is_x86_feature_detected!("avx2")
        }
    } else {
        #[inline]
        pub(crate) fn sse_detected() -> bool {
            false
        }

        #[inline]
        pub(crate) fn avx2_detected() -> bool {
            false
        }
    }
}
