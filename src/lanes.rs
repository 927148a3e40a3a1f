//! Fixed-width byte lanes behind a small uniform interface.
//!
//! The scanners in this crate only ever need four things from a vector unit: load `WIDTH`
//! bytes from an unaligned pointer, compare two loads byte by byte, count how many lanes
//! differ and find the first lane that differs. `ByteLanes` covers the first two and
//! `Mismatches` the last two, so the scanning logic never sees an intrinsic type.

cfg_if::cfg_if! {
    if #[cfg(all(feature = "simd", target_arch = "x86_64"))] {
        use core::arch::x86_64::*;
    } else if #[cfg(all(feature = "simd", target_arch = "x86"))] {
        use core::arch::x86::*;
    }
}

/// ByteLanes provides a uniform interface for comparing `WIDTH` bytes at once.
pub trait ByteLanes: Sized {
    /// Number of bytes held by one vector.
    const WIDTH: usize;

    /// Load `WIDTH` bytes starting at `ptr`.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `WIDTH` bytes, and the CPU must support the
    /// instructions used by the implementation.
    unsafe fn loadu(ptr: *const u8) -> Self;

    /// Compare two vectors byte by byte and report which lanes differ.
    ///
    /// # Safety
    /// The CPU must support the instructions used by the implementation.
    unsafe fn mismatches(a: &Self, b: &Self) -> Mismatches;
}

/// The set of differing lanes from one byte-wise comparison.
///
/// Each lane owns `stride` bits of `bits`, and a lane differs iff its lowest bit is set.
/// Movemask-based vectors use one bit per lane, word-based ones use one byte per lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatches {
    bits: u64,
    stride: u32
}

impl Mismatches {
    /// Build from a movemask-style equality mask, where bit `i` is set iff lane `i` is equal.
    ///
    /// Only the low `width` bits are considered.
    #[inline]
    pub fn from_eq_mask(eq: u32, width: usize) -> Self {
        debug_assert!(width <= 32);

        Self{
            bits: !(eq as u64) & ((1u64 << width) - 1),
            stride: 1
        }
    }

    /// Build from a word where the lowest bit of byte `i` is set iff lane `i` differs,
    /// and every other bit is clear.
    #[inline]
    pub fn from_byte_flags(flags: u64) -> Self {
        debug_assert!(flags & !0x0101010101010101u64 == 0);

        Self{
            bits: flags,
            stride: 8
        }
    }

    /// Number of lanes that differ.
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Index of the first lane that differs, if any.
    #[inline]
    pub fn first(&self) -> Option<usize> {
        if self.bits == 0 {
            None
        }else{
            Some((self.bits.trailing_zeros() / self.stride) as usize)
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// 8 x 8 vector backed with one `u64`, usable on any target.
#[derive(Debug, Clone, Copy)]
pub struct Swar8 {
    v: u64
}

impl ByteLanes for Swar8 {
    const WIDTH: usize = 8;

    #[inline]
    unsafe fn loadu(ptr: *const u8) -> Swar8 {
        // little endian so the first byte in memory is the lowest byte of the word
        Swar8{
            v: u64::from_le_bytes(std::ptr::read_unaligned(ptr as *const [u8; 8]))
        }
    }

    #[inline]
    unsafe fn mismatches(a: &Swar8, b: &Swar8) -> Mismatches {
        let mut r = a.v ^ b.v;
        // reduce or by "folding" one half of each byte onto the other multiple times
        r |= r >> 4;
        // ...00001111
        r &= 0x0f0f0f0f0f0f0f0fu64;
        r |= r >> 2;
        // ...00000011
        r &= 0x0303030303030303u64;
        r |= r >> 1;
        // ...00000001
        r &= 0x0101010101010101u64;

        Mismatches::from_byte_flags(r)
    }
}

/// 1 x 16 x 8 vector backed with one SSE2 vector
#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
#[derive(Debug, Clone, Copy)]
pub struct Sse16 {
    v: __m128i
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
impl ByteLanes for Sse16 {
    const WIDTH: usize = 16;

    #[target_feature(enable = "sse2")]
    #[inline]
    unsafe fn loadu(ptr: *const u8) -> Sse16 {
        Sse16{
            v: _mm_loadu_si128(ptr as *const __m128i)
        }
    }

    #[target_feature(enable = "sse2")]
    #[inline]
    unsafe fn mismatches(a: &Sse16, b: &Sse16) -> Mismatches {
        // pack the 16 byte comparisons into the low bits of an int
        let eq = _mm_movemask_epi8(_mm_cmpeq_epi8(a.v, b.v)) as u32;
        Mismatches::from_eq_mask(eq, 16)
    }
}

/// 1 x 32 x 8 vector backed with one AVX2 vector
#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
#[derive(Debug, Clone, Copy)]
pub struct Avx32 {
    v: __m256i
}

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
impl ByteLanes for Avx32 {
    const WIDTH: usize = 32;

    #[target_feature(enable = "avx2")]
    #[inline]
    unsafe fn loadu(ptr: *const u8) -> Avx32 {
        // unaligned, so must use loadu
        Avx32{
            v: _mm256_loadu_si256(ptr as *const __m256i)
        }
    }

    #[target_feature(enable = "avx2")]
    #[inline]
    unsafe fn mismatches(a: &Avx32, b: &Avx32) -> Mismatches {
        let eq = _mm256_movemask_epi8(_mm256_cmpeq_epi8(a.v, b.v)) as u32;
        Mismatches::from_eq_mask(eq, 32)
    }
}
