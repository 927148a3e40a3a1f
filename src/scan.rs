use super::lanes::*;

/// Scan state threaded through one comparison.
///
/// `cursor` indexes the shorter operand. Once `consumed` is set, the longer operand of an
/// off-by-one pair is read one byte ahead of the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Scan {
    pub cursor: usize,
    consumed: bool
}

impl Scan {
    #[inline]
    pub fn new() -> Self {
        Self{
            cursor: 0,
            consumed: false
        }
    }

    #[inline]
    pub fn consumed(&self) -> bool {
        self.consumed
    }

    /// Record an error. Returns false if an error had already been recorded.
    #[inline]
    pub fn consume(&mut self) -> bool {
        !std::mem::replace(&mut self.consumed, true)
    }
}

/// Compare the rest of two equal length strings one byte at a time.
pub(crate) fn tail_same_len(scan: &mut Scan, a: &[u8], b: &[u8]) -> bool {
    debug_assert!(a.len() == b.len());
    debug_assert!(scan.cursor <= b.len());

    for (x, y) in a[scan.cursor..].iter().zip(&b[scan.cursor..]) {
        if x != y && !scan.consume() {
            return false;
        }
    }

    scan.cursor = b.len();
    true
}

/// Compare the rest of `long` and `short` one byte at a time, where `long` has exactly
/// one more byte than `short`.
pub(crate) fn tail_off_by_one(scan: &mut Scan, long: &[u8], short: &[u8]) -> bool {
    debug_assert!(long.len() == short.len() + 1);
    debug_assert!(scan.cursor <= short.len());

    let len = short.len();

    if !scan.consumed() {
        let diverge = long[scan.cursor..len].iter()
            .zip(&short[scan.cursor..])
            .position(|(x, y)| x != y);

        match diverge {
            Some(d) => {
                scan.cursor += d;
                scan.consume();
            },
            None => {
                // the extra byte is the last byte of long
                scan.cursor = len;
                return true;
            }
        }
    }

    // skip the extra byte, everything after it must line up
    let res = long[(scan.cursor + 1)..] == short[scan.cursor..];
    scan.cursor = len;
    res
}

/// Compare two equal length strings `L::WIDTH` bytes at a time, then finish with
/// `tail_same_len`.
///
/// Only the number of differing lanes matters here, not where they are.
///
/// # Safety
/// The CPU must support the instructions used by `L`.
#[inline(always)]
pub(crate) unsafe fn lanes_same_len<L: ByteLanes>(scan: &mut Scan, a: &[u8], b: &[u8]) -> bool {
    debug_assert!(a.len() == b.len());

    let len = b.len();
    let a_ptr = a.as_ptr();
    let b_ptr = b.as_ptr();

    while scan.cursor + L::WIDTH <= len {
        let a_lanes = L::loadu(a_ptr.add(scan.cursor));
        let b_lanes = L::loadu(b_ptr.add(scan.cursor));

        match L::mismatches(&a_lanes, &b_lanes).count() {
            0 => (),
            1 => if !scan.consume() {
                return false;
            },
            _ => return false
        }

        scan.cursor += L::WIDTH;
    }

    tail_same_len(scan, a, b)
}

/// Compare `long` and `short` `L::WIDTH` bytes at a time, where `long` has exactly one more
/// byte than `short`, then finish with `tail_off_by_one`.
///
/// Before the divergence point both strings are read at the same offset. The first differing
/// lane is located exactly so that every later load of `long` can be shifted by one.
///
/// # Safety
/// The CPU must support the instructions used by `L`.
#[inline(always)]
pub(crate) unsafe fn lanes_off_by_one<L: ByteLanes>(scan: &mut Scan, long: &[u8], short: &[u8]) -> bool {
    debug_assert!(long.len() == short.len() + 1);

    let len = short.len();
    let long_ptr = long.as_ptr();
    let short_ptr = short.as_ptr();

    // loads of long end at most at len here, one byte before its end
    while !scan.consumed() && scan.cursor + L::WIDTH <= len {
        let long_lanes = L::loadu(long_ptr.add(scan.cursor));
        let short_lanes = L::loadu(short_ptr.add(scan.cursor));

        match L::mismatches(&long_lanes, &short_lanes).first() {
            None => scan.cursor += L::WIDTH,
            Some(d) => {
                scan.cursor += d;
                scan.consume();
            }
        }
    }

    if scan.consumed() {
        // shifted loads of long end at most at len + 1 == long.len()
        while scan.cursor + L::WIDTH <= len {
            let long_lanes = L::loadu(long_ptr.add(scan.cursor + 1));
            let short_lanes = L::loadu(short_ptr.add(scan.cursor));

            if !L::mismatches(&long_lanes, &short_lanes).is_empty() {
                return false;
            }

            scan.cursor += L::WIDTH;
        }
    }

    tail_off_by_one(scan, long, short)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consume_is_one_way() {
        let mut scan = Scan::new();
        assert!(!scan.consumed());
        assert!(scan.consume());
        assert!(scan.consumed());
        assert!(!scan.consume());
        assert!(scan.consumed());
    }

    #[test]
    fn test_tail_same_len() {
        let mut scan = Scan::new();
        assert!(tail_same_len(&mut scan, b"abcd", b"abxd"));
        assert!(scan.consumed());
        assert_eq!(scan.cursor, 4);

        let mut scan = Scan::new();
        assert!(!tail_same_len(&mut scan, b"abcd", b"xbxd"));
    }

    #[test]
    fn test_tail_same_len_carries_error() {
        // an error found by an earlier lane makes any tail mismatch fatal
        let mut scan = Scan::new();
        scan.consume();
        scan.cursor = 2;
        assert!(tail_same_len(&mut scan, b"xxcd", b"yycd"));

        let mut scan = Scan::new();
        scan.consume();
        scan.cursor = 2;
        assert!(!tail_same_len(&mut scan, b"xxcd", b"yyce"));
    }

    #[test]
    fn test_tail_off_by_one() {
        let mut scan = Scan::new();
        assert!(tail_off_by_one(&mut scan, b"abXcd", b"abcd"));
        assert!(scan.consumed());

        let mut scan = Scan::new();
        assert!(tail_off_by_one(&mut scan, b"abcdX", b"abcd"));
        assert!(!scan.consumed());

        let mut scan = Scan::new();
        assert!(tail_off_by_one(&mut scan, b"Xabcd", b"abcd"));

        let mut scan = Scan::new();
        assert!(!tail_off_by_one(&mut scan, b"aXbcY", b"abcd"));

        let mut scan = Scan::new();
        assert!(tail_off_by_one(&mut scan, b"a", b""));
    }

    #[test]
    fn test_tail_off_by_one_after_shift() {
        // shifted at index 1 by an earlier lane, so long[i + 1] must equal short[i]
        let mut scan = Scan::new();
        scan.consume();
        scan.cursor = 1;
        assert!(tail_off_by_one(&mut scan, b"aXbcd", b"abcd"));

        let mut scan = Scan::new();
        scan.consume();
        scan.cursor = 1;
        assert!(!tail_off_by_one(&mut scan, b"aXbcd", b"abce"));
    }

    #[test]
    fn test_lanes_same_len_words() {
        let a = b"0123456789abcdefghij";
        let mut b = *a;
        b[9] = b'!';
        let mut scan = Scan::new();
        assert!(unsafe {lanes_same_len::<Swar8>(&mut scan, a, &b)});
        assert_eq!(scan.cursor, a.len());

        // two errors inside the same lane
        b[10] = b'!';
        let mut scan = Scan::new();
        assert!(!unsafe {lanes_same_len::<Swar8>(&mut scan, a, &b)});

        // two errors in different lanes
        b[10] = a[10];
        b[1] = b'!';
        let mut scan = Scan::new();
        assert!(!unsafe {lanes_same_len::<Swar8>(&mut scan, a, &b)});

        // one error in a lane, one in the tail
        b[1] = a[1];
        b[18] = b'!';
        let mut scan = Scan::new();
        assert!(!unsafe {lanes_same_len::<Swar8>(&mut scan, a, &b)});
    }

    #[test]
    fn test_lanes_off_by_one_locates_divergence() {
        let short = b"0123456789abcdefghijklmnop";

        for p in 0..=short.len() {
            let mut long = short.to_vec();
            long.insert(p, b'!');
            let mut scan = Scan::new();
            assert!(unsafe {lanes_off_by_one::<Swar8>(&mut scan, &long, short)}, "insert at {}", p);
            assert_eq!(scan.cursor, short.len());
        }
    }

    #[test]
    fn test_lanes_off_by_one_rejects_second_edit() {
        let short = b"0123456789abcdefghijklmnop";
        let mut long = short.to_vec();
        long.insert(3, b'!');
        long[20] = b'?';
        let mut scan = Scan::new();
        assert!(!unsafe {lanes_off_by_one::<Swar8>(&mut scan, &long, short)});
    }
}
