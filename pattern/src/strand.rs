use std::fmt;

/// Orientation of a probe hit, carried by the sign of its position
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Strand {
    /// Sense strand, positive positions
    Forward,
    /// Reverse complement strand, negative positions
    Reverse,
}

impl Strand {
    /// Strand encoded by a signed position
    pub fn of(pos: i64) -> Self {
        if pos < 0 {
            Strand::Reverse
        } else {
            Strand::Forward
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// Checks if both positions lie on the same strand. Reverse hits are stored negated so
/// the XOR of the two is non-negative exactly when the signs agree.
#[inline]
pub fn same_strand(a: i64, b: i64) -> bool {
    (a ^ b) >= 0
}
