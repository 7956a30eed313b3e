//! Direction of lossy integer division.

use core::fmt;

/// Which neighbour a non-integral quotient snaps to.
///
/// Directions are defined on the signed number line: `Up` is the ceiling
/// and `Down` the floor, for negative quotients too.  For non-negative
/// quotients `Down` coincides with truncation.
///
/// Exchange conversion lets the caller pick (e.g. `Down` for what a buyer
/// receives, `Up` for what they owe).  Range mapping picks per sign: away
/// from zero for value→percent, toward zero for percent→value.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::Rounding;
///
/// assert_eq!(Rounding::Up.opposite(), Rounding::Down);
/// assert_eq!(Rounding::Down.to_string(), "floor");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling, towards positive infinity.
    Up,
    /// Floor, towards negative infinity.
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// The other direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "ceil",
            Self::Down => "floor",
        })
    }
}
