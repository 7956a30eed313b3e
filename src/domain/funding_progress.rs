//! Fundraising progress of a hypercert listing.

use super::ExactInteger;
use crate::math::percentage;

/// Funds raised so far against an optional target, both in minor units.
///
/// Listings without a target (or with a zero target) have no computable
/// progress; the percentage accessors return `None` for them.
///
/// # Examples
///
/// ```
/// use hypercert_ratio::domain::{ExactInteger, FundingProgress};
///
/// let progress = FundingProgress::new(
///     ExactInteger::from(750_000u64),
///     Some(ExactInteger::from(1_000_000u64)),
/// );
/// assert_eq!(progress.percentage(), Some(75.0));
/// assert_eq!(progress.remaining(), Some(ExactInteger::from(250_000u64)));
/// assert!(!progress.is_fully_funded());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingProgress {
    raised: ExactInteger,
    target: Option<ExactInteger>,
}

impl FundingProgress {
    /// Creates a progress record.
    #[must_use]
    pub const fn new(raised: ExactInteger, target: Option<ExactInteger>) -> Self {
        Self { raised, target }
    }

    /// Amount raised so far.
    #[must_use]
    pub const fn raised(&self) -> &ExactInteger {
        &self.raised
    }

    /// Funding target, if the listing has one.
    #[must_use]
    pub const fn target(&self) -> Option<&ExactInteger> {
        self.target.as_ref()
    }

    /// Integer percentage raised; may exceed 100 when over-funded.
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        // integer operands never fail to parse
        percentage(Some(&self.raised), self.target.as_ref())
            .ok()
            .flatten()
    }

    /// Percentage raised, clamped to `[0, 100]` for progress bars.
    #[must_use]
    pub fn display_percentage(&self) -> Option<f64> {
        self.percentage().map(|p| p.clamp(0.0, 100.0))
    }

    /// Amount still needed to reach the target; zero once reached.
    #[must_use]
    pub fn remaining(&self) -> Option<ExactInteger> {
        self.target.as_ref().map(|target| {
            if self.raised >= *target {
                ExactInteger::zero()
            } else {
                target - &self.raised
            }
        })
    }

    /// Returns `true` if a target exists and has been reached.
    #[must_use]
    pub fn is_fully_funded(&self) -> bool {
        self.target
            .as_ref()
            .is_some_and(|target| self.raised >= *target)
    }
}
