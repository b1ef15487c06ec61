//! Operation counters returned by the instrumented sorters.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Number of element comparisons and swaps performed by one sort call.
///
/// Counts only ever grow during a sort; sub-call counts are folded in
/// with `+=`.
///
/// # Example
///
/// ```
/// use sortbench_core::OperationCount;
///
/// let mut total = OperationCount::new(3, 1);
/// total += OperationCount::new(2, 2);
/// assert_eq!(total, OperationCount::new(5, 3));
/// assert_eq!(total.as_tuple(), (5, 3));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationCount {
    /// Element-to-element ordering tests.
    pub comparisons: u64,
    /// Element exchanges (for merge sort: takes from the right half).
    pub swaps: u64,
}

impl OperationCount {
    /// Zero comparisons, zero swaps.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a count pair.
    pub const fn new(comparisons: u64, swaps: u64) -> Self {
        Self { comparisons, swaps }
    }

    /// Records one comparison.
    #[inline]
    pub fn compare(&mut self) {
        self.comparisons += 1;
    }

    /// Records one swap.
    #[inline]
    pub fn swap(&mut self) {
        self.swaps += 1;
    }

    /// Returns the value of the given metric.
    pub fn get(&self, metric: Metric) -> u64 {
        match metric {
            Metric::Comparisons => self.comparisons,
            Metric::Swaps => self.swaps,
        }
    }

    /// Returns `(comparisons, swaps)`.
    pub fn as_tuple(&self) -> (u64, u64) {
        (self.comparisons, self.swaps)
    }
}

impl From<(u64, u64)> for OperationCount {
    fn from((comparisons, swaps): (u64, u64)) -> Self {
        Self::new(comparisons, swaps)
    }
}

impl Add for OperationCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.comparisons + rhs.comparisons, self.swaps + rhs.swaps)
    }
}

impl AddAssign for OperationCount {
    fn add_assign(&mut self, rhs: Self) {
        self.comparisons += rhs.comparisons;
        self.swaps += rhs.swaps;
    }
}

impl Sum for OperationCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for OperationCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.comparisons, self.swaps)
    }
}

/// Which half of an [`OperationCount`] a result column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Comparisons,
    Swaps,
}

impl Metric {
    /// Both metrics in column order.
    pub const ALL: [Metric; 2] = [Metric::Comparisons, Metric::Swaps];

    /// Column-name fragment for this metric.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Comparisons => "Comparisons",
            Metric::Swaps => "Swaps",
        }
    }

    /// Position of this metric within a (algorithm, distribution) column pair.
    pub fn index(&self) -> usize {
        match self {
            Metric::Comparisons => 0,
            Metric::Swaps => 1,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_counts() {
        let total: OperationCount = [(1, 0), (2, 3), (4, 5)]
            .into_iter()
            .map(OperationCount::from)
            .sum();
        assert_eq!(total, OperationCount::new(7, 8));
    }

    #[test]
    fn test_metric_lookup() {
        let count = OperationCount::new(10, 4);
        assert_eq!(count.get(Metric::Comparisons), 10);
        assert_eq!(count.get(Metric::Swaps), 4);
        assert_eq!(Metric::Swaps.index(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(OperationCount::new(45, 0).to_string(), "(45, 0)");
        assert_eq!(Metric::Comparisons.to_string(), "Comparisons");
    }
}
