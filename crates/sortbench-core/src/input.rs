//! Input sequence generators.
//!
//! Every experiment size is probed with three input shapes: ascending,
//! descending and uniform random. The random shape draws each element
//! independently from `0..n`, so duplicates are expected.

use std::fmt;

use rand::Rng;

/// Shape of a generated input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// `[0, 1, ..., n-1]`
    Sorted,
    /// `[n-1, ..., 1, 0]`
    Reverse,
    /// `n` independent draws from `[0, n-1]`
    Random,
}

impl Distribution {
    /// All distributions in column order.
    pub const ALL: [Distribution; 3] = [
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::Random,
    ];

    /// Column-name fragment for this distribution.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Sorted => "Sorted",
            Distribution::Reverse => "Reverse",
            Distribution::Random => "Random",
        }
    }

    /// Position of this distribution within an algorithm's column block.
    pub fn index(&self) -> usize {
        match self {
            Distribution::Sorted => 0,
            Distribution::Reverse => 1,
            Distribution::Random => 2,
        }
    }

    /// Generates a sequence of length `n` with this shape.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_core::Distribution;
    ///
    /// let mut rng = rand::rng();
    /// assert_eq!(Distribution::Sorted.generate(4, &mut rng), vec![0, 1, 2, 3]);
    /// assert_eq!(Distribution::Reverse.generate(4, &mut rng), vec![3, 2, 1, 0]);
    ///
    /// let random = Distribution::Random.generate(100, &mut rng);
    /// assert_eq!(random.len(), 100);
    /// assert!(random.iter().all(|&x| (0..100).contains(&x)));
    /// ```
    pub fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<i64> {
        match self {
            Distribution::Sorted => ascending(n),
            Distribution::Reverse => descending(n),
            Distribution::Random => uniform(n, rng),
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `[0, 1, ..., n-1]`
pub fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

/// `[n-1, ..., 1, 0]`
pub fn descending(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

/// `n` independent uniform draws from `[0, n-1]`.
pub fn uniform<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    if n == 0 {
        return Vec::new();
    }
    let upper = n as i64;
    (0..n).map(|_| rng.random_range(0..upper)).collect()
}

/// The three inputs generated once for a given size.
///
/// Every algorithm at that size sorts copies of these same sequences, so the
/// random input is shared across algorithms. The sequences themselves are
/// never handed out mutably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSet {
    size: usize,
    sorted: Vec<i64>,
    reverse: Vec<i64>,
    random: Vec<i64>,
}

impl InputSet {
    /// Generates the three inputs for `size`.
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        Self {
            size,
            sorted: ascending(size),
            reverse: descending(size),
            random: uniform(size, rng),
        }
    }

    /// Length of every sequence in the set.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrows the input for `distribution`.
    pub fn get(&self, distribution: Distribution) -> &[i64] {
        match distribution {
            Distribution::Sorted => &self.sorted,
            Distribution::Reverse => &self.reverse,
            Distribution::Random => &self.random,
        }
    }

    /// Returns a private mutable copy of the input for `distribution`.
    pub fn fresh_copy(&self, distribution: Distribution) -> Vec<i64> {
        self.get(distribution).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let set = InputSet::generate(0, &mut rng);
        for distribution in Distribution::ALL {
            assert!(set.get(distribution).is_empty());
        }
    }

    #[test]
    fn test_random_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let values = uniform(1000, &mut rng);
        assert_eq!(values.len(), 1000);
        assert!(values.iter().all(|&v| (0..1000).contains(&v)));
    }

    #[test]
    fn test_random_has_duplicates() {
        // 1000 draws from 1000 values: a collision-free sample is practically impossible.
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut values = uniform(1000, &mut rng);
        values.sort_unstable();
        values.dedup();
        assert!(values.len() < 1000);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = InputSet::generate(50, &mut ChaCha8Rng::seed_from_u64(3));
        let b = InputSet::generate(50, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fresh_copy_is_independent() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let set = InputSet::generate(5, &mut rng);
        let mut copy = set.fresh_copy(Distribution::Reverse);
        copy.sort_unstable();
        assert_eq!(set.get(Distribution::Reverse), &[4, 3, 2, 1, 0]);
        assert_eq!(copy, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_distribution_order() {
        let names: Vec<_> = Distribution::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["Sorted", "Reverse", "Random"]);
        for (i, d) in Distribution::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
    }
}
